//! # NWL HTTP
//!
//! HTTP transport and response handling for the NewebPay logistics gateway.
//!
//! This crate provides:
//! - A reqwest-based client that signs and posts gateway requests
//! - A pluggable transport trait for custom HTTP stacks
//! - Response dispatch into typed replies (JSON) or opaque bodies (HTML)
//! - An auto-submitting HTML form builder for the browser redirect flow
//!
//! ## Example
//!
//! ```ignore
//! use nwl_core::{Credentials, LgsType, ShipType, TradeType};
//! use nwl_http::{LogisticsClient, LogisticsResponse};
//!
//! let client = LogisticsClient::new(Credentials::new(merchant_id, hash_key, hash_iv));
//!
//! let request = client
//!     .create_order()
//!     .merchant_order_no("ORDER123")
//!     .trade_type(TradeType::Payment)
//!     .user_name("Test User")
//!     .user_email("test@example.com")
//!     .amt(100)
//!     .lgs_type(LgsType::B2C)
//!     .ship_type(ShipType::SevenEleven)
//!     .time_stamp_now();
//!
//! match client.send(&request).await? {
//!     LogisticsResponse::CreateOrder(response) => {
//!         println!("trade no: {:?}", response.order()?);
//!     }
//!     _ => unreachable!("dispatch follows the request kind"),
//! }
//! ```

mod client;
mod error;
mod form;
mod response;
mod transport;

pub use client::LogisticsClient;
pub use error::TransportError;
pub use form::{build_form, FormOptions};
pub use response::{
    dispatch, CreateOrderResponse, CreateOrderResult, GatewayReply, LogisticsResponse,
    PrintOrderResponse, QueryOrderResponse, QueryOrderResult,
};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
