//! Request builders for the four gateway operations
//!
//! One builder struct per request kind, selected at the call site; all four
//! satisfy [`LogisticsRequest`], the capability the client and the signing
//! pipeline consume. Setters are chainable and insert the gateway's wire
//! field names into the underlying [`FieldMap`], so the canonical encoding
//! reproduces the order in which the caller configured the request.

use crate::error::ValidationError;
use crate::fields::{FieldMap, FieldValue};
use crate::schema::{rules_for, validate_fields};
use crate::types::{LgsType, RequestKind, ShipType, TradeType};
use chrono::Utc;

/// A request that can be validated and signed
///
/// Implementations produce an ordered field mapping and know which schema
/// and endpoint apply to it.
pub trait LogisticsRequest {
    fn kind(&self) -> RequestKind;

    fn fields(&self) -> &FieldMap;

    /// Validate the content against this kind's schema
    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(rules_for(self.kind()), self.fields())
    }
}

/// Store-map selection request (browser redirect flow)
#[derive(Debug, Clone, Default)]
pub struct MapRequest {
    fields: FieldMap,
}

impl MapRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant_order_no(mut self, order_no: impl Into<String>) -> Self {
        self.fields.insert("MerchantOrderNo", order_no.into());
        self
    }

    pub fn time_stamp(mut self, time_stamp: impl Into<FieldValue>) -> Self {
        self.fields.insert("TimeStamp", time_stamp);
        self
    }

    /// Set `TimeStamp` to the current unix time
    pub fn time_stamp_now(self) -> Self {
        self.time_stamp(Utc::now().timestamp())
    }

    pub fn lgs_type(mut self, lgs_type: LgsType) -> Self {
        self.fields.insert("LgsType", lgs_type.as_str());
        self
    }

    pub fn ship_type(mut self, ship_type: ShipType) -> Self {
        self.fields.insert("ShipType", ship_type.as_str());
        self
    }

    /// URL the browser is redirected to after the store is chosen
    pub fn return_url(mut self, url: impl Into<String>) -> Self {
        self.fields.insert("ReturnURL", url.into());
        self
    }

    pub fn logistics_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.fields.insert("LogisticsSubType", sub_type.into());
        self
    }

    /// Whether payment is collected at the store
    pub fn is_collection(mut self, collection: bool) -> Self {
        self.fields.insert("IsCollection", if collection { "Y" } else { "N" });
        self
    }

    /// Server-side notification URL
    pub fn server_reply_url(mut self, url: impl Into<String>) -> Self {
        self.fields.insert("ServerReplyURL", url.into());
        self
    }

    /// Opaque data echoed back with the reply
    pub fn extra_data(mut self, data: impl Into<String>) -> Self {
        self.fields.insert("ExtraData", data.into());
        self
    }

    pub fn device(mut self, device: i64) -> Self {
        self.fields.insert("Device", device);
        self
    }
}

impl LogisticsRequest for MapRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Map
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// Create a logistics order
#[derive(Debug, Clone, Default)]
pub struct CreateOrderRequest {
    fields: FieldMap,
}

impl CreateOrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant_order_no(mut self, order_no: impl Into<String>) -> Self {
        self.fields.insert("MerchantOrderNo", order_no.into());
        self
    }

    pub fn time_stamp(mut self, time_stamp: impl Into<FieldValue>) -> Self {
        self.fields.insert("TimeStamp", time_stamp);
        self
    }

    /// Set `TimeStamp` to the current unix time
    pub fn time_stamp_now(self) -> Self {
        self.time_stamp(Utc::now().timestamp())
    }

    pub fn trade_type(mut self, trade_type: TradeType) -> Self {
        self.fields.insert("TradeType", trade_type.as_str());
        self
    }

    /// Sender name
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.fields.insert("UserName", name.into());
        self
    }

    pub fn user_tel(mut self, tel: impl Into<String>) -> Self {
        self.fields.insert("UserTel", tel.into());
        self
    }

    pub fn user_email(mut self, email: impl Into<String>) -> Self {
        self.fields.insert("UserEmail", email.into());
        self
    }

    /// Convenience-store branch identifier
    pub fn store_id(mut self, id: impl Into<String>) -> Self {
        self.fields.insert("StoreID", id.into());
        self
    }

    /// Order amount
    pub fn amt(mut self, amount: i64) -> Self {
        self.fields.insert("Amt", amount);
        self
    }

    pub fn lgs_type(mut self, lgs_type: LgsType) -> Self {
        self.fields.insert("LgsType", lgs_type.as_str());
        self
    }

    pub fn ship_type(mut self, ship_type: ShipType) -> Self {
        self.fields.insert("ShipType", ship_type.as_str());
        self
    }

    pub fn receiver_name(mut self, name: impl Into<String>) -> Self {
        self.fields.insert("ReceiverName", name.into());
        self
    }

    pub fn receiver_phone(mut self, phone: impl Into<String>) -> Self {
        self.fields.insert("ReceiverPhone", phone.into());
        self
    }

    pub fn receiver_cell_phone(mut self, cell_phone: impl Into<String>) -> Self {
        self.fields.insert("ReceiverCellPhone", cell_phone.into());
        self
    }

    pub fn receiver_email(mut self, email: impl Into<String>) -> Self {
        self.fields.insert("ReceiverEmail", email.into());
        self
    }

    pub fn logistics_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.fields.insert("LogisticsSubType", sub_type.into());
        self
    }
}

impl LogisticsRequest for CreateOrderRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::CreateOrder
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// Query the status of an existing order
#[derive(Debug, Clone, Default)]
pub struct QueryOrderRequest {
    fields: FieldMap,
}

impl QueryOrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant_order_no(mut self, order_no: impl Into<String>) -> Self {
        self.fields.insert("MerchantOrderNo", order_no.into());
        self
    }

    pub fn time_stamp(mut self, time_stamp: impl Into<FieldValue>) -> Self {
        self.fields.insert("TimeStamp", time_stamp);
        self
    }

    /// Set `TimeStamp` to the current unix time
    pub fn time_stamp_now(self) -> Self {
        self.time_stamp(Utc::now().timestamp())
    }

    /// Shipment identifier assigned by the gateway
    pub fn logistics_id(mut self, id: impl Into<String>) -> Self {
        self.fields.insert("LogisticsID", id.into());
        self
    }
}

impl LogisticsRequest for QueryOrderRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::QueryOrder
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// Retrieve the shipping label for printing
///
/// The gateway answers this request with an HTML document.
#[derive(Debug, Clone, Default)]
pub struct PrintOrderRequest {
    fields: FieldMap,
}

impl PrintOrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merchant_order_no(mut self, order_no: impl Into<String>) -> Self {
        self.fields.insert("MerchantOrderNo", order_no.into());
        self
    }

    pub fn time_stamp(mut self, time_stamp: impl Into<FieldValue>) -> Self {
        self.fields.insert("TimeStamp", time_stamp);
        self
    }

    /// Set `TimeStamp` to the current unix time
    pub fn time_stamp_now(self) -> Self {
        self.time_stamp(Utc::now().timestamp())
    }

    /// Shipment identifier assigned by the gateway
    pub fn logistics_id(mut self, id: impl Into<String>) -> Self {
        self.fields.insert("LogisticsID", id.into());
        self
    }
}

impl LogisticsRequest for PrintOrderRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::PrintOrder
    }

    fn fields(&self) -> &FieldMap {
        &self.fields
    }
}
