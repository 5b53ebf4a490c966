//! Response classification and typed replies
//!
//! A response is classified once, immediately after the round-trip: attempt
//! a strict JSON parse, and on success wrap the value in the reply type for
//! the originating request kind. A parse failure is terminal for every kind
//! except print/label retrieval, whose expected body is an HTML document
//! passed through unchanged. The dispatcher holds no cross-call state.

use crate::error::TransportError;
use nwl_core::RequestKind;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// A parsed gateway reply
///
/// Wraps the raw JSON document without validating its shape; accessors read
/// the conventional `Status`/`Message`/`Result` members when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    raw: Value,
}

impl GatewayReply {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The raw JSON document
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The `Status` member, when present
    pub fn status(&self) -> Option<&str> {
        self.raw.get("Status").and_then(Value::as_str)
    }

    /// Whether the gateway reported `Status: "SUCCESS"`
    pub fn is_success(&self) -> bool {
        self.status() == Some("SUCCESS")
    }

    /// The `Message` member, or an empty string
    pub fn message(&self) -> &str {
        self.raw.get("Message").and_then(Value::as_str).unwrap_or("")
    }

    /// The `Result` member, when present
    pub fn result(&self) -> Option<&Value> {
        self.raw.get("Result")
    }

    /// Decode the `Result` member into a typed record
    pub fn result_as<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        self.result()
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
    }
}

/// `Result` member of a successful create-order reply
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOrderResult {
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,
    #[serde(rename = "MerchantOrderNo")]
    pub merchant_order_no: String,
    #[serde(rename = "TradeNo")]
    pub trade_no: String,
}

/// `Result` member of a successful query-order reply
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryOrderResult {
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,
    #[serde(rename = "MerchantOrderNo")]
    pub merchant_order_no: String,
    #[serde(rename = "LogisticsStatus")]
    pub logistics_status: String,
}

/// Reply to a create-order request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderResponse {
    reply: GatewayReply,
}

impl CreateOrderResponse {
    pub fn new(reply: GatewayReply) -> Self {
        Self { reply }
    }

    pub fn reply(&self) -> &GatewayReply {
        &self.reply
    }

    /// The typed order record, when the gateway returned one
    pub fn order(&self) -> serde_json::Result<Option<CreateOrderResult>> {
        self.reply.result_as()
    }
}

/// Reply to a query-order request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrderResponse {
    reply: GatewayReply,
}

impl QueryOrderResponse {
    pub fn new(reply: GatewayReply) -> Self {
        Self { reply }
    }

    pub fn reply(&self) -> &GatewayReply {
        &self.reply
    }

    /// The typed status record, when the gateway returned one
    pub fn status(&self) -> serde_json::Result<Option<QueryOrderResult>> {
        self.reply.result_as()
    }
}

/// Reply to a print-order request: JSON or the expected HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOrderResponse {
    Json(GatewayReply),
    Html(String),
}

impl PrintOrderResponse {
    /// The printable HTML content
    ///
    /// An HTML body is returned unchanged; a JSON reply carries the markup
    /// in its `Result` member.
    pub fn html_content(&self) -> &str {
        match self {
            PrintOrderResponse::Html(html) => html,
            PrintOrderResponse::Json(reply) => {
                reply.result().and_then(Value::as_str).unwrap_or("")
            }
        }
    }
}

/// A classified gateway response, tagged by the originating request kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogisticsResponse {
    Map(GatewayReply),
    CreateOrder(CreateOrderResponse),
    QueryOrder(QueryOrderResponse),
    PrintOrder(PrintOrderResponse),
}

impl LogisticsResponse {
    /// The parsed reply, when the response was structured JSON
    pub fn reply(&self) -> Option<&GatewayReply> {
        match self {
            LogisticsResponse::Map(reply) => Some(reply),
            LogisticsResponse::CreateOrder(response) => Some(response.reply()),
            LogisticsResponse::QueryOrder(response) => Some(response.reply()),
            LogisticsResponse::PrintOrder(PrintOrderResponse::Json(reply)) => Some(reply),
            LogisticsResponse::PrintOrder(PrintOrderResponse::Html(_)) => None,
        }
    }

    /// Whether a structured reply reported `Status: "SUCCESS"`
    ///
    /// An opaque HTML body has no status member and reports `false`.
    pub fn is_success(&self) -> bool {
        self.reply().is_some_and(GatewayReply::is_success)
    }
}

/// Classify a raw response body for the request kind that produced it
///
/// # Errors
///
/// Returns `TransportError::Parse` carrying the parse detail and the HTTP
/// status code when the body is not JSON and the kind requires structured
/// output.
pub fn dispatch(
    kind: RequestKind,
    status: u16,
    body: &str,
) -> Result<LogisticsResponse, TransportError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let reply = GatewayReply::new(value);
            Ok(match kind {
                RequestKind::Map => LogisticsResponse::Map(reply),
                RequestKind::CreateOrder => {
                    LogisticsResponse::CreateOrder(CreateOrderResponse::new(reply))
                }
                RequestKind::QueryOrder => {
                    LogisticsResponse::QueryOrder(QueryOrderResponse::new(reply))
                }
                RequestKind::PrintOrder => {
                    LogisticsResponse::PrintOrder(PrintOrderResponse::Json(reply))
                }
            })
        }
        Err(_) if kind.expects_opaque_body() => Ok(LogisticsResponse::PrintOrder(
            PrintOrderResponse::Html(body.to_string()),
        )),
        Err(err) => Err(TransportError::Parse {
            status,
            detail: err.to_string(),
        }),
    }
}
