//! Protocol enums and constants for the NewebPay logistics gateway
//!
//! The wire values here are fixed by the gateway and must be transmitted
//! verbatim; the serde renames match the strings the API documents.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Protocol version transmitted as `Version_`
pub const PROTOCOL_VERSION: &str = "1.0";

/// Logistics type (`LgsType`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LgsType {
    /// Business to consumer
    B2C,
    /// Consumer to consumer
    C2C,
}

impl LgsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LgsType::B2C => "B2C",
            LgsType::C2C => "C2C",
        }
    }
}

/// Shipping type (`ShipType`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShipType {
    /// 7-Eleven
    #[serde(rename = "7-11")]
    SevenEleven,
    /// FamilyMart
    #[serde(rename = "FAMIC2C")]
    Family,
    /// Hi-Life
    #[serde(rename = "HILIFEC2C")]
    HiLife,
    /// OK Mart
    #[serde(rename = "OKMARTC2C")]
    OkMart,
}

impl ShipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::SevenEleven => "7-11",
            ShipType::Family => "FAMIC2C",
            ShipType::HiLife => "HILIFEC2C",
            ShipType::OkMart => "OKMARTC2C",
        }
    }
}

/// Trade type (`TradeType`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TradeType {
    /// Payment collected on delivery
    #[serde(rename = "1")]
    Payment,
    /// No payment collection
    #[serde(rename = "3")]
    NonPayment,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Payment => "1",
            TradeType::NonPayment => "3",
        }
    }
}

/// Response format requested from the gateway (`RespondType_`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RespondType {
    #[default]
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "String")]
    String,
}

impl RespondType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RespondType::Json => "JSON",
            RespondType::Html => "HTML",
            RespondType::String => "String",
        }
    }
}

/// Gateway environment
///
/// The test environment accepts the sandbox credentials issued by NewebPay;
/// production requires live merchant credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl Environment {
    /// Base URL for the logistics API in this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Test => "https://ccore.newebpay.com/API/Logistic",
            Environment::Production => "https://core.newebpay.com/API/Logistic",
        }
    }
}

/// The four supported gateway operations
///
/// The kind determines which schema applies to the request content, which
/// endpoint path the payload is posted to, and which response shape is
/// expected back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Store-map selection (browser redirect flow)
    Map,
    /// Create a logistics order
    CreateOrder,
    /// Query order status
    QueryOrder,
    /// Retrieve the shipping label for printing
    PrintOrder,
}

impl RequestKind {
    /// Endpoint path appended to the environment base URL
    pub fn path(&self) -> &'static str {
        match self {
            RequestKind::Map => "/map",
            RequestKind::CreateOrder => "/create",
            RequestKind::QueryOrder => "/query",
            RequestKind::PrintOrder => "/print",
        }
    }

    /// Whether a non-JSON response body is expected for this kind
    ///
    /// The print endpoint answers with an HTML document that is handed to
    /// the browser unchanged; every other kind requires structured JSON.
    pub fn expects_opaque_body(&self) -> bool {
        matches!(self, RequestKind::PrintOrder)
    }
}

impl Display for RequestKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RequestKind::Map => "map",
            RequestKind::CreateOrder => "create-order",
            RequestKind::QueryOrder => "query-order",
            RequestKind::PrintOrder => "print-order",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(LgsType::B2C.as_str(), "B2C");
        assert_eq!(ShipType::SevenEleven.as_str(), "7-11");
        assert_eq!(ShipType::Family.as_str(), "FAMIC2C");
        assert_eq!(TradeType::Payment.as_str(), "1");
        assert_eq!(TradeType::NonPayment.as_str(), "3");
        assert_eq!(RespondType::Json.as_str(), "JSON");
    }

    #[test]
    fn test_serde_matches_wire_values() {
        assert_eq!(serde_json::to_string(&ShipType::SevenEleven).unwrap(), "\"7-11\"");
        assert_eq!(serde_json::to_string(&TradeType::Payment).unwrap(), "\"1\"");
        assert_eq!(serde_json::to_string(&RespondType::Json).unwrap(), "\"JSON\"");
    }

    #[test]
    fn test_environment_urls() {
        assert!(Environment::Test.base_url().contains("ccore.newebpay.com"));
        assert!(Environment::Production.base_url().contains("core.newebpay.com"));
        assert!(!Environment::Production.base_url().contains("ccore"));
    }

    #[test]
    fn test_default_environment_is_test() {
        assert_eq!(Environment::default(), Environment::Test);
    }

    #[test]
    fn test_request_kind_paths() {
        assert_eq!(RequestKind::Map.path(), "/map");
        assert_eq!(RequestKind::CreateOrder.path(), "/create");
        assert_eq!(RequestKind::QueryOrder.path(), "/query");
        assert_eq!(RequestKind::PrintOrder.path(), "/print");
    }

    #[test]
    fn test_only_print_expects_opaque_body() {
        assert!(RequestKind::PrintOrder.expects_opaque_body());
        assert!(!RequestKind::Map.expects_opaque_body());
        assert!(!RequestKind::CreateOrder.expects_opaque_body());
        assert!(!RequestKind::QueryOrder.expects_opaque_body());
    }
}
