//! Declarative schema validation for request content
//!
//! Each request kind has a static rule table describing which fields are
//! required and what shape each value must have. One generic validator walks
//! the table and returns every violation it finds, so the rules stay
//! unit-testable independent of the signing pipeline.
//!
//! Validation here covers business-level field presence and shape only; the
//! HashKey/HashIV byte-length invariants are enforced by the signing
//! pipeline itself.

use crate::error::ValidationError;
use crate::fields::{FieldMap, FieldValue};
use crate::types::RequestKind;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

/// Shape requirement for a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Any string or integer
    Any,
    /// Non-empty string (integers always pass)
    NonEmpty,
    /// Absolute URL
    Url,
    /// Email address
    Email,
    /// Integer greater than zero
    PositiveInt,
    /// Any integer
    Integer,
    /// One of a fixed set of wire values
    OneOf(&'static [&'static str]),
}

/// One rule in a request kind's schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub check: Check,
}

const fn required(name: &'static str, check: Check) -> FieldRule {
    FieldRule { name, required: true, check }
}

const fn optional(name: &'static str, check: Check) -> FieldRule {
    FieldRule { name, required: false, check }
}

const LGS_TYPES: &[&str] = &["B2C", "C2C"];
const SHIP_TYPES: &[&str] = &["7-11", "FAMIC2C", "HILIFEC2C", "OKMARTC2C"];
const TRADE_TYPES: &[&str] = &["1", "3"];
const YES_NO: &[&str] = &["Y", "N"];

static MAP_RULES: &[FieldRule] = &[
    required("MerchantOrderNo", Check::NonEmpty),
    required("LgsType", Check::OneOf(LGS_TYPES)),
    required("ShipType", Check::OneOf(SHIP_TYPES)),
    required("ReturnURL", Check::Url),
    required("TimeStamp", Check::Any),
    optional("LogisticsSubType", Check::Any),
    optional("IsCollection", Check::OneOf(YES_NO)),
    optional("ServerReplyURL", Check::Url),
    optional("ExtraData", Check::Any),
    optional("Device", Check::Integer),
];

static CREATE_ORDER_RULES: &[FieldRule] = &[
    required("MerchantOrderNo", Check::NonEmpty),
    required("TradeType", Check::OneOf(TRADE_TYPES)),
    required("UserName", Check::NonEmpty),
    optional("UserTel", Check::Any),
    required("UserEmail", Check::Email),
    optional("StoreID", Check::Any),
    required("Amt", Check::PositiveInt),
    required("LgsType", Check::OneOf(LGS_TYPES)),
    required("ShipType", Check::OneOf(SHIP_TYPES)),
    required("TimeStamp", Check::Any),
    optional("ReceiverName", Check::Any),
    optional("ReceiverPhone", Check::Any),
    optional("ReceiverCellPhone", Check::Any),
    optional("ReceiverEmail", Check::Email),
    optional("LogisticsSubType", Check::Any),
];

static QUERY_ORDER_RULES: &[FieldRule] = &[
    required("MerchantOrderNo", Check::NonEmpty),
    required("TimeStamp", Check::Any),
    optional("LogisticsID", Check::Any),
];

static PRINT_ORDER_RULES: &[FieldRule] = &[
    required("MerchantOrderNo", Check::NonEmpty),
    required("TimeStamp", Check::Any),
    optional("LogisticsID", Check::Any),
];

/// The schema for a request kind
pub fn rules_for(kind: RequestKind) -> &'static [FieldRule] {
    match kind {
        RequestKind::Map => MAP_RULES,
        RequestKind::CreateOrder => CREATE_ORDER_RULES,
        RequestKind::QueryOrder => QUERY_ORDER_RULES,
        RequestKind::PrintOrder => PRINT_ORDER_RULES,
    }
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Missing { field: &'static str },
    Invalid { field: &'static str, reason: String },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Missing { field } => write!(f, "missing required field: {field}"),
            Violation::Invalid { field, reason } => write!(f, "invalid value for {field}: {reason}"),
        }
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        match violation {
            Violation::Missing { field } => ValidationError::MissingField(field.to_string()),
            Violation::Invalid { field, reason } => ValidationError::InvalidValue {
                field: field.to_string(),
                reason,
            },
        }
    }
}

/// Evaluate a rule table against a field map, collecting every violation
///
/// Pure: no I/O, no short-circuiting. Fields not named by any rule are
/// ignored, matching the original gateway schemas.
pub fn violations(rules: &[FieldRule], fields: &FieldMap) -> Vec<Violation> {
    let mut found = Vec::new();
    for rule in rules {
        match fields.get(rule.name) {
            None => {
                if rule.required {
                    found.push(Violation::Missing { field: rule.name });
                }
            }
            Some(value) => {
                if let Err(reason) = check_value(rule.check, value) {
                    found.push(Violation::Invalid { field: rule.name, reason });
                }
            }
        }
    }
    found
}

/// Validate a field map against a rule table, failing on the first violation
pub fn validate_fields(rules: &[FieldRule], fields: &FieldMap) -> Result<(), ValidationError> {
    match violations(rules, fields).into_iter().next() {
        Some(violation) => Err(violation.into()),
        None => Ok(()),
    }
}

fn check_value(check: Check, value: &FieldValue) -> Result<(), String> {
    match check {
        Check::Any => Ok(()),
        Check::NonEmpty => match value {
            FieldValue::Text(s) if s.is_empty() => Err("must not be empty".to_string()),
            _ => Ok(()),
        },
        Check::Url => {
            let text = value.to_string();
            url::Url::parse(&text)
                .map(|_| ())
                .map_err(|err| format!("must be a valid URL: {err}"))
        }
        Check::Email => {
            let text = value.to_string();
            if email_regex().is_match(&text) {
                Ok(())
            } else {
                Err("must be an email address".to_string())
            }
        }
        Check::PositiveInt => match value {
            FieldValue::Int(n) if *n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        },
        Check::Integer => match value {
            FieldValue::Int(_) => Ok(()),
            FieldValue::Text(_) => Err("must be an integer".to_string()),
        },
        Check::OneOf(allowed) => {
            let text = value.to_string();
            if allowed.contains(&text.as_str()) {
                Ok(())
            } else {
                Err(format!("must be one of {allowed:?}"))
            }
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}
