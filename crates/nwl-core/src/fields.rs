//! Ordered field mapping for gateway requests
//!
//! The gateway signs the percent-encoded form of the request content, and it
//! does not sort keys: the encoding must reproduce the order in which the
//! caller supplied the fields. `FieldMap` therefore preserves insertion
//! order, and re-inserting an existing key replaces the value in place so a
//! builder can overwrite a field without disturbing the order.

use crate::error::ValidationError;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A scalar field value: a string or an integer
///
/// Integers are stringified as plain base-10 with no locale formatting.
/// Floats are not representable; different platforms serialize them
/// inconsistently, which would break byte-for-byte signing parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

/// An ordered mapping from field name to scalar value
///
/// Constructed per request and discarded after signing; the signing
/// pipeline consumes it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, preserving insertion order
    ///
    /// If the key already exists its value is replaced in place, keeping the
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convert a JSON object into a field map, preserving member order
    ///
    /// Only string and integer members are accepted. Floats, booleans,
    /// nulls, and nested structures are rejected, since none of them have a
    /// defined canonical form in the gateway protocol.
    pub fn from_json_object(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or_else(|| ValidationError::UnsupportedValue {
            field: "<root>".to_string(),
            reason: "expected a JSON object of field names to values".to_string(),
        })?;

        let mut fields = FieldMap::new();
        for (name, member) in object {
            match member {
                Value::String(s) => fields.insert(name.clone(), s.clone()),
                Value::Number(n) => {
                    let int = n.as_i64().ok_or_else(|| ValidationError::UnsupportedValue {
                        field: name.clone(),
                        reason: "only integers are allowed; encode other numbers as strings"
                            .to_string(),
                    })?;
                    fields.insert(name.clone(), int);
                }
                other => {
                    return Err(ValidationError::UnsupportedValue {
                        field: name.clone(),
                        reason: format!(
                            "expected a string or integer, got {}",
                            json_type_name(other)
                        ),
                    });
                }
            }
        }
        Ok(fields)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
