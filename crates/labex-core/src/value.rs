//! Attribute values read from label payloads.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// Value of a label attribute.
///
/// Every value has a textual representation. Integers, and text that parses
/// as one, also have an integer representation. Enum values compare by
/// ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Enum { ordinal: usize, name: String },
}

impl AttrValue {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(s) => Cow::Borrowed(s),
            AttrValue::Int(n) => Cow::Owned(n.to_string()),
            AttrValue::Enum { name, .. } => Cow::Borrowed(name),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            AttrValue::Text(s) => s.trim().parse().ok(),
            AttrValue::Enum { .. } => None,
        }
    }

    pub fn enum_ordinal(&self) -> Option<usize> {
        match self {
            AttrValue::Enum { ordinal, .. } => Some(*ordinal),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Int(n) => serializer.serialize_i64(*n),
            other => serializer.serialize_str(&other.text()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}
