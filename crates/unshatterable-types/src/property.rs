use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::TypeError;

/// A scalar property value: the only kinds a condition literal can express.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(#[serde(serialize_with = "crate::fields::serialize_number")] f64),
    String(String),
}

impl PropertyValue {
    /// Equality with integers and floats compared numerically.
    pub fn matches(&self, other: &PropertyValue) -> bool {
        match (self, other) {
            (PropertyValue::Int(a), PropertyValue::Float(b))
            | (PropertyValue::Float(b), PropertyValue::Int(a)) => (*a as f64) == *b,
            _ => self == other,
        }
    }

    /// JSON form of the value. Whole floats are written as integers, the
    /// same way condition literals render them.
    pub fn to_value(&self) -> Value {
        json!(self)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
            PropertyValue::String(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Int(i.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Int(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl TryFrom<&Value> for PropertyValue {
    type Error = TypeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(PropertyValue::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(PropertyValue::Int(i)),
                None => n.as_f64().map(PropertyValue::Float).ok_or_else(|| {
                    TypeError::UnsupportedLiteral {
                        property: String::new(),
                        found: n.to_string(),
                    }
                }),
            },
            Value::String(s) => Ok(PropertyValue::String(s.clone())),
            other => Err(TypeError::UnsupportedLiteral {
                property: String::new(),
                found: json_kind(other).to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for PropertyValue {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        PropertyValue::try_from(&value)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The legal values of a property.
///
/// Either an enumerated list of scalars or an arbitrary JSON object acting as
/// a domain descriptor. Serialized untagged so the document carries the
/// author's value verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyDomain {
    Values(Vec<PropertyValue>),
    Descriptor(Value),
}

impl PropertyDomain {
    /// Whether `value` is admissible. Descriptor domains admit everything.
    pub fn admits(&self, value: &PropertyValue) -> bool {
        match self {
            PropertyDomain::Values(values) => values.iter().any(|v| v.matches(value)),
            PropertyDomain::Descriptor(_) => true,
        }
    }

    pub fn to_value(&self) -> Value {
        json!(self)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyDomain {
    fn from(values: Vec<T>) -> Self {
        PropertyDomain::Values(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>, const N: usize> From<[T; N]> for PropertyDomain {
    fn from(values: [T; N]) -> Self {
        PropertyDomain::Values(values.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for PropertyDomain {
    fn from(descriptor: Value) -> Self {
        PropertyDomain::Descriptor(descriptor)
    }
}

/// A declared axis of variation on a block. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    identifier: String,
    domain: PropertyDomain,
}

impl Property {
    pub fn new(identifier: impl Into<String>, domain: impl Into<PropertyDomain>) -> Self {
        Self {
            identifier: identifier.into(),
            domain: domain.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn domain(&self) -> &PropertyDomain {
        &self.domain
    }
}
