use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// A typed scalar moving between the host engine's tuples and the remote
/// index's JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Value {
    /// Decode a document field into a value of the attribute's declared type.
    /// Anything missing or of an incompatible shape becomes `Null`; the index
    /// returns single-element arrays for multi-valued fields, so those are
    /// unwrapped first.
    pub fn from_json(data_type: &DataType, raw: &serde_json::Value) -> Value {
        let raw = match raw {
            serde_json::Value::Array(items) => match items.first() {
                Some(first) => first,
                None => return Value::Null,
            },
            other => other,
        };

        match data_type {
            DataType::Int => raw
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Value::Int),
            DataType::Long => raw.as_i64().map(Value::Long),
            DataType::Float => raw.as_f64().map(|v| Value::Float(v as f32)),
            DataType::Double => raw.as_f64().map(Value::Double),
            DataType::String => raw.as_str().map(|s| Value::String(s.to_string())),
            DataType::Bool => raw.as_bool().map(Value::Bool),
        }
        .unwrap_or(Value::Null)
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(v) => json!(v),
            Value::Long(v) => json!(v),
            Value::Float(v) => json!(v),
            Value::Double(v) => json!(v),
            Value::String(v) => json!(v),
            Value::Bool(v) => json!(v),
            Value::Null => serde_json::Value::Null,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::String(v) => v.parse::<f64>().ok(),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Null => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v as i64),
            Value::Long(v) => Some(*v),
            Value::Float(v) => Some(*v as i64),
            Value::Double(v) => Some(*v as i64),
            Value::String(v) => v.parse::<i64>().ok(),
            Value::Bool(v) => Some(if *v { 1 } else { 0 }),
            Value::Null => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Int(v) => Some(*v != 0),
            Value::Long(v) => Some(*v != 0),
            Value::Float(v) => Some(*v != 0.0),
            Value::Double(v) => Some(*v != 0.0),
            Value::String(v) => match v.to_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            Value::Bool(v) => Some(*v),
            Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Int(_) => Some(DataType::Int),
            Value::Long(_) => Some(DataType::Long),
            Value::Float(_) => Some(DataType::Float),
            Value::Double(_) => Some(DataType::Double),
            Value::String(_) => Some(DataType::String),
            Value::Bool(_) => Some(DataType::Bool),
            Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}
