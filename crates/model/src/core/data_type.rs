use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute types the event table supports. These are the types the host
/// engine's table definitions carry and the schema strings may name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Int,
    Long,
    Float,
    Double,
    String,
    Bool,
}

impl DataType {
    /// Name of the matching field type in the remote index's default schema.
    pub fn solr_type_name(&self) -> &'static str {
        match self {
            DataType::Int => "pint",
            DataType::Long => "plong",
            DataType::Float => "pfloat",
            DataType::Double => "pdouble",
            DataType::String => "string",
            DataType::Bool => "boolean",
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        type_name.trim().to_uppercase()
    }
}

impl TryFrom<&str> for DataType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Self::normalize_type_name(s).as_str() {
            "INT" | "INTEGER" => Ok(DataType::Int),
            "LONG" => Ok(DataType::Long),
            "FLOAT" => Ok(DataType::Float),
            "DOUBLE" => Ok(DataType::Double),
            "STRING" => Ok(DataType::String),
            "BOOL" | "BOOLEAN" => Ok(DataType::Bool),
            _ => Err(format!("Unknown attribute type: {s}")),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::String => "string",
            DataType::Bool => "bool",
        };
        write!(f, "{name}")
    }
}
