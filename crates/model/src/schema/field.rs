use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Empty field definition in schema string")]
    EmptyDefinition,

    #[error("Field definition '{0}' is missing a type")]
    MissingType(String),

    #[error("Unknown type '{1}' for field '{0}'")]
    UnknownType(String, String),

    #[error("Unknown flag '{1}' for field '{0}'")]
    UnknownFlag(String, String),
}

/// One field definition from a store annotation's schema string, e.g. the
/// `time long stored` part of `"time long stored, date string stored"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub data_type: DataType,
    pub stored: bool,
    pub indexed: bool,
    pub multi_valued: bool,
}

impl FromStr for SchemaField {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or(SchemaError::EmptyDefinition)?;
        let type_name = tokens
            .next()
            .ok_or_else(|| SchemaError::MissingType(name.to_string()))?;
        let data_type = DataType::try_from(type_name)
            .map_err(|_| SchemaError::UnknownType(name.to_string(), type_name.to_string()))?;

        let mut field = SchemaField {
            name: name.to_string(),
            data_type,
            stored: false,
            indexed: true,
            multi_valued: false,
        };
        for flag in tokens {
            match flag.to_lowercase().as_str() {
                "stored" => field.stored = true,
                "indexed" => field.indexed = true,
                "multivalued" => field.multi_valued = true,
                other => {
                    return Err(SchemaError::UnknownFlag(
                        field.name.clone(),
                        other.to_string(),
                    ));
                }
            }
        }
        Ok(field)
    }
}

/// Parse a full schema string: comma-separated field definitions, each a run
/// of whitespace-separated tokens `<name> <type> [flags...]`.
pub fn parse_schema(schema: &str) -> Result<Vec<SchemaField>, SchemaError> {
    schema
        .split(',')
        .map(str::trim)
        .filter(|definition| !definition.is_empty())
        .map(SchemaField::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_annotated_schema_string() {
        let fields = parse_schema("time long stored, date string stored").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "time");
        assert_eq!(fields[0].data_type, DataType::Long);
        assert!(fields[0].stored);
        assert!(fields[0].indexed);
        assert_eq!(fields[1].name, "date");
        assert_eq!(fields[1].data_type, DataType::String);
    }

    #[test]
    fn flags_default_off_except_indexed() {
        let field: SchemaField = "age int".parse().unwrap();
        assert!(!field.stored);
        assert!(field.indexed);
        assert!(!field.multi_valued);
    }

    #[test]
    fn parses_multivalued_flag() {
        let field: SchemaField = "tags string stored multiValued".parse().unwrap();
        assert!(field.multi_valued);
        assert!(field.stored);
    }

    #[test]
    fn rejects_malformed_definitions() {
        assert_eq!(
            "time".parse::<SchemaField>(),
            Err(SchemaError::MissingType("time".to_string()))
        );
        assert_eq!(
            "time decimal".parse::<SchemaField>(),
            Err(SchemaError::UnknownType(
                "time".to_string(),
                "decimal".to_string()
            ))
        );
        assert_eq!(
            "time long persisted".parse::<SchemaField>(),
            Err(SchemaError::UnknownFlag(
                "time".to_string(),
                "persisted".to_string()
            ))
        );
    }

    #[test]
    fn skips_empty_definitions() {
        let fields = parse_schema(" time long , , date string ").unwrap();
        assert_eq!(fields.len(), 2);
        assert!(parse_schema("").unwrap().is_empty());
    }
}
