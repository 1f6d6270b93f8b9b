use crate::error::ConfigError;
use model::schema::field::{SchemaField, parse_schema};
use solr_client::client::CommitPolicy;
use std::{collections::HashMap, fmt::Display, str::FromStr};

pub const PROP_URL: &str = "url";
pub const PROP_COLLECTION: &str = "collection";
pub const PROP_BASE_CONFIG: &str = "base.config";
pub const PROP_SHARDS: &str = "shards";
pub const PROP_REPLICAS: &str = "replicas";
pub const PROP_SCHEMA: &str = "schema";
pub const PROP_COMMIT_ASYNC: &str = "commit.async";
pub const PROP_BATCH_SIZE: &str = "batch.size";

const DEFAULT_BATCH_SIZE: usize = 1000;
const DEFAULT_COMMIT_WITHIN_MS: u64 = 5000;

/// Everything the store annotation configures for one event table, plus the
/// primary-key attribute names the table definition carries.
#[derive(Debug, Clone)]
pub struct SolrTableConfig {
    pub url: String,
    pub collection: String,
    pub base_config: String,
    pub shards: u32,
    pub replicas: u32,
    pub schema: Vec<SchemaField>,
    pub commit: CommitPolicy,
    pub batch_size: usize,
    pub primary_keys: Vec<String>,
}

impl SolrTableConfig {
    pub fn from_properties(
        properties: &HashMap<String, String>,
        primary_keys: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let url = required(properties, PROP_URL)?;
        let collection = required(properties, PROP_COLLECTION)?;
        let base_config = required(properties, PROP_BASE_CONFIG)?;

        let shards: u32 = parse_or(properties, PROP_SHARDS, 1)?;
        let replicas: u32 = parse_or(properties, PROP_REPLICAS, 1)?;
        if shards == 0 {
            return Err(invalid(PROP_SHARDS, "0", "must be at least 1"));
        }
        if replicas == 0 {
            return Err(invalid(PROP_REPLICAS, "0", "must be at least 1"));
        }

        let batch_size: usize = parse_or(properties, PROP_BATCH_SIZE, DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(invalid(PROP_BATCH_SIZE, "0", "must be at least 1"));
        }

        let commit_async: bool = parse_or(properties, PROP_COMMIT_ASYNC, true)?;
        let commit = if commit_async {
            CommitPolicy::Within(DEFAULT_COMMIT_WITHIN_MS)
        } else {
            CommitPolicy::Hard
        };

        let schema = match properties.get(PROP_SCHEMA) {
            Some(schema) => parse_schema(schema)?,
            None => Vec::new(),
        };

        Ok(SolrTableConfig {
            url,
            collection,
            base_config,
            shards,
            replicas,
            schema,
            commit,
            batch_size,
            primary_keys,
        })
    }
}

fn required(properties: &HashMap<String, String>, key: &str) -> Result<String, ConfigError> {
    properties
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingProperty(key.to_string()))
}

fn parse_or<T>(properties: &HashMap<String, String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match properties.get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| invalid(key, raw, &err.to_string())),
        None => Ok(default),
    }
}

fn invalid(property: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidProperty {
        property: property.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
