use model::schema::field::SchemaError;
use solr_client::error::SolrError;
use thiserror::Error;

/// Errors raised while the cursor streams batches from the collection store.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A refill round trip failed. The cursor's continuation state is
    /// undefined afterwards; callers must not keep iterating.
    #[error("Batch fetch failed: {0}")]
    Fetch(#[from] SolrError),

    /// The cursor was closed and no longer holds a client handle.
    #[error("Cursor is closed")]
    Closed,
}

/// Errors from parsing the store annotation's properties.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required store property: {0}")]
    MissingProperty(String),

    #[error("Invalid value '{value}' for store property '{property}': {reason}")]
    InvalidProperty {
        property: String,
        value: String,
        reason: String,
    },

    #[error("Invalid schema definition: {0}")]
    Schema(#[from] SchemaError),
}

/// Errors from rendering a compiled condition into a query string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionError {
    #[error("No value bound for condition placeholder '{0}'")]
    UnboundPlaceholder(String),

    #[error("Unterminated placeholder in condition '{0}'")]
    UnterminatedPlaceholder(String),
}

/// Errors surfaced by the table operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Solr client error: {0}")]
    Client(#[from] SolrError),

    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),
}
