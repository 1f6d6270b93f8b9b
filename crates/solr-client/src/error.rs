use thiserror::Error;

/// All errors coming from the collection store's HTTP layer.
#[derive(Debug, Error)]
pub enum SolrError {
    /// Low-level transport failure: connect, timeout, broken body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the query expression.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// The target collection does not exist.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Any other non-success response from the server.
    #[error("Solr API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A response body that could not be decoded as the expected JSON shape.
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
