use crate::document::SolrDocument;
use serde::Deserialize;

/// One fetched page plus the server-side total for the query.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub docs: Vec<SolrDocument>,
    pub num_found: u64,
}

/// Wire shape of the select handler's JSON envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SelectEnvelope {
    pub response: SelectBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectBody {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<SolrDocument>,
}

impl From<SelectEnvelope> for QueryResult {
    fn from(envelope: SelectEnvelope) -> Self {
        QueryResult {
            docs: envelope.response.docs,
            num_found: envelope.response.num_found,
        }
    }
}

/// Wire shape of an error response from any handler.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub msg: String,
}

/// Wire shape of the collection admin LIST response.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsEnvelope {
    #[serde(default)]
    pub collections: Vec<String>,
}

/// Wire shape of the schema fields listing.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaFieldsEnvelope {
    #[serde(default)]
    pub fields: Vec<SchemaFieldEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SchemaFieldEntry {
    pub name: String,
}
