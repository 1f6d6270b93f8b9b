use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Name of the unique-key field every collection carries.
pub const ID_FIELD: &str = "id";

/// A single document as the collection store returns it: named fields with
/// JSON values, opaque to the cursor layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SolrDocument(serde_json::Map<String, Json>);

impl SolrDocument {
    pub fn new() -> Self {
        SolrDocument(serde_json::Map::new())
    }

    pub fn get(&self, field: &str) -> Option<&Json> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, value: Json) {
        self.0.insert(field.to_string(), value);
    }

    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD).and_then(Json::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Json)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Json)> for SolrDocument {
    fn from_iter<I: IntoIterator<Item = (String, Json)>>(iter: I) -> Self {
        SolrDocument(iter.into_iter().collect())
    }
}
