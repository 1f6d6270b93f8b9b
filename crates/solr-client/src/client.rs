use crate::{
    document::SolrDocument,
    error::SolrError,
    request::QueryRequest,
    response::{ErrorEnvelope, QueryResult, SelectEnvelope},
};
use serde_json::json;
use tracing::debug;

/// How an update round trip becomes visible to queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Block until the update is committed.
    Hard,
    /// Let the server fold the update into a commit within the given window.
    Within(u64),
}

impl CommitPolicy {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            CommitPolicy::Hard => vec![("commit", "true".to_string())],
            CommitPolicy::Within(ms) => vec![("commitWithin", ms.to_string())],
        }
    }
}

/// Thin handle on one Solr node (or cloud gateway). Owns a shared HTTP client
/// and maps the server's error responses into the `SolrError` taxonomy;
/// retries and timeouts stay with reqwest and the caller.
#[derive(Debug, Clone)]
pub struct SolrClient {
    http: reqwest::Client,
    base_url: String,
}

impl SolrClient {
    pub fn new(base_url: &str) -> Self {
        SolrClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn handler_url(&self, collection: &str, handler: &str) -> String {
        format!("{}/solr/{collection}/{handler}", self.base_url)
    }

    pub(crate) fn admin_url(&self) -> String {
        format!("{}/solr/admin/collections", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Map a non-success response to the error taxonomy, extracting the
    /// server's message when the body carries one.
    pub(crate) async fn check(
        &self,
        response: reqwest::Response,
        collection: &str,
    ) -> Result<reqwest::Response, SolrError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.error.msg,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(match status.as_u16() {
            400 => SolrError::MalformedQuery(message),
            404 => SolrError::CollectionNotFound(collection.to_string()),
            code => SolrError::Api {
                status: code,
                message,
            },
        })
    }

    /// Run one select round trip against a collection.
    pub async fn select(
        &self,
        collection: &str,
        request: &QueryRequest,
    ) -> Result<QueryResult, SolrError> {
        debug!(
            "Select on '{collection}': q={} start={} rows={}",
            request.q, request.window.start, request.window.rows
        );
        let response = self
            .http
            .get(self.handler_url(collection, "select"))
            .query(&request.params())
            .send()
            .await?;
        let response = self.check(response, collection).await?;
        let body = response.bytes().await?;
        let envelope: SelectEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.into())
    }

    /// Add (or replace, by unique key) a batch of documents.
    pub async fn add(
        &self,
        collection: &str,
        documents: &[SolrDocument],
        commit: CommitPolicy,
    ) -> Result<(), SolrError> {
        debug!("Adding {} documents to '{collection}'", documents.len());
        let response = self
            .http
            .post(self.handler_url(collection, "update"))
            .query(&commit.params())
            .json(documents)
            .send()
            .await?;
        self.check(response, collection).await?;
        Ok(())
    }

    /// Delete every document matching a query expression.
    pub async fn delete_matching(
        &self,
        collection: &str,
        query: &str,
        commit: CommitPolicy,
    ) -> Result<(), SolrError> {
        debug!("Deleting documents matching '{query}' from '{collection}'");
        let response = self
            .http
            .post(self.handler_url(collection, "update"))
            .query(&commit.params())
            .json(&json!({ "delete": { "query": query } }))
            .send()
            .await?;
        self.check(response, collection).await?;
        Ok(())
    }

    /// Issue an explicit hard commit.
    pub async fn commit(&self, collection: &str) -> Result<(), SolrError> {
        let response = self
            .http
            .post(self.handler_url(collection, "update"))
            .query(&CommitPolicy::Hard.params())
            .json(&json!({}))
            .send()
            .await?;
        self.check(response, collection).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_policy_parameters() {
        assert_eq!(
            CommitPolicy::Hard.params(),
            vec![("commit", "true".to_string())]
        );
        assert_eq!(
            CommitPolicy::Within(5000).params(),
            vec![("commitWithin", "5000".to_string())]
        );
    }

    #[test]
    fn normalizes_base_url() {
        let client = SolrClient::new("http://localhost:8983/");
        assert_eq!(
            client.handler_url("events", "select"),
            "http://localhost:8983/solr/events/select"
        );
        assert_eq!(
            client.admin_url(),
            "http://localhost:8983/solr/admin/collections"
        );
    }
}
