use crate::{
    client::{CommitPolicy, SolrClient},
    document::SolrDocument,
    error::SolrError,
    request::QueryRequest,
    response::QueryResult,
};
use async_trait::async_trait;
use model::schema::field::SchemaField;

/// The one call the record cursor needs: a paged select. Split out so cursor
/// tests can substitute a scripted backend.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn query(
        &self,
        collection: &str,
        request: &QueryRequest,
    ) -> Result<QueryResult, SolrError>;
}

/// Full surface the table layer needs from the collection store: the paged
/// select plus updates and collection provisioning.
#[async_trait]
pub trait StoreBackend: QueryExecutor {
    async fn add_documents(
        &self,
        collection: &str,
        documents: &[SolrDocument],
        commit: CommitPolicy,
    ) -> Result<(), SolrError>;

    async fn delete_by_query(
        &self,
        collection: &str,
        query: &str,
        commit: CommitPolicy,
    ) -> Result<(), SolrError>;

    async fn collection_exists(&self, name: &str) -> Result<bool, SolrError>;

    async fn create_collection(
        &self,
        name: &str,
        base_config: &str,
        shards: u32,
        replicas: u32,
    ) -> Result<(), SolrError>;

    async fn delete_collection(&self, name: &str) -> Result<(), SolrError>;

    async fn add_schema_fields(
        &self,
        collection: &str,
        fields: &[SchemaField],
    ) -> Result<(), SolrError>;
}

#[async_trait]
impl QueryExecutor for SolrClient {
    async fn query(
        &self,
        collection: &str,
        request: &QueryRequest,
    ) -> Result<QueryResult, SolrError> {
        self.select(collection, request).await
    }
}

#[async_trait]
impl StoreBackend for SolrClient {
    async fn add_documents(
        &self,
        collection: &str,
        documents: &[SolrDocument],
        commit: CommitPolicy,
    ) -> Result<(), SolrError> {
        self.add(collection, documents, commit).await
    }

    async fn delete_by_query(
        &self,
        collection: &str,
        query: &str,
        commit: CommitPolicy,
    ) -> Result<(), SolrError> {
        self.delete_matching(collection, query, commit).await
    }

    async fn collection_exists(&self, name: &str) -> Result<bool, SolrError> {
        SolrClient::collection_exists(self, name).await
    }

    async fn create_collection(
        &self,
        name: &str,
        base_config: &str,
        shards: u32,
        replicas: u32,
    ) -> Result<(), SolrError> {
        SolrClient::create_collection(self, name, base_config, shards, replicas).await
    }

    async fn delete_collection(&self, name: &str) -> Result<(), SolrError> {
        SolrClient::delete_collection(self, name).await
    }

    async fn add_schema_fields(
        &self,
        collection: &str,
        fields: &[SchemaField],
    ) -> Result<(), SolrError> {
        SolrClient::add_schema_fields(self, collection, fields).await
    }
}
