use crate::{
    condition::CompiledCondition,
    config::SolrTableConfig,
    error::StoreError,
    iterator::SolrRecordIterator,
};
use async_trait::async_trait;
use model::{
    core::{attribute::Attribute, value::Value},
    pagination::window::PageWindow,
};
use solr_client::{
    client::SolrClient,
    document::{ID_FIELD, SolrDocument},
    executor::{QueryExecutor, StoreBackend},
    request::QueryRequest,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info};
use uuid::Uuid;

/// The host engine's persisted-table contract: point operations driven by
/// compiled conditions, and sequential scans through the record iterator.
#[async_trait]
pub trait RecordTable: Send + Sync {
    async fn insert(&self, records: &[Vec<Value>]) -> Result<(), StoreError>;

    async fn find(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<SolrRecordIterator, StoreError>;

    async fn contains(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<bool, StoreError>;

    async fn update(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
        assignments: &HashMap<String, Value>,
    ) -> Result<usize, StoreError>;

    async fn upsert(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
        assignments: &HashMap<String, Value>,
        record: &[Value],
    ) -> Result<usize, StoreError>;

    async fn delete(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<(), StoreError>;
}

/// An event table persisted in one Solr collection. Holds a shared backend
/// handle; collection provisioning happens once in `init`.
pub struct SolrEventTable {
    config: SolrTableConfig,
    attributes: Vec<Attribute>,
    backend: Arc<dyn StoreBackend>,
    executor: Arc<dyn QueryExecutor>,
}

impl SolrEventTable {
    pub fn new(config: SolrTableConfig, attributes: Vec<Attribute>) -> Self {
        let client = Arc::new(SolrClient::new(&config.url));
        Self::with_backend(config, attributes, client)
    }

    pub fn with_backend<B>(
        config: SolrTableConfig,
        attributes: Vec<Attribute>,
        backend: Arc<B>,
    ) -> Self
    where
        B: StoreBackend + 'static,
    {
        SolrEventTable {
            config,
            attributes,
            executor: backend.clone(),
            backend,
        }
    }

    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    /// Provision the collection on first use: create it when absent and merge
    /// any configured schema fields.
    pub async fn init(&self) -> Result<(), StoreError> {
        if !self.backend.collection_exists(&self.config.collection).await? {
            self.backend
                .create_collection(
                    &self.config.collection,
                    &self.config.base_config,
                    self.config.shards,
                    self.config.replicas,
                )
                .await?;
        }
        if !self.config.schema.is_empty() {
            self.backend
                .add_schema_fields(&self.config.collection, &self.config.schema)
                .await?;
        }
        info!("Event table ready on collection '{}'", self.config.collection);
        Ok(())
    }

    /// Remove the backing collection entirely. Test/teardown path.
    pub async fn drop_collection(&self) -> Result<(), StoreError> {
        self.backend
            .delete_collection(&self.config.collection)
            .await?;
        Ok(())
    }

    fn render(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<String, StoreError> {
        Ok(condition.bind(parameters)?)
    }

    fn document_from(&self, record: &[Value]) -> SolrDocument {
        let mut document = SolrDocument::new();
        for (attribute, value) in self.attributes.iter().zip(record) {
            document.set(&attribute.name, value.to_json());
        }
        document.set(
            ID_FIELD,
            serde_json::Value::String(self.document_id(record)),
        );
        document
    }

    /// Unique key for a record: the primary-key values joined with `_`, or a
    /// random id when the table has no primary keys (every insert is then a
    /// new document).
    fn document_id(&self, record: &[Value]) -> String {
        if self.config.primary_keys.is_empty() {
            return Uuid::new_v4().to_string();
        }
        let parts: Vec<String> = self
            .config
            .primary_keys
            .iter()
            .map(|key| {
                self.attributes
                    .iter()
                    .position(|attribute| attribute.name.eq_ignore_ascii_case(key))
                    .and_then(|index| record.get(index))
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .collect();
        parts.join("_")
    }
}

#[async_trait]
impl RecordTable for SolrEventTable {
    async fn insert(&self, records: &[Vec<Value>]) -> Result<(), StoreError> {
        if records.is_empty() {
            return Ok(());
        }
        let documents: Vec<SolrDocument> = records
            .iter()
            .map(|record| self.document_from(record))
            .collect();
        self.backend
            .add_documents(&self.config.collection, &documents, self.config.commit)
            .await?;
        Ok(())
    }

    async fn find(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<SolrRecordIterator, StoreError> {
        let query = self.render(condition, parameters)?;
        debug!(
            "Scanning '{}' with query '{query}'",
            self.config.collection
        );
        Ok(SolrRecordIterator::new(
            query,
            self.executor.clone(),
            &self.config.collection,
            self.config.batch_size,
            self.attributes.clone(),
        ))
    }

    async fn contains(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<bool, StoreError> {
        let query = self.render(condition, parameters)?;
        // A zero-row probe: the server still reports the total match count.
        let request = QueryRequest::builder(&query)
            .window(PageWindow { start: 0, rows: 0 })
            .build();
        let result = self
            .executor
            .query(&self.config.collection, &request)
            .await?;
        Ok(result.num_found > 0)
    }

    async fn update(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
        assignments: &HashMap<String, Value>,
    ) -> Result<usize, StoreError> {
        let cursor = self.find(condition, parameters).await?;
        let mut rewritten = Vec::new();
        while let Some(mut document) = cursor.next_document().await? {
            for (field, value) in assignments {
                document.set(field, value.to_json());
            }
            rewritten.push(document);
        }
        cursor.close().await;

        if rewritten.is_empty() {
            return Ok(0);
        }
        let count = rewritten.len();
        debug!(
            "Rewriting {count} documents in '{}'",
            self.config.collection
        );
        self.backend
            .add_documents(&self.config.collection, &rewritten, self.config.commit)
            .await?;
        Ok(count)
    }

    async fn upsert(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
        assignments: &HashMap<String, Value>,
        record: &[Value],
    ) -> Result<usize, StoreError> {
        let updated = self.update(condition, parameters, assignments).await?;
        if updated > 0 {
            return Ok(updated);
        }
        self.insert(&[record.to_vec()]).await?;
        Ok(1)
    }

    async fn delete(
        &self,
        condition: &CompiledCondition,
        parameters: &HashMap<String, Value>,
    ) -> Result<(), StoreError> {
        let query = self.render(condition, parameters)?;
        self.backend
            .delete_by_query(&self.config.collection, &query, self.config.commit)
            .await?;
        Ok(())
    }
}
