use crate::{
    client::SolrClient,
    error::SolrError,
    response::{CollectionsEnvelope, SchemaFieldsEnvelope},
};
use model::schema::field::SchemaField;
use serde_json::json;
use tracing::info;

/// Collection lifecycle and schema calls. Kept apart from the data-path
/// methods in `client.rs`; everything here is provisioning plumbing.
impl SolrClient {
    pub async fn list_collections(&self) -> Result<Vec<String>, SolrError> {
        let response = self
            .http()
            .get(self.admin_url())
            .query(&[("action", "LIST"), ("wt", "json")])
            .send()
            .await?;
        let response = self.check(response, "admin").await?;
        let body = response.bytes().await?;
        let envelope: CollectionsEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.collections)
    }

    pub async fn collection_exists(&self, name: &str) -> Result<bool, SolrError> {
        Ok(self.list_collections().await?.iter().any(|c| c == name))
    }

    pub async fn create_collection(
        &self,
        name: &str,
        base_config: &str,
        shards: u32,
        replicas: u32,
    ) -> Result<(), SolrError> {
        info!("Creating collection '{name}' ({shards} shards, {replicas} replicas)");
        let params = [
            ("action", "CREATE".to_string()),
            ("name", name.to_string()),
            ("collection.configName", base_config.to_string()),
            ("numShards", shards.to_string()),
            ("replicationFactor", replicas.to_string()),
            ("wt", "json".to_string()),
        ];
        let response = self
            .http()
            .get(self.admin_url())
            .query(&params)
            .send()
            .await?;
        self.check(response, name).await?;
        Ok(())
    }

    pub async fn delete_collection(&self, name: &str) -> Result<(), SolrError> {
        info!("Deleting collection '{name}'");
        let response = self
            .http()
            .get(self.admin_url())
            .query(&[("action", "DELETE"), ("name", name), ("wt", "json")])
            .send()
            .await?;
        self.check(response, name).await?;
        Ok(())
    }

    /// Names of the fields already registered in the collection's schema.
    pub async fn schema_field_names(&self, collection: &str) -> Result<Vec<String>, SolrError> {
        let response = self
            .http()
            .get(format!("{}/fields", self.handler_url(collection, "schema")))
            .send()
            .await?;
        let response = self.check(response, collection).await?;
        let body = response.bytes().await?;
        let envelope: SchemaFieldsEnvelope = serde_json::from_slice(&body)?;
        Ok(envelope.fields.into_iter().map(|f| f.name).collect())
    }

    /// Merge field definitions into the collection's schema. Fields that are
    /// already registered are left untouched, so re-provisioning the same
    /// table is a no-op.
    pub async fn add_schema_fields(
        &self,
        collection: &str,
        fields: &[SchemaField],
    ) -> Result<(), SolrError> {
        let existing = self.schema_field_names(collection).await?;
        let commands: Vec<_> = fields
            .iter()
            .filter(|field| !existing.contains(&field.name))
            .map(|field| {
                json!({
                    "name": field.name,
                    "type": field.data_type.solr_type_name(),
                    "stored": field.stored,
                    "indexed": field.indexed,
                    "multiValued": field.multi_valued,
                })
            })
            .collect();
        if commands.is_empty() {
            return Ok(());
        }

        info!(
            "Registering {} schema fields on '{collection}'",
            commands.len()
        );
        let response = self
            .http()
            .post(self.handler_url(collection, "schema"))
            .json(&json!({ "add-field": commands }))
            .send()
            .await?;
        self.check(response, collection).await?;
        Ok(())
    }
}
