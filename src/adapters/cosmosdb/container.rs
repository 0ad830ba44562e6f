//! Student container backed by Cosmos DB

use crate::adapters::cosmosdb::client::is_conflict;
use crate::adapters::store::{QueryScope, StudentContainer};
use crate::domain::{CosmosDbError, Result, SeederError, StudentRecord};
use async_trait::async_trait;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::PartitionKey;
use futures::stream::StreamExt;
use serde_json::Value;

/// Cosmos DB container handle for student documents
pub struct CosmosStudentContainer {
    client: ContainerClient,
    name: String,
    partition_key_path: String,
}

impl CosmosStudentContainer {
    /// Wrap a container client
    pub fn new(
        client: ContainerClient,
        name: impl Into<String>,
        partition_key_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            name: name.into(),
            partition_key_path: partition_key_path.into(),
        }
    }
}

#[async_trait]
impl StudentContainer for CosmosStudentContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn partition_key_path(&self) -> &str {
        &self.partition_key_path
    }

    async fn create_item(&self, record: &StudentRecord) -> Result<()> {
        let partition_key = PartitionKey::from(record.branch.as_str().to_string());

        self.client
            .create_item(partition_key, record.clone(), None)
            .await
            .map_err(|e| {
                let error = if is_conflict(&e) {
                    CosmosDbError::Conflict(format!("Student {} already exists: {e}", record.id))
                } else {
                    CosmosDbError::InsertFailed(format!("Failed to insert {}: {e}", record.id))
                };
                SeederError::CosmosDb(error)
            })?;

        tracing::debug!(
            container = %self.name,
            id = %record.id,
            branch = %record.branch,
            "Created student document"
        );
        Ok(())
    }

    async fn query(&self, query: &str, scope: QueryScope) -> Result<Vec<StudentRecord>> {
        let partition_key = match &scope {
            QueryScope::CrossPartition => PartitionKey::EMPTY,
            QueryScope::Partition(branch) => PartitionKey::from(branch.as_str().to_string()),
        };

        tracing::debug!(
            container = %self.name,
            query = %query,
            scope = ?scope,
            "Querying student documents"
        );

        let mut query_response = self
            .client
            .query_items::<Value>(query.to_string(), partition_key, None)
            .map_err(|e| {
                SeederError::CosmosDb(CosmosDbError::QueryFailed(format!(
                    "Failed to create query: {e}"
                )))
            })?;

        let mut students = Vec::new();
        while let Some(item) = query_response.next().await {
            let document = item.map_err(|e| {
                SeederError::CosmosDb(CosmosDbError::QueryFailed(format!(
                    "Failed to read query results: {e}"
                )))
            })?;

            // Other writers may share the container; skip what isn't a student
            match serde_json::from_value::<StudentRecord>(document) {
                Ok(student) => students.push(student),
                Err(e) => {
                    tracing::warn!(
                        container = %self.name,
                        error = %e,
                        "Skipping document that is not a student record"
                    );
                }
            }
        }

        Ok(students)
    }
}
