//! CosmosDB adapter implementing the store traits

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::cosmosdb::container::CosmosStudentContainer;
use crate::adapters::store::{ProvisionOutcome, StoreProvisioner, StudentContainer};
use crate::domain::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// CosmosDB implementation of [`StoreProvisioner`]
pub struct CosmosDbAdapter {
    client: Arc<CosmosDbClient>,
}

impl CosmosDbAdapter {
    /// Create a new CosmosDB adapter
    pub fn new(client: CosmosDbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<CosmosDbClient> {
        &self.client
    }
}

#[async_trait]
impl StoreProvisioner for CosmosDbAdapter {
    fn database_name(&self) -> &str {
        self.client.database_name()
    }

    async fn ensure_database_exists(&self) -> ProvisionOutcome {
        self.client.ensure_database_exists().await
    }

    async fn ensure_container_exists(
        &self,
        name: &str,
        partition_key_path: &str,
    ) -> ProvisionOutcome {
        self.client
            .ensure_container_exists(name, partition_key_path)
            .await
    }

    async fn container(
        &self,
        name: &str,
        partition_key_path: &str,
    ) -> Result<Arc<dyn StudentContainer>> {
        Ok(Arc::new(CosmosStudentContainer::new(
            self.client.container_client(name),
            name,
            partition_key_path,
        )))
    }
}
