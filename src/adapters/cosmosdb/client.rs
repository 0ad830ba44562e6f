//! Cosmos DB client implementation
//!
//! This module provides the client for connecting to an Azure Cosmos DB
//! account and provisioning the database and student container.

use crate::adapters::store::ProvisionOutcome;
use crate::config::CosmosDbConfig;
use crate::domain::{CosmosDbError, Result, SeederError};
use azure_core::credentials::Secret;
use azure_core::http::StatusCode;
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::{ContainerProperties, IndexingPolicy, PartitionKeyDefinition};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use std::borrow::Cow;

/// Cosmos DB client for the seeder
///
/// Creating the client does not touch the network; the first request happens
/// in [`CosmosDbClient::ensure_database_exists`].
pub struct CosmosDbClient {
    /// Cosmos DB client
    client: CosmosClient,

    /// Database client
    database: DatabaseClient,

    /// Configuration
    config: CosmosDbConfig,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the client cannot be built from the
    /// endpoint and key.
    pub fn new(config: CosmosDbConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        let key_str: String = config.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            SeederError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Failed to create Cosmos client: {e}"
            )))
        })?;

        let database = client.database_client(&config.database_name);

        tracing::debug!(
            endpoint = %config.endpoint,
            database = %config.database_name,
            "Cosmos DB client created"
        );

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// Ensure the database exists, creating it if necessary
    ///
    /// A read that fails for any reason other than "not found" means the
    /// account is unreachable or the key was rejected.
    pub async fn ensure_database_exists(&self) -> ProvisionOutcome {
        let database_name = &self.config.database_name;

        match self.database.read(None).await {
            Ok(_) => {
                tracing::info!(database = %database_name, "Database already exists");
                ProvisionOutcome::AlreadyExisted
            }
            Err(e) if is_not_found(&e) => {
                tracing::info!(database = %database_name, "Creating database");

                match self.client.create_database(database_name, None).await {
                    Ok(_) => {
                        tracing::info!(database = %database_name, "Database created successfully");
                        ProvisionOutcome::Created
                    }
                    Err(e) if is_conflict(&e) => ProvisionOutcome::AlreadyExisted,
                    Err(e) => ProvisionOutcome::Failed(CosmosDbError::DatabaseCreationFailed(
                        format!("Failed to create database {database_name}: {e}"),
                    )),
                }
            }
            Err(e) => ProvisionOutcome::Failed(CosmosDbError::ConnectionFailed(format!(
                "Failed to read database {database_name}: {e}"
            ))),
        }
    }

    /// Ensure a container exists, creating it if necessary
    ///
    /// No throughput is requested; the account is expected to be serverless.
    pub async fn ensure_container_exists(
        &self,
        container_name: &str,
        partition_key_path: &str,
    ) -> ProvisionOutcome {
        let container = self.database.container_client(container_name);

        match container.read(None).await {
            Ok(_) => {
                tracing::info!(container = %container_name, "Container already exists");
                ProvisionOutcome::AlreadyExisted
            }
            Err(e) if is_not_found(&e) => {
                tracing::info!(
                    container = %container_name,
                    partition_key = %partition_key_path,
                    "Creating container"
                );

                let partition_key_def = PartitionKeyDefinition {
                    paths: vec![partition_key_path.to_string()],
                    kind: azure_data_cosmos::models::PartitionKeyKind::Hash,
                    version: None,
                };

                let properties = ContainerProperties {
                    id: Cow::Owned(container_name.to_string()),
                    partition_key: partition_key_def,
                    indexing_policy: Some(IndexingPolicy::default()),
                    ..Default::default()
                };

                match self.database.create_container(properties, None).await {
                    Ok(_) => {
                        tracing::info!(container = %container_name, "Container created successfully");
                        ProvisionOutcome::Created
                    }
                    Err(e) if is_conflict(&e) => ProvisionOutcome::AlreadyExisted,
                    Err(e) => ProvisionOutcome::Failed(CosmosDbError::ContainerCreationFailed(
                        format!("Failed to create container {container_name}: {e}"),
                    )),
                }
            }
            Err(e) => ProvisionOutcome::Failed(CosmosDbError::ConnectionFailed(format!(
                "Failed to read container {container_name}: {e}"
            ))),
        }
    }

    /// Get a container client by name
    pub fn container_client(&self, container_name: &str) -> ContainerClient {
        self.database.container_client(container_name)
    }

    /// Get the database name
    pub fn database_name(&self) -> &str {
        &self.config.database_name
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Whether a Cosmos DB error is a 404
pub(crate) fn is_not_found(e: &azure_core::Error) -> bool {
    e.http_status() == Some(StatusCode::NotFound)
}

/// Whether a Cosmos DB error is a 409
pub(crate) fn is_conflict(e: &azure_core::Error) -> bool {
    e.http_status() == Some(StatusCode::Conflict)
}
