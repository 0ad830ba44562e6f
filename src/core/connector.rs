//! Connector: provision the database and container, hand back a handle
//!
//! Provisioning is idempotent. Each step reports whether it created the
//! resource or found it already there, so callers (and tests) can tell the
//! two apart.

use crate::adapters::cosmosdb::{CosmosDbAdapter, CosmosDbClient};
use crate::adapters::store::{ProvisionOutcome, StoreProvisioner, StudentContainer};
use crate::config::CosmosDbConfig;
use crate::domain::Result;
use std::sync::Arc;

/// A provisioned container plus how it came to exist
pub struct Connection {
    /// Handle bound to the database + container pair
    pub container: Arc<dyn StudentContainer>,

    /// Outcome of the database step
    pub database_outcome: ProvisionOutcome,

    /// Outcome of the container step
    pub container_outcome: ProvisionOutcome,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("container", &self.container.name())
            .field("database_outcome", &self.database_outcome)
            .field("container_outcome", &self.container_outcome)
            .finish()
    }
}

/// Ensure the database and container named in `config` exist and return a
/// handle to the container
///
/// # Errors
///
/// Returns the failing step's error (`ConnectionFailed`,
/// `DatabaseCreationFailed` or `ContainerCreationFailed`). No handle is
/// produced in that case.
pub async fn acquire_container(
    provisioner: &dyn StoreProvisioner,
    config: &CosmosDbConfig,
) -> Result<Connection> {
    let database_outcome = provisioner.ensure_database_exists().await.into_result()?;
    crate::log_provision!("database", provisioner.database_name(), &database_outcome);

    let container_outcome = provisioner
        .ensure_container_exists(&config.container_name, &config.partition_key)
        .await
        .into_result()?;
    crate::log_provision!("container", &config.container_name, &container_outcome);

    let container = provisioner
        .container(&config.container_name, &config.partition_key)
        .await?;

    Ok(Connection {
        container,
        database_outcome,
        container_outcome,
    })
}

/// Build a Cosmos DB provisioner from configuration
///
/// # Errors
///
/// Returns `ConnectionFailed` if the client cannot be constructed.
pub fn cosmos_provisioner(config: &CosmosDbConfig) -> Result<CosmosDbAdapter> {
    let client = CosmosDbClient::new(config.clone())?;
    Ok(CosmosDbAdapter::new(client))
}
