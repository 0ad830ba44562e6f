//! Store abstraction traits
//!
//! These traits are the seam between the seeding logic and the document
//! store. The Cosmos DB adapter implements them against a live account and
//! the memory adapter implements them in-process.

use crate::domain::{Branch, CosmosDbError, Result, StudentRecord};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Outcome of an idempotent "create if not exists" provisioning step
#[derive(Debug)]
pub enum ProvisionOutcome {
    /// The resource did not exist and was created
    Created,

    /// The resource was already there; nothing was changed
    AlreadyExisted,

    /// The resource could not be read or created
    Failed(CosmosDbError),
}

impl ProvisionOutcome {
    /// Whether the resource is usable after this step
    pub fn is_ready(&self) -> bool {
        !matches!(self, ProvisionOutcome::Failed(_))
    }

    /// Converts the outcome into a `Result`, surfacing the failure
    pub fn into_result(self) -> Result<ProvisionOutcome> {
        match self {
            ProvisionOutcome::Failed(e) => Err(e.into()),
            ready => Ok(ready),
        }
    }
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::Created => write!(f, "created"),
            ProvisionOutcome::AlreadyExisted => write!(f, "already existed"),
            ProvisionOutcome::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// Which partitions a query runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScope {
    /// Fan out across every partition of the container
    CrossPartition,

    /// Only the given partition key value
    Partition(Branch),
}

/// Handle to a provisioned student container
#[async_trait]
pub trait StudentContainer: Send + Sync {
    /// Container name
    fn name(&self) -> &str;

    /// Partition key path the container was created with (e.g. `/branch`)
    fn partition_key_path(&self) -> &str;

    /// Create a single document
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if a document with the same id already exists in
    /// the partition, `InsertFailed` for any other rejection.
    async fn create_item(&self, record: &StudentRecord) -> Result<()>;

    /// Run a query and collect every matching student
    ///
    /// # Errors
    ///
    /// Returns `QueryFailed` if the store rejects the query or the feed
    /// breaks off.
    async fn query(&self, query: &str, scope: QueryScope) -> Result<Vec<StudentRecord>>;
}

/// Account-level provisioning
#[async_trait]
pub trait StoreProvisioner: Send + Sync {
    /// Name of the database this provisioner targets
    fn database_name(&self) -> &str;

    /// Ensure the database exists, creating it if necessary
    async fn ensure_database_exists(&self) -> ProvisionOutcome;

    /// Ensure a container exists, creating it with the given partition key
    /// path if necessary
    async fn ensure_container_exists(&self, name: &str, partition_key_path: &str)
        -> ProvisionOutcome;

    /// Get a handle bound to a container of this database
    ///
    /// # Errors
    ///
    /// Returns `ContainerNotFound` if the backend can tell the container
    /// does not exist.
    async fn container(
        &self,
        name: &str,
        partition_key_path: &str,
    ) -> Result<Arc<dyn StudentContainer>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeederError;

    #[test]
    fn test_outcome_readiness() {
        assert!(ProvisionOutcome::Created.is_ready());
        assert!(ProvisionOutcome::AlreadyExisted.is_ready());
        assert!(
            !ProvisionOutcome::Failed(CosmosDbError::ConnectionFailed("down".to_string()))
                .is_ready()
        );
    }

    #[test]
    fn test_outcome_into_result() {
        let ok = ProvisionOutcome::AlreadyExisted.into_result().unwrap();
        assert!(matches!(ok, ProvisionOutcome::AlreadyExisted));

        let err = ProvisionOutcome::Failed(CosmosDbError::ConnectionFailed("401".to_string()))
            .into_result()
            .unwrap_err();
        assert!(matches!(
            err,
            SeederError::CosmosDb(CosmosDbError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ProvisionOutcome::Created.to_string(), "created");
        assert_eq!(
            ProvisionOutcome::AlreadyExisted.to_string(),
            "already existed"
        );
    }
}
