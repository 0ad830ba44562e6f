//! In-process document store
//!
//! Mirrors the parts of Cosmos DB behavior the seeder relies on: idempotent
//! provisioning, id uniqueness within a logical partition, mandatory
//! partition key values, and `SELECT * FROM c` over one or all partitions.
//! Used by the test suite and by `seed --dry-run`.

use crate::adapters::store::{ProvisionOutcome, QueryScope, StoreProvisioner, StudentContainer};
use crate::domain::{CosmosDbError, Result, StudentRecord};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory database holding any number of containers
#[derive(Clone)]
pub struct MemoryAccount {
    database_name: String,
    state: Arc<Mutex<AccountState>>,
}

#[derive(Default)]
struct AccountState {
    database_exists: bool,
    containers: HashMap<String, Arc<MemoryContainer>>,
}

impl MemoryAccount {
    /// Create an account with no database provisioned yet
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            state: Arc::new(Mutex::new(AccountState::default())),
        }
    }

    /// Number of containers provisioned so far
    pub async fn container_count(&self) -> usize {
        self.state.lock().await.containers.len()
    }
}

#[async_trait]
impl StoreProvisioner for MemoryAccount {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn ensure_database_exists(&self) -> ProvisionOutcome {
        let mut state = self.state.lock().await;
        if state.database_exists {
            ProvisionOutcome::AlreadyExisted
        } else {
            state.database_exists = true;
            ProvisionOutcome::Created
        }
    }

    async fn ensure_container_exists(
        &self,
        name: &str,
        partition_key_path: &str,
    ) -> ProvisionOutcome {
        let mut state = self.state.lock().await;
        if !state.database_exists {
            return ProvisionOutcome::Failed(CosmosDbError::ContainerCreationFailed(format!(
                "database {} does not exist",
                self.database_name
            )));
        }

        if state.containers.contains_key(name) {
            return ProvisionOutcome::AlreadyExisted;
        }

        state.containers.insert(
            name.to_string(),
            Arc::new(MemoryContainer::new(name, partition_key_path)),
        );
        ProvisionOutcome::Created
    }

    async fn container(
        &self,
        name: &str,
        _partition_key_path: &str,
    ) -> Result<Arc<dyn StudentContainer>> {
        let state = self.state.lock().await;
        let container: Arc<dyn StudentContainer> = state
            .containers
            .get(name)
            .cloned()
            .ok_or_else(|| CosmosDbError::ContainerNotFound(name.to_string()))?;
        Ok(container)
    }
}

/// In-memory container
pub struct MemoryContainer {
    name: String,
    partition_key_path: String,
    documents: Mutex<Vec<StoredDocument>>,
}

struct StoredDocument {
    partition_key: String,
    record: StudentRecord,
}

impl MemoryContainer {
    /// Create an empty container partitioned on `partition_key_path`
    pub fn new(name: impl Into<String>, partition_key_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition_key_path: partition_key_path.into(),
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    /// Whether the container holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.lock().await.is_empty()
    }

    fn partition_key_of(&self, document: &Value) -> Result<String> {
        let pointer = self.partition_key_path.as_str();
        match document.pointer(pointer) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            _ => Err(CosmosDbError::PartitionKeyMismatch(format!(
                "document has no value at partition key path {pointer}"
            ))
            .into()),
        }
    }
}

#[async_trait]
impl StudentContainer for MemoryContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn partition_key_path(&self) -> &str {
        &self.partition_key_path
    }

    async fn create_item(&self, record: &StudentRecord) -> Result<()> {
        let document = serde_json::to_value(record)?;
        let partition_key = self.partition_key_of(&document)?;

        let mut documents = self.documents.lock().await;
        if documents
            .iter()
            .any(|d| d.partition_key == partition_key && d.record.id == record.id)
        {
            return Err(CosmosDbError::Conflict(format!(
                "Entity with the specified id already exists in the system: {}",
                record.id
            ))
            .into());
        }

        documents.push(StoredDocument {
            partition_key,
            record: record.clone(),
        });
        Ok(())
    }

    async fn query(&self, query: &str, scope: QueryScope) -> Result<Vec<StudentRecord>> {
        if !is_select_all(query) {
            return Err(CosmosDbError::QueryFailed(format!(
                "unsupported query for in-memory container: {query}"
            ))
            .into());
        }

        let documents = self.documents.lock().await;
        let students = documents
            .iter()
            .filter(|d| match &scope {
                QueryScope::CrossPartition => true,
                QueryScope::Partition(branch) => d.partition_key == branch.as_str(),
            })
            .map(|d| d.record.clone())
            .collect();

        Ok(students)
    }
}

fn is_select_all(query: &str) -> bool {
    let normalized: Vec<String> = query
        .split_whitespace()
        .map(|token| token.to_ascii_uppercase())
        .collect();
    normalized == ["SELECT", "*", "FROM", "C"]
}
