//! End-to-end seeding tests against the in-memory store

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use student_seeder::adapters::memory::{MemoryAccount, MemoryContainer};
use student_seeder::adapters::store::{QueryScope, StudentContainer};
use student_seeder::config::CosmosDbConfig;
use student_seeder::core::connector::acquire_container;
use student_seeder::core::seed::{
    list_students, render_seed_report, sample_students, seed, seed_students, InsertStatus,
};
use student_seeder::domain::{Branch, CosmosDbError, Result, StudentRecord};

/// Wraps a container and rejects the insert at a given position
struct FailingAt {
    inner: MemoryContainer,
    fail_at: usize,
    calls: AtomicUsize,
}

impl FailingAt {
    fn new(fail_at: usize) -> Self {
        Self {
            inner: MemoryContainer::new("student", "/branch"),
            fail_at,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StudentContainer for FailingAt {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn partition_key_path(&self) -> &str {
        self.inner.partition_key_path()
    }

    async fn create_item(&self, record: &StudentRecord) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_at {
            return Err(CosmosDbError::InsertFailed("malformed payload".to_string()).into());
        }
        self.inner.create_item(record).await
    }

    async fn query(&self, query: &str, scope: QueryScope) -> Result<Vec<StudentRecord>> {
        self.inner.query(query, scope).await
    }
}

#[tokio::test]
async fn test_fresh_container_end_to_end() {
    let account = MemoryAccount::new("rungta");
    let connection = acquire_container(&account, &CosmosDbConfig::default())
        .await
        .unwrap();

    let report = seed(connection.container.as_ref()).await.unwrap();

    assert_eq!(report.inserted(), 5);
    assert_eq!(report.failed(), 0);
    let listing = report.listing.as_ref().unwrap();
    assert_eq!(listing.len(), 5);

    let mut out = Vec::new();
    render_seed_report(&report, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.matches("✔ Created: ").count(), 5);
    assert!(!output.contains("❌"));
    assert!(output.contains("✔ Successfully inserted 5 students!"));
    assert!(output.contains("5. "));
    assert!(!output.contains("6. "));
}

#[tokio::test]
async fn test_third_insert_failure_does_not_stop_batch() {
    let container = FailingAt::new(3);

    let report = seed(&container).await.unwrap();

    assert_eq!(container.calls.load(Ordering::SeqCst), 5);
    assert_eq!(report.inserted(), 4);
    assert_eq!(report.failed(), 1);

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed[0].name, "Amit Patel");
    assert!(matches!(&failed[0].status, InsertStatus::Failed(m) if m.contains("malformed payload")));

    assert!(report.outcomes[3].is_inserted());
    assert!(report.outcomes[4].is_inserted());

    let names: HashSet<String> = report
        .listing
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert!(!names.contains("Amit Patel"));
    assert!(names.contains("Neha Gupta"));
    assert!(names.contains("Vikram Sharma"));

    let mut out = Vec::new();
    let report = seed(&FailingAt::new(3)).await.unwrap();
    render_seed_report(&report, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.matches("❌ Error creating Amit Patel: ").count(), 1);
    assert!(output.contains("✔ Successfully inserted 4 students!"));
}

#[tokio::test]
async fn test_reseeding_inserts_duplicates_by_name() {
    let container = MemoryContainer::new("student", "/branch");

    seed(&container).await.unwrap();
    let report = seed(&container).await.unwrap();

    let listing = report.listing.unwrap();
    assert_eq!(listing.len(), 10);
    assert_eq!(listing.iter().filter(|s| s.name == "Raj Kumar").count(), 2);

    let ids: HashSet<_> = listing.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_partition_query_returns_single_branch() {
    let container = MemoryContainer::new("student", "/branch");
    seed(&container).await.unwrap();

    let expected = [("CSE", 2), ("ECE", 2), ("ME", 1)];
    for (code, count) in expected {
        let branch = Branch::new(code).unwrap();
        let students = list_students(&container, QueryScope::Partition(branch))
            .await
            .unwrap();

        assert_eq!(students.len(), count, "branch {code}");
        assert!(students.iter().all(|s| s.branch.as_str() == code));
    }
}

#[tokio::test]
async fn test_conflicting_id_is_reported_per_record() {
    let container = MemoryContainer::new("student", "/branch");
    let mut students = sample_students().unwrap();
    // Neha shares Raj's partition, so reusing his id collides
    students[3].id = students[0].id.clone();

    let report = seed_students(&container, students).await;

    assert_eq!(report.inserted(), 4);
    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].name, "Neha Gupta");
    assert!(matches!(&failed[0].status, InsertStatus::Failed(m) if m.contains("Conflict")));
    assert_eq!(container.len().await, 4);
}

#[tokio::test]
async fn test_handle_shared_across_connections() {
    let account = MemoryAccount::new("rungta");
    let config = CosmosDbConfig::default();

    let first = acquire_container(&account, &config).await.unwrap();
    seed(first.container.as_ref()).await.unwrap();

    let second = acquire_container(&account, &config).await.unwrap();
    let container: Arc<dyn StudentContainer> = second.container;
    let students = list_students(container.as_ref(), QueryScope::CrossPartition)
        .await
        .unwrap();
    assert_eq!(students.len(), 5);
}
