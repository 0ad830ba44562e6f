//! Insert the roster one document at a time, then read everything back
//!
//! Inserts are strictly sequential. A rejected document is recorded in the
//! report and the run moves on to the next one; nothing is retried or rolled
//! back.

use super::report::{InsertOutcome, InsertStatus, SeedReport};
use super::roster::sample_students;
use crate::adapters::store::{QueryScope, StudentContainer};
use crate::domain::{Result, StudentRecord};
use chrono::Utc;
use std::time::Instant;

/// Query used for the final listing
pub const SELECT_ALL: &str = "SELECT * FROM c";

/// Seed the container with the sample roster
///
/// Every call inserts five new documents; earlier runs are not detected.
///
/// # Errors
///
/// Only fails if the roster itself cannot be built. Store errors are
/// captured in the returned report.
pub async fn seed(container: &dyn StudentContainer) -> Result<SeedReport> {
    let students = sample_students()?;
    Ok(seed_students(container, students).await)
}

/// Insert the given students in order and list the container afterwards
pub async fn seed_students(
    container: &dyn StudentContainer,
    students: Vec<StudentRecord>,
) -> SeedReport {
    let started_at = Utc::now();
    let start = Instant::now();

    tracing::info!(
        container = %container.name(),
        count = students.len(),
        "Inserting sample students"
    );

    let mut outcomes = Vec::with_capacity(students.len());
    for student in &students {
        let status = match container.create_item(student).await {
            Ok(()) => {
                tracing::info!(
                    name = %student.name,
                    branch = %student.branch,
                    id = %student.id,
                    "Created student"
                );
                InsertStatus::Inserted
            }
            Err(e) => {
                tracing::error!(
                    name = %student.name,
                    branch = %student.branch,
                    id = %student.id,
                    error = %e,
                    "Failed to create student"
                );
                InsertStatus::Failed(e.to_string())
            }
        };
        outcomes.push(InsertOutcome::new(student, status));
    }

    let listing = list_students(container, QueryScope::CrossPartition)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list students");
            e.to_string()
        });

    let report = SeedReport {
        started_at,
        duration: start.elapsed(),
        outcomes,
        listing,
    };

    tracing::info!(
        attempted = report.attempted(),
        inserted = report.inserted(),
        failed = report.failed(),
        started_at = %report.started_at.to_rfc3339(),
        duration_ms = report.duration.as_millis(),
        "Seeding completed"
    );

    report
}

/// Read every student in `scope`
///
/// # Errors
///
/// Returns the store's query error.
pub async fn list_students(
    container: &dyn StudentContainer,
    scope: QueryScope,
) -> Result<Vec<StudentRecord>> {
    let students = container.query(SELECT_ALL, scope).await?;
    tracing::debug!(
        container = %container.name(),
        count = students.len(),
        "Listed students"
    );
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryContainer;
    use crate::core::seed::render_seed_report;
    use crate::domain::CosmosDbError;
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_seed_fresh_container() {
        let container = MemoryContainer::new("student", "/branch");

        let report = seed(&container).await.unwrap();

        assert_eq!(report.attempted(), 5);
        assert_eq!(report.inserted(), 5);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.listing.as_ref().unwrap().len(), 5);
        assert_eq!(container.len().await, 5);
    }

    #[tokio::test]
    async fn test_seed_twice_doubles() {
        let container = MemoryContainer::new("student", "/branch");

        seed(&container).await.unwrap();
        let second = seed(&container).await.unwrap();

        assert_eq!(second.inserted(), 5);
        assert_eq!(second.listing.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_outcomes_follow_roster_order() {
        let container = MemoryContainer::new("student", "/branch");
        let report = seed(&container).await.unwrap();

        let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Raj Kumar",
                "Priya Singh",
                "Amit Patel",
                "Neha Gupta",
                "Vikram Sharma"
            ]
        );
    }

    #[tokio::test]
    async fn test_partition_path_mismatch_rejects_every_insert() {
        // Documents carry no /dept value, so every insert is rejected while
        // the listing still succeeds
        let container = MemoryContainer::new("student", "/dept");
        let report = seed(&container).await.unwrap();

        assert_eq!(report.failed(), 5);
        assert!(report.listing.unwrap().is_empty());
    }

    /// Accepts inserts but fails every query
    struct UnqueryableContainer(MemoryContainer);

    #[async_trait]
    impl StudentContainer for UnqueryableContainer {
        fn name(&self) -> &str {
            self.0.name()
        }

        fn partition_key_path(&self) -> &str {
            self.0.partition_key_path()
        }

        async fn create_item(&self, record: &StudentRecord) -> Result<()> {
            self.0.create_item(record).await
        }

        async fn query(&self, _query: &str, _scope: QueryScope) -> Result<Vec<StudentRecord>> {
            Err(CosmosDbError::QueryFailed("request timed out".to_string()).into())
        }
    }

    #[tokio::test]
    async fn test_listing_failure_is_reported() {
        let container = UnqueryableContainer(MemoryContainer::new("student", "/branch"));
        let report = seed(&container).await.unwrap();

        assert_eq!(report.inserted(), 5);
        assert_eq!(container.0.len().await, 5);
        let message = report.listing.as_ref().unwrap_err();
        assert!(message.contains("request timed out"));

        let mut out = Vec::new();
        render_seed_report(&report, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("✔ Successfully inserted 5 students!"));
        assert!(output.contains("❌ Error listing students: "));
        assert!(!output.contains("All Students in Database:"));
    }
}
