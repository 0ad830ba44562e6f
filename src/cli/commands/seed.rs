//! Seed command implementation
//!
//! Connects, inserts the sample roster and prints the full listing.

use super::{
    connect_and_report, load_or_report, EXIT_CONFIG_ERROR, EXIT_CONNECTION_ERROR,
    EXIT_QUERY_ERROR,
};
use crate::core::seed::{render_seed_report, seed, SeedReport};
use clap::Args;

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Dry run mode - seed an in-memory container instead of Cosmos DB
    #[arg(long)]
    pub dry_run: bool,
}

impl SeedArgs {
    /// Execute the seed command
    ///
    /// Individual insert failures are reported but do not change the exit
    /// code.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(dry_run = self.dry_run, "Starting seed command");

        let Some(config) = load_or_report(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let Some(connection) = connect_and_report(&config, self.dry_run).await else {
            return Ok(EXIT_CONNECTION_ERROR);
        };

        let report = seed(connection.container.as_ref()).await?;

        let mut stdout = std::io::stdout().lock();
        render_seed_report(&report, &mut stdout)?;

        Ok(exit_code(&report))
    }
}

/// Exit code for a finished run
///
/// Only a failed listing is an error; rejected inserts are already reported
/// per student.
fn exit_code(report: &SeedReport) -> i32 {
    if report.listing.is_err() {
        EXIT_QUERY_ERROR
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::{InsertOutcome, InsertStatus};
    use crate::domain::{StudentRecord, StudentRecordBuilder};
    use chrono::Utc;
    use std::time::Duration;

    fn report_with(
        status: InsertStatus,
        listing: Result<Vec<StudentRecord>, String>,
    ) -> SeedReport {
        let student = StudentRecordBuilder::new()
            .name("Raj Kumar")
            .branch("CSE")
            .unwrap()
            .roll_number("2024001")
            .email("raj.kumar@university.edu")
            .semester(4)
            .gpa(3.8)
            .phone("+91-9876543210")
            .address("New Delhi, India")
            .build()
            .unwrap();

        SeedReport {
            started_at: Utc::now(),
            duration: Duration::from_millis(5),
            outcomes: vec![InsertOutcome::new(&student, status)],
            listing,
        }
    }

    #[test]
    fn test_exit_code_listing_failure() {
        let report = report_with(
            InsertStatus::Inserted,
            Err("Failed to query documents: request timed out".to_string()),
        );
        assert_eq!(exit_code(&report), EXIT_QUERY_ERROR);
    }

    #[test]
    fn test_exit_code_ignores_insert_failures() {
        let report = report_with(
            InsertStatus::Failed("Conflict: duplicate".to_string()),
            Ok(vec![]),
        );
        assert_eq!(exit_code(&report), 0);
    }

    #[tokio::test]
    async fn test_dry_run_seed_succeeds() {
        let args = SeedArgs { dry_run: true };
        let code = args.execute("does-not-exist.toml").await.unwrap();
        assert_eq!(code, 0);
    }
}
