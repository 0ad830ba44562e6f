//! List command implementation
//!
//! Prints the students currently in the container without inserting any.

use super::{
    connect_and_report, load_or_report, EXIT_CONFIG_ERROR, EXIT_CONNECTION_ERROR,
    EXIT_QUERY_ERROR,
};
use crate::adapters::store::QueryScope;
use crate::core::seed::{list_students, render_listing};
use crate::domain::Branch;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one branch (single-partition query)
    #[arg(long)]
    pub branch: Option<String>,
}

impl ListArgs {
    fn scope(&self) -> Result<QueryScope, String> {
        match &self.branch {
            Some(code) => Branch::new(code.as_str()).map(QueryScope::Partition),
            None => Ok(QueryScope::CrossPartition),
        }
    }

    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(branch = ?self.branch, "Starting list command");

        let scope = match self.scope() {
            Ok(scope) => scope,
            Err(e) => {
                println!("❌ Invalid branch: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let Some(config) = load_or_report(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let Some(connection) = connect_and_report(&config, false).await else {
            return Ok(EXIT_CONNECTION_ERROR);
        };

        match list_students(connection.container.as_ref(), scope).await {
            Ok(students) => {
                let mut stdout = std::io::stdout().lock();
                render_listing(&students, &mut stdout)?;
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to list students");
                println!("❌ Error listing students: {e}");
                Ok(EXIT_QUERY_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_defaults_to_cross_partition() {
        let args = ListArgs { branch: None };
        assert_eq!(args.scope().unwrap(), QueryScope::CrossPartition);
    }

    #[test]
    fn test_scope_with_branch() {
        let args = ListArgs {
            branch: Some("ECE".to_string()),
        };
        assert_eq!(
            args.scope().unwrap(),
            QueryScope::Partition(Branch::new("ECE").unwrap())
        );
    }

    #[test]
    fn test_scope_rejects_blank_branch() {
        let args = ListArgs {
            branch: Some(" ".to_string()),
        };
        assert!(args.scope().is_err());
    }
}
