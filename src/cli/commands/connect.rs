//! Connect command implementation
//!
//! Provisions the database and container without writing any documents.

use super::{connect_and_report, load_or_report, EXIT_CONFIG_ERROR, EXIT_CONNECTION_ERROR};
use clap::Args;

/// Arguments for the connect command
#[derive(Args, Debug)]
pub struct ConnectArgs {}

impl ConnectArgs {
    /// Execute the connect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting connect command");

        let Some(config) = load_or_report(config_path) else {
            return Ok(EXIT_CONFIG_ERROR);
        };

        let Some(connection) = connect_and_report(&config, false).await else {
            return Ok(EXIT_CONNECTION_ERROR);
        };

        println!(
            "   Database: {} ({})",
            config.cosmosdb.database_name, connection.database_outcome
        );
        println!(
            "   Container: {} ({}), partition key {}",
            connection.container.name(),
            connection.container_outcome,
            connection.container.partition_key_path()
        );

        Ok(0)
    }
}
