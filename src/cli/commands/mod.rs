//! CLI command implementations

pub mod connect;
pub mod list;
pub mod seed;
pub mod validate;

use crate::adapters::memory::MemoryAccount;
use crate::adapters::store::StoreProvisioner;
use crate::config::{load_config, SeederConfig};
use crate::core::connector::{acquire_container, cosmos_provisioner, Connection};

/// Exit code for a configuration that fails to load or validate
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code when the account cannot be reached or provisioned
pub const EXIT_CONNECTION_ERROR: i32 = 3;

/// Exit code when the listing query fails
pub const EXIT_QUERY_ERROR: i32 = 4;

/// Load configuration, printing the error line on failure
fn load_or_report(config_path: &str) -> Option<SeederConfig> {
    match load_config(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
            println!("❌ Failed to load configuration: {e}");
            None
        }
    }
}

fn connected_line(dry_run: bool) -> &'static str {
    if dry_run {
        "✔ Connected to in-memory store (dry run, Cosmos DB not contacted)"
    } else {
        "✔ Connected to Cosmos DB"
    }
}

/// Run the connector and print the connect/ready lines
///
/// With `dry_run` an in-memory account stands in for Cosmos DB.
async fn connect_and_report(config: &SeederConfig, dry_run: bool) -> Option<Connection> {
    let provisioner: Box<dyn StoreProvisioner> = if dry_run {
        tracing::info!("DRY RUN: using in-memory store instead of Cosmos DB");
        Box::new(MemoryAccount::new(config.cosmosdb.database_name.clone()))
    } else {
        match cosmos_provisioner(&config.cosmosdb) {
            Ok(p) => Box::new(p),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Cosmos DB client");
                println!("❌ Error connecting to Cosmos DB: {e}");
                return None;
            }
        }
    };
    println!("{}", connected_line(dry_run));

    match acquire_container(provisioner.as_ref(), &config.cosmosdb).await {
        Ok(connection) => {
            println!("✔ Database & container ready");
            Some(connection)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to provision database or container");
            println!("❌ Error connecting to Cosmos DB: {e}");
            None
        }
    }
}
