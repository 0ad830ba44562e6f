//! Configuration management for the seeder.
//!
//! Configuration is an explicit [`SeederConfig`] value handed to the
//! connector; nothing reads connection settings from process-wide state after
//! loading.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use student_seeder::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("seeder.toml")?;
//! println!("Database: {}", config.cosmosdb.database_name);
//! println!("Container: {}", config.cosmosdb.container_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! The file is optional. Every value has a default and the four connection
//! variables override whatever the file says.
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${COSMOS_KEY}"
//! database_name = "rungta"
//! container_name = "student"
//! partition_key = "/branch"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `COSMOS_URI` | `https://your-account.documents.azure.com:443/` |
//! | `COSMOS_KEY` | `your-cosmos-db-key` |
//! | `DATABASE_NAME` | `rungta` |
//! | `CONTAINER_NAME` | `student` |

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_with};
pub use schema::{ApplicationConfig, CosmosDbConfig, LoggingConfig, SeederConfig};
pub use secret::{secret_string, SecretString, SecretValue};
