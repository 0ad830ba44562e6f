//! External system integrations.
//!
//! - [`store`] - Store abstraction traits
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//! - [`memory`] - In-process implementation for tests and dry runs
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the Cosmos DB SDK and
//! enable testing with the in-memory implementation.
//!
//! ```rust,no_run
//! use student_seeder::adapters::cosmosdb::{CosmosDbAdapter, CosmosDbClient};
//! use student_seeder::adapters::store::StoreProvisioner;
//! use student_seeder::config::CosmosDbConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CosmosDbClient::new(CosmosDbConfig::default())?;
//! let adapter = CosmosDbAdapter::new(client);
//! let outcome = adapter.ensure_database_exists().await;
//! println!("database {outcome}");
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod memory;
pub mod store;
