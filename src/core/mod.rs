//! Core business logic.
//!
//! - [`connector`] - Provision the database and container, return a handle
//! - [`seed`] - Insert the sample roster and list the container
//!
//! # Example
//!
//! ```rust,no_run
//! use student_seeder::config::load_config;
//! use student_seeder::core::connector::{acquire_container, cosmos_provisioner};
//! use student_seeder::core::seed::{render_seed_report, seed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("seeder.toml")?;
//! let provisioner = cosmos_provisioner(&config.cosmosdb)?;
//! let connection = acquire_container(&provisioner, &config.cosmosdb).await?;
//!
//! let report = seed(connection.container.as_ref()).await?;
//! render_seed_report(&report, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod connector;
pub mod seed;
