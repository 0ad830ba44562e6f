// Student Seeder - Azure Cosmos DB sample data loader
// Copyright (c) 2025 Student Seeder Contributors
// Licensed under the MIT License

//! # Student Seeder
//!
//! Provisions a database and a `/branch`-partitioned container in Azure
//! Cosmos DB, inserts a fixed roster of five sample students and prints the
//! container's contents.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Connector and seeding logic
//! - [`adapters`] - Store traits with Cosmos DB and in-memory implementations
//! - [`domain`] - Student model, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use student_seeder::config::load_config;
//! use student_seeder::core::connector::{acquire_container, cosmos_provisioner};
//! use student_seeder::core::seed::seed;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("seeder.toml")?;
//!     let provisioner = cosmos_provisioner(&config.cosmosdb)?;
//!     let connection = acquire_container(&provisioner, &config.cosmosdb).await?;
//!
//!     let report = seed(connection.container.as_ref()).await?;
//!     println!("Inserted {} of {} students", report.inserted(), report.attempted());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`]. Provisioning steps
//! report a [`adapters::store::ProvisionOutcome`] so callers can tell whether
//! a resource was created or already existed. Insert failures never abort a
//! seeding run; they are recorded per student in the
//! [`core::seed::SeedReport`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
