//! Azure Cosmos DB integration
//!
//! This module provides the Cosmos DB implementation of the store traits.

pub mod adapter;
pub mod client;
pub mod container;

pub use adapter::CosmosDbAdapter;
pub use client::CosmosDbClient;
pub use container::CosmosStudentContainer;
