//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party SDK types.

use thiserror::Error;

/// Main seeder error type
#[derive(Debug, Error)]
pub enum SeederError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SeederError {
    /// Whether this error means the account could not be reached or
    /// provisioned, so no container handle exists
    pub fn is_connectivity_failure(&self) -> bool {
        matches!(
            self,
            SeederError::CosmosDb(
                CosmosDbError::ConnectionFailed(_)
                    | CosmosDbError::DatabaseCreationFailed(_)
                    | CosmosDbError::ContainerCreationFailed(_)
            )
        )
    }
}

/// Cosmos DB-specific errors
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Failed to connect to or authenticate against Cosmos DB
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Failed to create database
    #[error("Failed to create database: {0}")]
    DatabaseCreationFailed(String),

    /// Failed to create container
    #[error("Failed to create container: {0}")]
    ContainerCreationFailed(String),

    /// Container not found
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// Failed to insert document
    #[error("Failed to insert document: {0}")]
    InsertFailed(String),

    /// Conflict error (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Failed to query documents
    #[error("Failed to query documents: {0}")]
    QueryFailed(String),

    /// Partition key mismatch
    #[error("Partition key mismatch: {0}")]
    PartitionKeyMismatch(String),

    /// Failed to deserialize response
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),
}

impl From<std::io::Error> for SeederError {
    fn from(err: std::io::Error) -> Self {
        SeederError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SeederError {
    fn from(err: serde_json::Error) -> Self {
        SeederError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SeederError {
    fn from(err: toml::de::Error) -> Self {
        SeederError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeder_error_display() {
        let err = SeederError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_cosmosdb_error_conversion() {
        let cosmos_err = CosmosDbError::Conflict("id already exists".to_string());
        let err: SeederError = cosmos_err.into();
        assert!(matches!(err, SeederError::CosmosDb(_)));
        assert_eq!(err.to_string(), "Cosmos DB error: Conflict: id already exists");
    }

    #[test]
    fn test_connectivity_failure_classification() {
        let err: SeederError = CosmosDbError::ConnectionFailed("401".to_string()).into();
        assert!(err.is_connectivity_failure());

        let err: SeederError =
            CosmosDbError::ContainerCreationFailed("forbidden".to_string()).into();
        assert!(err.is_connectivity_failure());

        let err: SeederError = CosmosDbError::InsertFailed("bad".to_string()).into();
        assert!(!err.is_connectivity_failure());

        let err = SeederError::Configuration("missing".to_string());
        assert!(!err.is_connectivity_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: SeederError = io_err.into();
        assert!(matches!(err, SeederError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: SeederError = json_err.into();
        assert!(matches!(err, SeederError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: SeederError = toml_err.into();
        assert!(matches!(err, SeederError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_seeder_error_implements_std_error() {
        let err = SeederError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
