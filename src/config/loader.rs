//! Configuration loader with TOML parsing and environment variable overrides
//!
//! The account settings are resolved in three layers: built-in defaults, an
//! optional TOML file, then the environment (`COSMOS_URI`, `COSMOS_KEY`,
//! `DATABASE_NAME`, `CONTAINER_NAME`). A `.env` file is loaded into the
//! environment by `main` before any of this runs.

use super::schema::SeederConfig;
use super::secret::secret_string;
use crate::domain::errors::SeederError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Cosmos DB endpoint URI
pub const ENV_COSMOS_URI: &str = "COSMOS_URI";

/// Cosmos DB access key
pub const ENV_COSMOS_KEY: &str = "COSMOS_KEY";

/// Database name
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

/// Container name
pub const ENV_CONTAINER_NAME: &str = "CONTAINER_NAME";

/// Loads configuration from an optional TOML file plus the environment
///
/// This function:
/// 1. Reads the TOML file if it exists, otherwise starts from defaults
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Applies the connection environment variables
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read or parsed
/// - A `${VAR}` placeholder references an unset variable
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use student_seeder::config::loader::load_config;
///
/// let config = load_config("seeder.toml").expect("Failed to load config");
/// println!("{}", config.cosmosdb.database_name);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SeederConfig> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Same as [`load_config`] with an explicit variable lookup
///
/// Used by tests so they don't have to mutate the process environment.
pub fn load_config_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<SeederConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();

    let mut config = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            SeederError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let contents = substitute_env_vars(&contents, &lookup)?;

        toml::from_str(&contents)
            .map_err(|e| SeederError::Configuration(format!("Failed to parse TOML: {e}")))?
    } else {
        tracing::debug!(
            path = %path.display(),
            "Configuration file not found, using defaults and environment"
        );
        SeederConfig::default()
    };

    apply_env_overrides(&mut config, &lookup);

    config.validate().map_err(|e| {
        SeederError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars<F>(input: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SeederError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match lookup(var_name) {
                Some(value) => value,
                None => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SeederError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies the connection environment variables on top of the file values
fn apply_env_overrides<F>(config: &mut SeederConfig, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_COSMOS_URI) {
        config.cosmosdb.endpoint = val;
    }
    if let Some(val) = lookup(ENV_COSMOS_KEY) {
        config.cosmosdb.key = secret_string(val);
    }
    if let Some(val) = lookup(ENV_DATABASE_NAME) {
        config.cosmosdb.database_name = val;
    }
    if let Some(val) = lookup(ENV_CONTAINER_NAME) {
        config.cosmosdb.container_name = val;
    }

    if let Some(val) = lookup("SEEDER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = lookup("SEEDER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
