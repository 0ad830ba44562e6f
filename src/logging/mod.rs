//! Logging and observability
//!
//! Structured logging via `tracing`, with configurable level and optional
//! rotating JSON log files.
//!
//! # Example
//!
//! ```no_run
//! use student_seeder::logging::init_logging;
//! use student_seeder::config::LoggingConfig;
//!
//! let _guard = init_logging("info", &LoggingConfig::default()).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of a provisioning step
///
/// # Example
///
/// ```no_run
/// use student_seeder::log_provision;
/// use student_seeder::adapters::store::ProvisionOutcome;
///
/// log_provision!("database", "rungta", &ProvisionOutcome::Created);
/// ```
#[macro_export]
macro_rules! log_provision {
    ($resource:expr, $name:expr, $outcome:expr) => {
        tracing::info!(
            resource = $resource,
            name = %$name,
            outcome = %$outcome,
            "Provisioning step finished"
        );
    };
}
