//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Student Seeder - provision a Cosmos DB container and seed sample students
#[derive(Parser, Debug)]
#[command(name = "student-seeder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional configuration file
    #[arg(short, long, default_value = "seeder.toml", env = "SEEDER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SEEDER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure the database and container exist
    Connect(commands::connect::ConnectArgs),

    /// Insert the sample students and list the container
    Seed(commands::seed::SeedArgs),

    /// List the students in the container
    List(commands::list::ListArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),
}
