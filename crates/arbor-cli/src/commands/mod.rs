//! CLI command definitions and dispatch.

pub mod browse;
pub mod folder;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use arbor_core::error::AppError;

/// Arbor — hierarchical folder management
#[derive(Debug, Parser)]
#[command(name = "arbor", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Arbor server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Folder management
    Folder(folder::FolderArgs),
    /// Browse the folder tree interactively over the API
    Browse(browse::BrowseArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Browse(args) => browse::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<arbor_core::config::AppConfig, AppError> {
    arbor_core::config::AppConfig::from_file(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &arbor_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = arbor_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
