//! CLI module for cache regions
//!
//! Provides subcommands for inspecting the resolved configuration:
//! - `show`: print the resolved region registry as JSON
//! - `check`: validate the configuration, optionally pinging the store

pub mod check;
pub mod show;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Cache Regions - Named cache region configuration
#[derive(Parser)]
#[command(name = "cache-regions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved region registry as JSON
    Show(show::ShowArgs),

    /// Validate the cache configuration
    Check(check::CheckArgs),
}

/// Loads configuration and initializes logging, shared by all subcommands
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
