//! Command-line arguments for the Forks & Folks console.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "forks-and-folks")]
#[command(author, version, about = "A console marketplace connecting consumers with chefs", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "forks_and_folks.toml")]
    pub config: PathBuf,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Override the database file location
    #[arg(long, env = "FORKS_AND_FOLKS_DB")]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(path) = &self.database {
            config.store.path = path.clone();
        }
        config
    }
}
