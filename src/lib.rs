pub mod cli;
pub mod config;
pub mod console;
pub mod crypto;
pub mod db;
pub mod error;
pub mod export;
pub mod services;

pub use db::DbPool;
pub use error::{MarketError, Result};
pub use services::{accounts, catalog, hiring};

use config::Config;

pub struct AppState {
    pub config: Config,
    pub db: DbPool,
}

impl AppState {
    pub fn new(config: Config, db: DbPool) -> Self {
        Self { config, db }
    }
}
