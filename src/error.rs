//! Error types for marketplace operations.
//!
//! Expected outcomes (an unknown username, a taken username, a bad menu
//! choice) get their own variants so callers can tell them apart from a
//! failing store. Binaries wrap these in `anyhow` at startup.

use thiserror::Error;

/// Main error type for store and service operations
#[derive(Error, Debug)]
pub enum MarketError {
    /// A lookup matched no row
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Signup with a username that already exists
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// Role outside of Chef/Consumer
    #[error("Invalid role '{0}' (expected Chef or Consumer)")]
    InvalidRole(String),

    /// Unknown username or wrong password; the two are not distinguished
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Positional selection that is non-numeric or out of range
    #[error("Invalid choice '{0}'")]
    InvalidChoice(String),

    /// Hire response on a request that is no longer pending
    #[error("Hire request {hire_id} is already {status}")]
    InvalidTransition { hire_id: i64, status: String },

    /// The store rejected or failed a statement
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Export file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarketError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Whether this is an expected, user-recoverable outcome rather than a
    /// store failure
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
