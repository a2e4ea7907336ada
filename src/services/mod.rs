//! Marketplace operations over the store.
//!
//! Every operation takes the pool explicitly and acquires exactly one
//! connection for its whole duration; the connection goes back to the
//! pool when the operation returns, on success and failure alike.

pub mod accounts;
pub mod catalog;
pub mod hiring;

use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use crate::db::DbPool;
use crate::error::{MarketError, Result};

pub(crate) async fn acquire(db: &DbPool) -> Result<PoolConnection<Sqlite>> {
    db.acquire()
        .await
        .map_err(log_store_error("acquire a database connection"))
}

/// Log a store failure for the operator and convert it
pub(crate) fn log_store_error(action: &str) -> impl FnOnce(sqlx::Error) -> MarketError + '_ {
    move |e| {
        tracing::error!(error = %e, "Failed to {}", action);
        MarketError::Database(e)
    }
}
