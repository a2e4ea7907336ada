mod models;
mod seeders;

pub use models::*;
pub use seeders::seed_demo_data;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

pub type DbPool = SqlitePool;

/// Split a schema script into its statements, dropping `--` comment lines
fn statements(script: &str) -> impl Iterator<Item = String> + '_ {
    script
        .split(';')
        .map(|chunk| {
            chunk
                .lines()
                .filter(|line| !line.trim().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
}

/// Open the store at `db_path`, creating the file and schema when missing,
/// and seed the demonstration rows.
pub async fn init(db_path: &Path) -> Result<DbPool> {
    info!("Initializing database at {}", db_path.display());

    // Foreign keys stay unenforced: hire requests may name a chef id that
    // has no profile, and older data files contain such rows.
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(false);

    // A single local user issues one operation at a time
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    ensure_schema(&pool).await?;
    seeders::seed_demo_data(&pool).await?;

    info!("Database initialized successfully");
    Ok(pool)
}

/// Create the five marketplace tables if they do not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await.context("Failed to start schema transaction")?;
    let mut applied = 0;
    for statement in statements(include_str!("../../migrations/001_initial.sql")) {
        sqlx::query(&statement)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to apply schema statement: {}", statement))?;
        applied += 1;
    }
    tx.commit().await.context("Failed to commit schema")?;
    debug!(statements = applied, "Schema ensured");
    Ok(())
}

/// Release the store; a store that was never opened is a no-op
pub async fn close(pool: Option<DbPool>) {
    if let Some(pool) = pool {
        pool.close().await;
        info!("Database closed");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// A freshly initialized store in its own temporary directory.
    /// Keep the `TempDir` alive for as long as the pool is used.
    pub async fn seeded_db() -> (TempDir, DbPool) {
        let dir = tempfile::tempdir().unwrap();
        let pool = init(&dir.path().join("forks_and_folks")).await.unwrap();
        (dir, pool)
    }

    pub async fn count(pool: &DbPool, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap();
        n
    }
}
