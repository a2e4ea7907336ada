//! Signup and login.

use sqlx::SqliteConnection;
use tracing::{info, warn};

use super::{acquire, log_store_error};
use crate::crypto::{hash_secret, verify_secret};
use crate::db::{DbPool, NewAccount, Role, Session, User};
use crate::error::{MarketError, Result};

pub(crate) async fn lookup_user(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT id, username, password, role FROM Users WHERE username = ?")
        .bind(username)
        .fetch_optional(conn)
        .await
        .map_err(log_store_error("look up user"))
}

/// Register a user; chefs also get a profile holding their portfolio.
/// Returns the new user id.
pub async fn signup(db: &DbPool, account: NewAccount) -> Result<i64> {
    let password = hash_secret(&account.password);
    let mut tx = db.begin().await.map_err(log_store_error("begin signup"))?;

    let inserted = sqlx::query("INSERT INTO Users (username, password, role) VALUES (?, ?, ?)")
        .bind(&account.username)
        .bind(&password)
        .bind(account.role.as_str())
        .execute(&mut *tx)
        .await;

    let user_id = match inserted {
        Ok(done) => done.last_insert_rowid(),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(username = %account.username, "Signup rejected, username already exists");
            return Err(MarketError::UsernameTaken(account.username));
        }
        Err(e) => return Err(log_store_error("create user")(e)),
    };

    if account.role == Role::Chef {
        sqlx::query("INSERT INTO Chefs (user_id, portfolio_details) VALUES (?, ?)")
            .bind(user_id)
            .bind(account.portfolio.as_deref().unwrap_or_default())
            .execute(&mut *tx)
            .await
            .map_err(log_store_error("create chef profile"))?;
    }

    tx.commit().await.map_err(log_store_error("commit signup"))?;

    info!(user_id, username = %account.username, role = %account.role, "User signed up");
    Ok(user_id)
}

/// Authenticate a user. An unknown username and a wrong password produce
/// the same `InvalidCredentials` outcome.
pub async fn login(db: &DbPool, username: &str, password: &str) -> Result<Session> {
    let mut conn = acquire(db).await?;

    match lookup_user(&mut conn, username).await? {
        Some(user) if verify_secret(&user.password, password) => {
            let role = user.role_enum()?;
            info!(user_id = user.id, username = %user.username, "User logged in");
            Ok(Session {
                user_id: user.id,
                username: user.username,
                role,
            })
        }
        _ => {
            info!(username, "Login failed");
            Err(MarketError::InvalidCredentials)
        }
    }
}

pub async fn find_user(db: &DbPool, username: &str) -> Result<User> {
    let mut conn = acquire(db).await?;
    lookup_user(&mut conn, username)
        .await?
        .ok_or_else(|| MarketError::not_found("user", username))
}
