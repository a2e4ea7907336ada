//! Chef portfolios and hire requests.

use sqlx::SqliteConnection;
use tracing::{info, warn};

use super::accounts::lookup_user;
use super::{acquire, log_store_error};
use crate::db::{
    Chef, ChefHire, ChefListing, DbPool, HireNotification, HireResponse, HireStatus, SentHire,
};
use crate::error::{MarketError, Result};

async fn lookup_chef_profile(conn: &mut SqliteConnection, username: &str) -> Result<Option<Chef>> {
    sqlx::query_as::<_, Chef>(
        r#"
        SELECT c.id, c.user_id, c.portfolio_details
        FROM Chefs c
        JOIN Users u ON c.user_id = u.id
        WHERE u.username = ?
        ORDER BY c.id
        LIMIT 1
        "#,
    )
    .bind(username)
    .fetch_optional(conn)
    .await
    .map_err(log_store_error("look up chef profile"))
}

/// Every chef profile with its username, ordered by chef id
pub async fn list_chefs(db: &DbPool) -> Result<Vec<ChefListing>> {
    let mut conn = acquire(db).await?;
    sqlx::query_as::<_, ChefListing>(
        r#"
        SELECT c.id AS chef_id, u.username, c.portfolio_details
        FROM Chefs c
        JOIN Users u ON c.user_id = u.id
        ORDER BY c.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(log_store_error("list chefs"))
}

/// Record a hire request from a consumer to the chef profile `chef_id`.
/// Returns the new request id.
pub async fn hire_chef(
    db: &DbPool,
    consumer_username: &str,
    chef_id: i64,
    message: Option<&str>,
) -> Result<i64> {
    let mut conn = acquire(db).await?;
    let consumer = lookup_user(&mut conn, consumer_username)
        .await?
        .ok_or_else(|| MarketError::not_found("consumer", consumer_username))?;

    let chef: Option<(i64,)> = sqlx::query_as("SELECT id FROM Chefs WHERE id = ?")
        .bind(chef_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(log_store_error("look up chef"))?;
    if chef.is_none() {
        // Stored anyway; existing data files already hold such requests
        warn!(chef_id, consumer = %consumer_username, "Hire request names a chef id with no profile");
    }

    let done = sqlx::query("INSERT INTO Chef_Hires (chef_id, consumer_id, message) VALUES (?, ?, ?)")
        .bind(chef_id)
        .bind(consumer.id)
        .bind(message)
        .execute(&mut *conn)
        .await
        .map_err(log_store_error("record hire request"))?;

    let id = done.last_insert_rowid();
    info!(hire_id = id, chef_id, consumer = %consumer_username, "Chef hired");
    Ok(id)
}

pub async fn view_portfolio(db: &DbPool, chef_username: &str) -> Result<String> {
    let mut conn = acquire(db).await?;
    let chef = lookup_chef_profile(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("portfolio", chef_username))?;
    Ok(chef.portfolio_details.unwrap_or_default())
}

/// Overwrite a chef's portfolio details
pub async fn update_portfolio(db: &DbPool, chef_username: &str, details: &str) -> Result<()> {
    let mut conn = acquire(db).await?;
    let chef = lookup_chef_profile(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("portfolio", chef_username))?;

    sqlx::query("UPDATE Chefs SET portfolio_details = ? WHERE id = ?")
        .bind(details)
        .bind(chef.id)
        .execute(&mut *conn)
        .await
        .map_err(log_store_error("update portfolio"))?;

    info!(chef_id = chef.id, chef = %chef_username, "Portfolio updated");
    Ok(())
}

/// Hire requests addressed to a chef, oldest first
pub async fn list_hire_notifications(
    db: &DbPool,
    chef_username: &str,
) -> Result<Vec<HireNotification>> {
    let mut conn = acquire(db).await?;
    let chef = lookup_chef_profile(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("chef", chef_username))?;

    sqlx::query_as::<_, HireNotification>(
        r#"
        SELECT h.id AS hire_id, u.username AS consumer_username, h.hire_date, h.response, h.message
        FROM Chef_Hires h
        JOIN Users u ON h.consumer_id = u.id
        WHERE h.chef_id = ?
        ORDER BY h.id
        "#,
    )
    .bind(chef.id)
    .fetch_all(&mut *conn)
    .await
    .map_err(log_store_error("list hire notifications"))
}

/// Accept or decline a pending hire request addressed to `chef_username`
pub async fn respond_to_hire(
    db: &DbPool,
    chef_username: &str,
    hire_id: i64,
    response: HireResponse,
) -> Result<HireStatus> {
    let mut conn = acquire(db).await?;
    let chef = lookup_chef_profile(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("chef", chef_username))?;

    let hire = sqlx::query_as::<_, ChefHire>(
        r#"
        SELECT id, chef_id, consumer_id, hire_date, response, message
        FROM Chef_Hires WHERE id = ? AND chef_id = ?
        "#,
    )
    .bind(hire_id)
    .bind(chef.id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(log_store_error("look up hire request"))?
    .ok_or_else(|| MarketError::not_found("hire request", hire_id.to_string()))?;

    let current = hire.status();
    let next = current
        .respond(response)
        .ok_or_else(|| MarketError::InvalidTransition {
            hire_id,
            status: current.to_string(),
        })?;

    let done = sqlx::query("UPDATE Chef_Hires SET response = ? WHERE id = ? AND response IS NULL")
        .bind(next.as_response())
        .bind(hire_id)
        .execute(&mut *conn)
        .await
        .map_err(log_store_error("record hire response"))?;
    if done.rows_affected() != 1 {
        return Err(MarketError::InvalidTransition {
            hire_id,
            status: current.to_string(),
        });
    }

    info!(hire_id, chef = %chef_username, status = %next, "Hire request answered");
    Ok(next)
}

/// Hire requests a consumer has sent, oldest first
pub async fn list_sent_hires(db: &DbPool, consumer_username: &str) -> Result<Vec<SentHire>> {
    let mut conn = acquire(db).await?;
    let consumer = lookup_user(&mut conn, consumer_username)
        .await?
        .ok_or_else(|| MarketError::not_found("consumer", consumer_username))?;

    sqlx::query_as::<_, SentHire>(
        r#"
        SELECT h.id AS hire_id, h.chef_id, u.username AS chef_username, h.hire_date, h.response
        FROM Chef_Hires h
        LEFT JOIN Chefs c ON h.chef_id = c.id
        LEFT JOIN Users u ON c.user_id = u.id
        WHERE h.consumer_id = ?
        ORDER BY h.id
        "#,
    )
    .bind(consumer.id)
    .fetch_all(&mut *conn)
    .await
    .map_err(log_store_error("list sent hire requests"))
}
