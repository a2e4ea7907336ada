//! Chef profile models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chef {
    pub id: i64,
    pub user_id: i64,
    pub portfolio_details: Option<String>,
}

/// A chef profile joined with its username, as shown to consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ChefListing {
    pub chef_id: i64,
    pub username: String,
    pub portfolio_details: Option<String>,
}
