use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Where an ingredient can be sourced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub location: String,
}
