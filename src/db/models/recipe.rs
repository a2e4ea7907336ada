use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    /// Free text, typically comma separated
    pub ingredients: String,
    pub instructions: String,
    pub chef_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl NewRecipe {
    pub fn new(name: &str, ingredients: &str, instructions: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            instructions: instructions.to_string(),
        }
    }
}
