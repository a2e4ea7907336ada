//! Recipe and ingredient browsing, and recipe authoring for chefs.

use tracing::info;

use super::accounts::lookup_user;
use super::{acquire, log_store_error};
use crate::db::{DbPool, Ingredient, NewRecipe, Recipe};
use crate::error::{MarketError, Result};

/// All recipes in insertion order
pub async fn list_recipes(db: &DbPool) -> Result<Vec<Recipe>> {
    let mut conn = acquire(db).await?;
    sqlx::query_as::<_, Recipe>(
        "SELECT id, name, ingredients, instructions, chef_id FROM Recipes ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(log_store_error("list recipes"))
}

pub async fn get_recipe(db: &DbPool, id: i64) -> Result<Recipe> {
    let mut conn = acquire(db).await?;
    sqlx::query_as::<_, Recipe>(
        "SELECT id, name, ingredients, instructions, chef_id FROM Recipes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(log_store_error("get recipe"))?
    .ok_or_else(|| MarketError::not_found("recipe", id.to_string()))
}

/// Recipes authored by one chef, in insertion order
pub async fn list_recipes_by_chef(db: &DbPool, chef_username: &str) -> Result<Vec<Recipe>> {
    let mut conn = acquire(db).await?;
    let chef = lookup_user(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("chef", chef_username))?;

    sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, name, ingredients, instructions, chef_id
        FROM Recipes WHERE chef_id = ? ORDER BY id
        "#,
    )
    .bind(chef.id)
    .fetch_all(&mut *conn)
    .await
    .map_err(log_store_error("list chef recipes"))
}

/// All ingredient sourcing entries in insertion order
pub async fn list_ingredients(db: &DbPool) -> Result<Vec<Ingredient>> {
    let mut conn = acquire(db).await?;
    sqlx::query_as::<_, Ingredient>("SELECT id, name, location FROM Ingredients ORDER BY id")
        .fetch_all(&mut *conn)
        .await
        .map_err(log_store_error("list ingredients"))
}

/// Pick an entry from a previously fetched list by its 1-based position.
///
/// Selection works on the list the user was shown, so rows added after it
/// was fetched cannot shift what a number refers to.
pub fn select<'a, T>(items: &'a [T], input: &str) -> Result<&'a T> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| items.get(i))
        .ok_or_else(|| MarketError::InvalidChoice(input.trim().to_string()))
}

/// Add a recipe authored by `chef_username`. Returns the new recipe id.
pub async fn create_recipe(db: &DbPool, chef_username: &str, recipe: NewRecipe) -> Result<i64> {
    let mut conn = acquire(db).await?;
    let chef = lookup_user(&mut conn, chef_username)
        .await?
        .ok_or_else(|| MarketError::not_found("chef", chef_username))?;

    let done = sqlx::query(
        "INSERT INTO Recipes (name, ingredients, instructions, chef_id) VALUES (?, ?, ?, ?)",
    )
    .bind(&recipe.name)
    .bind(&recipe.ingredients)
    .bind(&recipe.instructions)
    .bind(chef.id)
    .execute(&mut *conn)
    .await
    .map_err(log_store_error("create recipe"))?;

    let id = done.last_insert_rowid();
    info!(recipe_id = id, chef = %chef_username, name = %recipe.name, "Recipe created");
    Ok(id)
}
