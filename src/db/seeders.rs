//! Database seeders for demonstration data
//!
//! Runs on every startup. Every insert is `INSERT OR IGNORE`, keyed by the
//! unique username for users and by fixed ids for everything else, so
//! re-running never duplicates rows. Chef profiles and recipes are only
//! attached to seed users that hold the Chef role, and a user who already
//! has a profile keeps it.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::crypto::hash_secret;

/// Password shared by all demonstration accounts
const DEMO_PASSWORD: &str = "pass";

// (username, role)
const USERS: [(&str, &str); 5] = [
    ("Santhiana", "Chef"),
    ("Marcus", "Chef"),
    ("Gabriella", "Consumer"),
    ("Amara", "Chef"),
    ("Tobias", "Consumer"),
];

// (chef id, username, portfolio)
const CHEFS: [(i64, &str, &str); 3] = [
    (
        1,
        "Santhiana",
        "Caribbean home cooking, 10 years catering family events and weddings.",
    ),
    (
        2,
        "Marcus",
        "Former bistro sous-chef. French classics, sauces and private dinners.",
    ),
    (
        3,
        "Amara",
        "West African and plant-based menus. Weekly meal prep and cooking classes.",
    ),
];

// (id, name, location)
const INGREDIENTS: [(i64, &str, &str); 5] = [
    (1, "Scotch Bonnet Peppers", "Northside Farmers Market, stall 12"),
    (2, "Plantains", "Tropical Foods Grocery, 41 Harbor Street"),
    (3, "Fresh Thyme", "Greenleaf Herb Garden, open Saturdays"),
    (4, "Basmati Rice", "Spice Route Wholesale, Unit 3 Mill Lane"),
    (5, "Free-range Eggs", "Hillcrest Farm Shop"),
];

// (id, name, ingredients, instructions, author)
const RECIPES: [(i64, &str, &str, &str, &str); 3] = [
    (
        1,
        "Jerk Chicken",
        "chicken thighs, scotch bonnet peppers, allspice, thyme, garlic, lime",
        "Blend the marinade, coat the chicken and rest overnight. Grill over medium heat until charred and cooked through.",
        "Santhiana",
    ),
    (
        2,
        "Coq au Vin",
        "chicken, red wine, lardons, mushrooms, pearl onions, thyme",
        "Brown the chicken and lardons, add vegetables and wine, then braise for 90 minutes.",
        "Marcus",
    ),
    (
        3,
        "Jollof Rice",
        "basmati rice, tomatoes, red peppers, onions, scotch bonnet peppers, stock",
        "Cook down the pepper base, stir in rice and stock, cover and steam on low heat until tender.",
        "Amara",
    ),
];

/// Seed demonstration users, chef profiles, ingredients and recipes
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<()> {
    info!("Seeding demonstration data...");

    let password = hash_secret(DEMO_PASSWORD);
    for (username, role) in USERS {
        sqlx::query("INSERT OR IGNORE INTO Users (username, password, role) VALUES (?, ?, ?)")
            .bind(username)
            .bind(&password)
            .bind(role)
            .execute(pool)
            .await?;
    }

    for (id, username, portfolio) in CHEFS {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO Chefs (id, user_id, portfolio_details)
            SELECT ?, u.id, ? FROM Users u
            WHERE u.username = ?
              AND u.role = 'Chef'
              AND NOT EXISTS (SELECT 1 FROM Chefs c WHERE c.user_id = u.id)
            "#,
        )
        .bind(id)
        .bind(portfolio)
        .bind(username)
        .execute(pool)
        .await?;
    }

    for (id, name, location) in INGREDIENTS {
        sqlx::query("INSERT OR IGNORE INTO Ingredients (id, name, location) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(location)
            .execute(pool)
            .await?;
    }

    for (id, name, ingredients, instructions, author) in RECIPES {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO Recipes (id, name, ingredients, instructions, chef_id)
            SELECT ?, ?, ?, ?, id FROM Users WHERE username = ? AND role = 'Chef'
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(ingredients)
        .bind(instructions)
        .bind(author)
        .execute(pool)
        .await?;
    }

    info!(
        users = USERS.len(),
        chefs = CHEFS.len(),
        ingredients = INGREDIENTS.len(),
        recipes = RECIPES.len(),
        "Demonstration data seeded"
    );
    Ok(())
}
