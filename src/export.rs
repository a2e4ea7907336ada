//! Saving viewed recipes and ingredient locations to text files.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::db::{Ingredient, Recipe};
use crate::error::Result;

pub const RECIPE_SUFFIX: &str = "_recipe.txt";
pub const LOCATION_SUFFIX: &str = "_location.txt";

/// File stem for a display name: spaces become underscores, nothing else changes
pub fn slugify(name: &str) -> String {
    name.replace(' ', "_")
}

pub fn recipe_path(dir: &Path, recipe: &Recipe) -> PathBuf {
    dir.join(format!("{}{}", slugify(&recipe.name), RECIPE_SUFFIX))
}

pub fn location_path(dir: &Path, ingredient: &Ingredient) -> PathBuf {
    dir.join(format!("{}{}", slugify(&ingredient.name), LOCATION_SUFFIX))
}

pub fn render_recipe(recipe: &Recipe) -> String {
    format!(
        "Recipe: {}\n\nIngredients:\n{}\n\nInstructions:\n{}\n",
        recipe.name, recipe.ingredients, recipe.instructions
    )
}

pub fn render_location(ingredient: &Ingredient) -> String {
    format!(
        "Ingredient: {}\nLocation: {}\n",
        ingredient.name, ingredient.location
    )
}

/// Write a recipe to `<dir>/<slug>_recipe.txt`, replacing any earlier save
pub fn save_recipe(dir: &Path, recipe: &Recipe) -> Result<PathBuf> {
    let path = recipe_path(dir, recipe);
    std::fs::write(&path, render_recipe(recipe))?;
    info!(path = %path.display(), "Recipe saved");
    Ok(path)
}

/// Write an ingredient location to `<dir>/<slug>_location.txt`
pub fn save_location(dir: &Path, ingredient: &Ingredient) -> Result<PathBuf> {
    let path = location_path(dir, ingredient);
    std::fs::write(&path, render_location(ingredient))?;
    info!(path = %path.display(), "Ingredient location saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    fn recipe() -> Recipe {
        Recipe {
            id: 1,
            name: "Jerk Chicken".to_string(),
            ingredients: "chicken, peppers".to_string(),
            instructions: "Marinate. Grill.".to_string(),
            chef_id: 1,
        }
    }

    #[test]
    fn test_slugify_replaces_spaces_only() {
        assert_eq!(slugify("Jerk Chicken"), "Jerk_Chicken");
        assert_eq!(slugify("Free-range Eggs"), "Free-range_Eggs");
        assert_eq!(slugify("a  b"), "a__b");
        assert_eq!(slugify("Plantains"), "Plantains");
    }

    #[test]
    fn test_save_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_recipe(dir.path(), &recipe()).unwrap();

        assert_eq!(path, dir.path().join("Jerk_Chicken_recipe.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Recipe: Jerk Chicken"));
        assert!(content.contains("chicken, peppers"));
        assert!(content.contains("Marinate. Grill."));
    }

    #[test]
    fn test_save_location() {
        let dir = tempfile::tempdir().unwrap();
        let ingredient = Ingredient {
            id: 3,
            name: "Fresh Thyme".to_string(),
            location: "Greenleaf Herb Garden".to_string(),
        };

        let path = save_location(dir.path(), &ingredient).unwrap();

        assert_eq!(path, dir.path().join("Fresh_Thyme_location.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Ingredient: Fresh Thyme\nLocation: Greenleaf Herb Garden\n"
        );
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = save_recipe(&missing, &recipe()).unwrap_err();
        assert!(matches!(err, MarketError::Io(_)));
    }
}
