//! `larder seed` command: load foods, pantry items and recipes from a
//! TOML fixture file.
//!
//! Example file:
//!
//! ```toml
//! [[pantry]]
//! food = "Egg"
//! quantity = 12
//!
//! [[pantry]]
//! food = "Flour"
//! quantity = 500
//! unit = "g"
//!
//! [[recipes]]
//! title = "Pancakes"
//! instructions = "Whisk and fry."
//!
//! [[recipes.ingredients]]
//! food = "Flour"
//! quantity = 200
//! unit = "g"
//!
//! [[recipes.ingredients]]
//! food = "Egg"
//! quantity = 2
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::PgPool;

use larder_db::queries::recipes::{NewIngredient, NewRecipe};
use larder_db::queries::{foods, pantry, recipes, users};

// -----------------------------------------------------------------------
// File format
// -----------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub pantry: Vec<PantryLine>,
    #[serde(default)]
    pub recipes: Vec<RecipeBlock>,
}

#[derive(Debug, Deserialize)]
pub struct PantryLine {
    pub food: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeBlock {
    pub title: String,
    pub source: Option<String>,
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

#[derive(Debug, Deserialize)]
pub struct IngredientLine {
    pub food: String,
    pub quantity: f64,
    pub unit: Option<String>,
}

/// Parse a seed file's contents.
pub fn parse_seed_file(contents: &str) -> Result<SeedFile> {
    toml::from_str(contents).context("failed to parse seed TOML")
}

/// Read and parse a seed file from disk.
pub fn load_seed_file(path: &str) -> Result<SeedFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {path:?}"))?;
    parse_seed_file(&contents)
}

// -----------------------------------------------------------------------
// Command
// -----------------------------------------------------------------------

/// Run the seed command: create/find the user and load everything in the
/// file.
pub async fn run_seed(pool: &PgPool, file: &str, username: &str) -> Result<()> {
    let seed = load_seed_file(file)?;

    let user = users::ensure_user(pool, username).await?;

    for line in &seed.pantry {
        let food = foods::upsert_food(pool, &line.food).await?;
        pantry::add_pantry_item(pool, user.id, food.id, line.quantity, line.unit.as_deref())
            .await?;
    }

    for block in &seed.recipes {
        let mut lines = Vec::with_capacity(block.ingredients.len());
        for ingredient in &block.ingredients {
            let food = foods::upsert_food(pool, &ingredient.food).await?;
            lines.push(NewIngredient {
                food_id: food.id,
                quantity: ingredient.quantity,
                unit: ingredient.unit.as_deref(),
            });
        }

        recipes::insert_recipe(
            pool,
            &NewRecipe {
                user_id: user.id,
                title: &block.title,
                source: block.source.as_deref(),
                instructions: &block.instructions,
                ingredients: lines,
            },
        )
        .await?;
    }

    println!(
        "Seeded {} pantry item(s) and {} recipe(s) for {username}.",
        seed.pantry.len(),
        seed.recipes.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[pantry]]
food = "Egg"
quantity = 12

[[pantry]]
food = "Flour"
quantity = 500
unit = "g"

[[recipes]]
title = "Pancakes"
source = "grandma"
instructions = "Whisk and fry."

[[recipes.ingredients]]
food = "Flour"
quantity = 200
unit = "g"

[[recipes.ingredients]]
food = "Egg"
quantity = 2
"#;

    #[test]
    fn parses_pantry_and_recipes() {
        let seed = parse_seed_file(SAMPLE).unwrap();

        assert_eq!(seed.pantry.len(), 2);
        assert_eq!(seed.pantry[0].food, "Egg");
        assert_eq!(seed.pantry[1].unit.as_deref(), Some("g"));

        assert_eq!(seed.recipes.len(), 1);
        let recipe = &seed.recipes[0];
        assert_eq!(recipe.title, "Pancakes");
        assert_eq!(recipe.source.as_deref(), Some("grandma"));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].food, "Egg");
    }

    #[test]
    fn sections_are_optional() {
        let seed = parse_seed_file("").unwrap();
        assert!(seed.pantry.is_empty());
        assert!(seed.recipes.is_empty());
    }

    #[test]
    fn recipe_without_ingredients_parses() {
        let seed = parse_seed_file(
            r#"
[[recipes]]
title = "Tap Water"
instructions = "Open tap."
"#,
        )
        .unwrap();
        assert!(seed.recipes[0].ingredients.is_empty());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(parse_seed_file("this is not toml {{{").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let seed = load_seed_file(path.to_str().unwrap()).unwrap();
        assert_eq!(seed.pantry.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let result = load_seed_file("/nonexistent/seed.toml");
        assert!(result.is_err());
    }
}
