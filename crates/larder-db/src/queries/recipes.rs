//! Database query functions for the `recipes` and `recipe_ingredients`
//! tables.

use std::collections::HashMap;

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FoodRef, IngredientNeed, Recipe, RecipeDetails};

/// Parameters for inserting a new recipe with its ingredients.
#[derive(Debug, Clone)]
pub struct NewRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub source: Option<&'a str>,
    pub instructions: &'a str,
    pub ingredients: Vec<NewIngredient<'a>>,
}

/// One ingredient line of a [`NewRecipe`].
#[derive(Debug, Clone)]
pub struct NewIngredient<'a> {
    pub food_id: i64,
    pub quantity: f64,
    pub unit: Option<&'a str>,
}

/// Insert a recipe and its ingredient rows in one transaction.
///
/// Returns the inserted recipe row. The `(recipe_id, food_id)` unique
/// constraint rejects duplicate foods within one recipe.
pub async fn insert_recipe(pool: &PgPool, new: &NewRecipe<'_>) -> Result<Recipe> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let recipe = sqlx::query_as::<_, Recipe>(
        "INSERT INTO recipes (user_id, title, source, instructions) \
         VALUES ($1, $2, $3, $4) \
         RETURNING *",
    )
    .bind(new.user_id)
    .bind(new.title)
    .bind(new.source)
    .bind(new.instructions)
    .fetch_one(&mut *tx)
    .await
    .with_context(|| format!("failed to insert recipe {:?}", new.title))?;

    for ingredient in &new.ingredients {
        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, food_id, quantity, unit) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(recipe.id)
        .bind(ingredient.food_id)
        .bind(ingredient.quantity)
        .bind(ingredient.unit)
        .execute(&mut *tx)
        .await
        .with_context(|| {
            format!(
                "failed to insert ingredient (food {}) for recipe {:?}",
                ingredient.food_id, new.title
            )
        })?;
    }

    tx.commit().await.context("failed to commit recipe insert")?;
    Ok(recipe)
}

/// Load a user's recipe catalog with ingredients eagerly attached.
///
/// Recipes come back in catalog order (creation order); each ingredient
/// list preserves insertion order.
pub async fn recipes_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecipeDetails>> {
    let recipes = sqlx::query_as::<_, Recipe>(
        "SELECT * FROM recipes WHERE user_id = $1 ORDER BY created_at, id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .context("failed to load recipes")?;

    let rows: Vec<(i64, i64, String, f64, Option<String>)> = sqlx::query_as(
        "SELECT ri.recipe_id, f.id, f.name, ri.quantity, ri.unit \
         FROM recipe_ingredients ri \
         JOIN foods f ON f.id = ri.food_id \
         JOIN recipes r ON r.id = ri.recipe_id \
         WHERE r.user_id = $1 \
         ORDER BY ri.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .context("failed to load recipe ingredients")?;

    let mut by_recipe: HashMap<i64, Vec<IngredientNeed>> = HashMap::new();
    for (recipe_id, food_id, food_name, quantity, unit) in rows {
        by_recipe.entry(recipe_id).or_default().push(IngredientNeed {
            food: FoodRef {
                id: food_id,
                name: food_name,
            },
            quantity,
            unit,
        });
    }

    Ok(recipes
        .into_iter()
        .map(|r| RecipeDetails {
            ingredients: by_recipe.remove(&r.id).unwrap_or_default(),
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            source: r.source,
            instructions: r.instructions,
        })
        .collect())
}

/// Fetch a single recipe row by id.
pub async fn get_recipe(pool: &PgPool, id: i64) -> Result<Option<Recipe>> {
    let recipe = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch recipe")?;

    Ok(recipe)
}
