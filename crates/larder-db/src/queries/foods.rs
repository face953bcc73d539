//! Database query functions for the `foods` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::Food;

/// Insert a food by name, or return the existing row when a food with the
/// same name (case-insensitively) is already present.
pub async fn upsert_food(pool: &PgPool, name: &str) -> Result<Food> {
    if let Some(existing) = get_food_by_name(pool, name).await? {
        return Ok(existing);
    }

    let food = sqlx::query_as::<_, Food>(
        "INSERT INTO foods (name) VALUES ($1) RETURNING *",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .with_context(|| format!("failed to insert food {name:?}"))?;

    Ok(food)
}

/// Fetch a food by name, matching case-insensitively.
pub async fn get_food_by_name(pool: &PgPool, name: &str) -> Result<Option<Food>> {
    let food = sqlx::query_as::<_, Food>(
        "SELECT * FROM foods WHERE lower(name) = lower($1)",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("failed to fetch food {name:?}"))?;

    Ok(food)
}

/// List all foods, ordered by name.
pub async fn list_foods(pool: &PgPool) -> Result<Vec<Food>> {
    let foods = sqlx::query_as::<_, Food>("SELECT * FROM foods ORDER BY name")
        .fetch_all(pool)
        .await
        .context("failed to list foods")?;

    Ok(foods)
}
