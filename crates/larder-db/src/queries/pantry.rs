//! Database query functions for the `pantry_items` table.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FoodRef, PantryEntry, PantryItem};

/// Add a quantity of a food to a user's pantry.
///
/// Upserts on `(user_id, food_id)`: a second add for the same food adds to
/// the stored quantity and overwrites the unit.
pub async fn add_pantry_item(
    pool: &PgPool,
    user_id: Uuid,
    food_id: i64,
    quantity: f64,
    unit: Option<&str>,
) -> Result<PantryItem> {
    let item = sqlx::query_as::<_, PantryItem>(
        "INSERT INTO pantry_items (user_id, food_id, quantity, unit) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (user_id, food_id) \
         DO UPDATE SET quantity = pantry_items.quantity + EXCLUDED.quantity, \
                       unit = EXCLUDED.unit \
         RETURNING *",
    )
    .bind(user_id)
    .bind(food_id)
    .bind(quantity)
    .bind(unit)
    .fetch_one(pool)
    .await
    .context("failed to add pantry item")?;

    Ok(item)
}

/// Load a user's pantry snapshot, food details included, ordered by food
/// name.
///
/// The returned entries are owned values; the engine mutates its working
/// copy without touching the store.
pub async fn pantry_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<PantryEntry>> {
    let rows: Vec<(i64, String, f64, Option<String>)> = sqlx::query_as(
        "SELECT f.id, f.name, p.quantity, p.unit \
         FROM pantry_items p \
         JOIN foods f ON f.id = p.food_id \
         WHERE p.user_id = $1 \
         ORDER BY f.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .context("failed to load pantry snapshot")?;

    Ok(rows
        .into_iter()
        .map(|(id, name, quantity, unit)| PantryEntry {
            food: FoodRef { id, name },
            quantity,
            unit,
        })
        .collect())
}

/// Remove a food from a user's pantry entirely.
///
/// Returns `true` when a row was deleted.
pub async fn remove_pantry_item(pool: &PgPool, user_id: Uuid, food_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM pantry_items WHERE user_id = $1 AND food_id = $2")
        .bind(user_id)
        .bind(food_id)
        .execute(pool)
        .await
        .context("failed to remove pantry item")?;

    Ok(result.rows_affected() > 0)
}
