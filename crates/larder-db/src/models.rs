use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Row structs
// ---------------------------------------------------------------------------

/// A registered user. Pantry items and recipes belong to exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A food known to the catalog (e.g. "Egg", "Olive Oil").
///
/// Foods carry two keys: the row id (strong) and the name (weak). The
/// planning engine matches pantry entries to recipe ingredients by name,
/// so names are kept unique case-insensitively at the schema level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A quantity of a food a user currently has on hand.
///
/// One row per `(user_id, food_id)`; adding the same food again adds to
/// the stored quantity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PantryItem {
    pub id: i64,
    pub user_id: Uuid,
    pub food_id: i64,
    pub quantity: f64,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A recipe owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub user_id: Uuid,
    pub title: String,
    pub source: Option<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Snapshot shapes
// ---------------------------------------------------------------------------
//
// Read queries join through `foods` and return these denormalized shapes.
// The engine works on owned copies of them, so none of these hold borrows
// into the store.

/// A food identity as seen by the planning engine: strong key (id) plus
/// weak key (display name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRef {
    pub id: i64,
    pub name: String,
}

/// One pantry line in a user's snapshot, food details included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryEntry {
    pub food: FoodRef,
    pub quantity: f64,
    pub unit: Option<String>,
}

/// One ingredient requirement of a recipe, food details included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientNeed {
    pub food: FoodRef,
    pub quantity: f64,
    pub unit: Option<String>,
}

/// A recipe with its ingredient list eagerly loaded, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub id: i64,
    pub user_id: Uuid,
    pub title: String,
    pub source: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<IngredientNeed>,
}
