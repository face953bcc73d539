//! Top-level meal plan assembly: local selection first, then the
//! generator chain for whatever is still missing.

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use larder_db::queries::pantry as pantry_db;
use larder_db::queries::recipes as recipe_db;

use crate::error::PlanError;
use crate::generator::GeneratorChain;

use super::entry::MealPlanEntry;
use super::select::{LocalSelection, select_local_meals};

/// Generate a meal plan of up to `requested` entries for a user.
///
/// Loads the user's pantry snapshot and recipe catalog (each call gets
/// fresh, owned copies -- nothing is shared between concurrent requests),
/// runs the greedy local selector unless `force_external_only` is set,
/// and hands any deficit to the generator chain together with the
/// post-depletion pantry. Local entries come first in the result.
///
/// A plan shorter than `requested` is a normal outcome. `requested == 0`
/// short-circuits to an empty plan without touching the database or the
/// chain. Errors are limited to [`PlanError::Cancelled`] and loader
/// failures ([`PlanError::Data`]); generator faults are absorbed inside
/// the chain.
pub async fn generate_meal_plan(
    pool: &PgPool,
    user_id: Uuid,
    requested: usize,
    force_external_only: bool,
    chain: &GeneratorChain,
    cancel: CancellationToken,
) -> Result<Vec<MealPlanEntry>, PlanError> {
    if requested == 0 {
        return Ok(Vec::new());
    }

    let pantry = pantry_db::pantry_for_user(pool, user_id)
        .await
        .map_err(PlanError::Data)?;

    let LocalSelection {
        mut meals,
        remaining_pantry,
    } = if force_external_only {
        // Manual recipes stay out entirely when the caller demands
        // external-only sourcing; the chain sees the untouched snapshot.
        LocalSelection {
            meals: Vec::new(),
            remaining_pantry: pantry,
        }
    } else {
        let recipes = recipe_db::recipes_for_user(pool, user_id)
            .await
            .map_err(PlanError::Data)?;
        select_local_meals(requested, recipes, pantry)
    };

    tracing::debug!(
        user_id = %user_id,
        requested,
        local = meals.len(),
        "local selection finished"
    );

    if meals.len() < requested {
        let deficit = requested - meals.len();
        let external = chain
            .fill_remaining(deficit, &remaining_pantry, &cancel)
            .await?;
        tracing::debug!(
            user_id = %user_id,
            deficit,
            external = external.len(),
            "generator chain finished"
        );
        meals.extend(external);
    }

    Ok(meals)
}
