//! `larder plan` command: run the generation engine for a user.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use larder_core::PlanError;
use larder_core::generator::{GeneratorChain, StaplesGenerator};
use larder_core::plan::{MealPlanEntry, generate_meal_plan};
use larder_db::queries::users;

/// Build the default generator chain.
///
/// Only the built-in staples generator for now; third-party search
/// integrations register here once configured.
fn default_chain() -> GeneratorChain {
    let mut chain = GeneratorChain::new();
    chain.push(StaplesGenerator::new());
    chain
}

/// Run the plan command.
pub async fn run_plan(
    pool: &PgPool,
    username: &str,
    meals: usize,
    external_only: bool,
    json: bool,
) -> Result<()> {
    let user = users::get_user_by_username(pool, username)
        .await?
        .with_context(|| format!("user {username:?} not found; run `larder seed` first"))?;

    let chain = default_chain();

    // Graceful shutdown: first signal cancels, second force-exits.
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    let got_first_signal = Arc::new(AtomicBool::new(false));
    let got_first_clone = Arc::clone(&got_first_signal);

    tokio::spawn(async move {
        loop {
            tokio::signal::ctrl_c().await.ok();
            if got_first_clone.swap(true, Ordering::SeqCst) {
                eprintln!("\nForce exit.");
                std::process::exit(130);
            }
            eprintln!("\nCancelling plan generation (Ctrl+C again to force)...");
            cancel_clone.cancel();
        }
    });

    let plan = match generate_meal_plan(pool, user.id, meals, external_only, &chain, cancel).await {
        Ok(plan) => plan,
        Err(PlanError::Cancelled) => {
            eprintln!("Plan generation cancelled.");
            std::process::exit(130);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("No meals could be planned for {username} (requested {meals}).");
        return Ok(());
    }

    println!("Meal plan for {username} ({} of {meals} requested):", plan.len());
    for (slot, entry) in plan.iter().enumerate() {
        print_entry(slot + 1, entry);
    }

    Ok(())
}

fn print_entry(slot: usize, entry: &MealPlanEntry) {
    let provenance = match entry.recipe_id() {
        Some(id) => format!("recipe #{id}"),
        None => entry.source().unwrap_or("generated").to_string(),
    };
    println!("  {slot}. {}  [{provenance}]", entry.title());

    let instructions = entry.instructions().trim();
    if !instructions.is_empty() {
        println!("     {instructions}");
    }
}
