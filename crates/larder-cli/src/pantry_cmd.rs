//! `larder pantry` subcommands: list, add, remove.

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use larder_db::queries::{foods, pantry, users};

use crate::PantryCommands;

async fn resolve_user(pool: &PgPool, username: &str) -> Result<Uuid> {
    let user = users::get_user_by_username(pool, username)
        .await?
        .with_context(|| format!("user {username:?} not found; run `larder seed` first"))?;
    Ok(user.id)
}

pub async fn run_pantry_command(command: PantryCommands, pool: &PgPool) -> Result<()> {
    match command {
        PantryCommands::List { user } => {
            let user_id = resolve_user(pool, &user).await?;
            let snapshot = pantry::pantry_for_user(pool, user_id).await?;

            if snapshot.is_empty() {
                println!("Pantry for {user} is empty.");
                return Ok(());
            }

            println!("Pantry for {user}:");
            for entry in &snapshot {
                match &entry.unit {
                    Some(unit) => {
                        println!("  {:<20} {} {unit}", entry.food.name, entry.quantity)
                    }
                    None => println!("  {:<20} {}", entry.food.name, entry.quantity),
                }
            }
        }
        PantryCommands::Add {
            user,
            food,
            quantity,
            unit,
        } => {
            let user_id = resolve_user(pool, &user).await?;
            let food_row = foods::upsert_food(pool, &food).await?;
            let item =
                pantry::add_pantry_item(pool, user_id, food_row.id, quantity, unit.as_deref())
                    .await?;

            println!(
                "Added {quantity} {} -- now {} on hand.",
                food_row.name, item.quantity
            );
        }
        PantryCommands::Remove { user, food } => {
            let user_id = resolve_user(pool, &user).await?;
            let food_row = foods::get_food_by_name(pool, &food)
                .await?
                .with_context(|| format!("unknown food {food:?}"))?;

            if pantry::remove_pantry_item(pool, user_id, food_row.id).await? {
                println!("Removed {} from the pantry.", food_row.name);
            } else {
                println!("{} was not in the pantry.", food_row.name);
            }
        }
    }

    Ok(())
}
