//! `larder recipes` subcommands.

use anyhow::{Context, Result};
use sqlx::PgPool;

use larder_db::queries::{recipes, users};

use crate::RecipeCommands;

pub async fn run_recipe_command(command: RecipeCommands, pool: &PgPool) -> Result<()> {
    match command {
        RecipeCommands::List { user } => {
            let user_row = users::get_user_by_username(pool, &user)
                .await?
                .with_context(|| format!("user {user:?} not found; run `larder seed` first"))?;

            let catalog = recipes::recipes_for_user(pool, user_row.id).await?;

            if catalog.is_empty() {
                println!("No recipes for {user}.");
                return Ok(());
            }

            println!("Recipes for {user}:");
            for recipe in &catalog {
                match &recipe.source {
                    Some(source) => println!("  #{} {} ({source})", recipe.id, recipe.title),
                    None => println!("  #{} {}", recipe.id, recipe.title),
                }
                for need in &recipe.ingredients {
                    match &need.unit {
                        Some(unit) => {
                            println!("      - {} {unit} {}", need.quantity, need.food.name)
                        }
                        None => println!("      - {} {}", need.quantity, need.food.name),
                    }
                }
            }
        }
    }

    Ok(())
}
