mod config;
mod pantry_cmd;
mod plan_cmd;
mod recipe_cmd;
mod seed_cmd;

use clap::{Parser, Subcommand};

use larder_db::pool;

use config::LarderConfig;

#[derive(Parser)]
#[command(name = "larder", about = "Pantry-driven meal plan generator")]
struct Cli {
    /// Database URL (overrides LARDER_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a larder config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/larder")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create the larder database and run migrations
    DbInit,
    /// Load foods, pantry items and recipes from a TOML fixture file
    Seed {
        /// Path to the seed TOML file
        file: String,
        /// Username to seed for (created if missing)
        #[arg(long)]
        user: String,
    },
    /// Pantry management
    Pantry {
        #[command(subcommand)]
        command: PantryCommands,
    },
    /// Recipe management
    Recipes {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Generate a meal plan
    Plan {
        /// Username to plan for
        #[arg(long)]
        user: String,
        /// Number of meals to plan
        #[arg(long, default_value_t = 5)]
        meals: u32,
        /// Skip the user's own recipes; use external generators only
        #[arg(long)]
        external_only: bool,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PantryCommands {
    /// List a user's pantry
    List {
        /// Username whose pantry to list
        #[arg(long)]
        user: String,
    },
    /// Add a quantity of a food (the food is created on first use)
    Add {
        /// Username whose pantry to add to
        #[arg(long)]
        user: String,
        /// Food name
        food: String,
        /// Quantity to add
        quantity: f64,
        /// Unit for the quantity (e.g. g, ml)
        #[arg(long)]
        unit: Option<String>,
    },
    /// Remove a food from the pantry entirely
    Remove {
        /// Username whose pantry to remove from
        #[arg(long)]
        user: String,
        /// Food name
        food: String,
    },
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List a user's recipes with their ingredients
    List {
        /// Username whose recipes to list
        #[arg(long)]
        user: String,
    },
}

/// Execute `larder init`: write the config file.
fn cmd_init(db_url: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!();
    println!("Next: run `larder db-init` to create and migrate the database.");

    Ok(())
}

/// Execute `larder db-init`: create the database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = LarderConfig::resolve(cli_db_url)?;

    println!("Initializing larder database...");

    pool::ensure_database_exists(&resolved.db_config).await?;

    let db_pool = pool::create_pool(&resolved.db_config).await?;
    pool::run_migrations(&db_pool).await?;
    db_pool.close().await;

    println!("larder db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_url, force } => {
            cmd_init(&db_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Seed { file, user } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = seed_cmd::run_seed(&db_pool, &file, &user).await;
            db_pool.close().await;
            result?;
        }
        Commands::Pantry { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = pantry_cmd::run_pantry_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Recipes { command } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = recipe_cmd::run_recipe_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Plan {
            user,
            meals,
            external_only,
            json,
        } => {
            let resolved = LarderConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result =
                plan_cmd::run_plan(&db_pool, &user, meals as usize, external_only, json).await;
            db_pool.close().await;
            result?;
        }
    }

    Ok(())
}
