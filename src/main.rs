use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{Config, InvalidInputPolicy, init_tracing, load_config_from};
use database::{DbRepository, PlanetaryRepository, connect, seed_sample_data};
use std::path::PathBuf;
use std::time::Duration;

/// The main entry point for the planetary API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config_from(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            let policy = args.invalid_input.unwrap_or(config.api.invalid_input);
            web_server::run_server(&config, policy).await?;
        }
        Commands::DbCreate => {
            open_repository(&config).await?.create_schema().await?;
            println!("Database created!");
        }
        Commands::DbDrop => {
            open_repository(&config).await?.drop_schema().await?;
            println!("Database dropped!");
        }
        Commands::DbSeed => {
            let repo = open_repository(&config).await?;
            seed_sample_data(&repo)
                .await
                .context("seeding failed; drop the database before seeding again")?;
            println!("Database seeded!");
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small HTTP API serving planets and user registration.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file; missing files fall back to defaults.
    #[arg(long, global = true, default_value = configuration::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server, creating the schema first if needed.
    Serve(ServeArgs),
    /// Create the users and planets tables.
    DbCreate,
    /// Drop both tables and all of their rows.
    DbDrop,
    /// Insert the sample planets and user.
    DbSeed,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `api.invalid_input` from the settings.
    #[arg(long, value_enum)]
    invalid_input: Option<InvalidInputPolicy>,
}

// ==============================================================================
// Administrative Command Logic
// ==============================================================================

async fn open_repository(config: &Config) -> anyhow::Result<DbRepository> {
    let pool = connect(
        &config.database.url,
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await
    .with_context(|| format!("connecting to {}", config.database.url))?;
    Ok(DbRepository::new(pool))
}
