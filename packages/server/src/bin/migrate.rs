//! Schema migration CLI.
//!
//! `migrate run` applies pending migrations; `migrate list` prints the
//! migrations bundled into the binary without touching the database.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server_core::Config;

#[derive(Parser)]
#[command(name = "migrate")]
#[command(about = "Apply database migrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Run,
    /// List bundled migrations
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let migrator = sqlx::migrate!("./migrations");

    match cli.command {
        Commands::Run => {
            let config = Config::from_env().context("Failed to load configuration")?;
            let pool = PgPoolOptions::new()
                .max_connections(2)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Running database migrations...");
            migrator
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations complete");
        }
        Commands::List => {
            for migration in migrator.iter() {
                println!("{:>14}  {}", migration.version, migration.description);
            }
        }
    }

    Ok(())
}
