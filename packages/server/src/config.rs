use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// How many rows the search fetches before in-memory filtering when no
/// explicit cap is configured. Listing volume is modest; a few hundred rows
/// comfortably covers a market's active inventory.
pub const DEFAULT_SEARCH_FETCH_LIMIT: i64 = 200;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub search_fetch_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            search_fetch_limit: match env::var("SEARCH_FETCH_LIMIT") {
                Ok(value) => value
                    .parse()
                    .context("SEARCH_FETCH_LIMIT must be a valid number")?,
                Err(_) => DEFAULT_SEARCH_FETCH_LIMIT,
            },
        })
    }
}
