use anyhow::{Context, Result};

use crate::auth::password::DEFAULT_ITERATIONS;

/// Application configuration loaded from environment variables.
/// Fails at startup if a supplied value cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Skill extraction is disabled when no key is configured.
    pub anthropic_api_key: Option<String>,
    pub job_catalog_path: Option<String>,
    pub password_hash_iterations: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://screener.db".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            job_catalog_path: optional_env("JOB_CATALOG_PATH"),
            password_hash_iterations: match optional_env("PASSWORD_HASH_ITERATIONS") {
                Some(raw) => raw
                    .parse::<u32>()
                    .context("PASSWORD_HASH_ITERATIONS must be a positive integer")?,
                None => DEFAULT_ITERATIONS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
