use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SIMULATION_DELAY_MS: u64 = 1500;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Catalog JSON to load instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    /// Empty or unset disables model-backed simulations.
    pub gemini_api_key: Option<String>,
    pub simulation_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            simulation_delay_ms: match optional_env("SIMULATION_DELAY_MS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("SIMULATION_DELAY_MS must be a whole number of milliseconds")?,
                None => DEFAULT_SIMULATION_DELAY_MS,
            },
        })
    }
}

/// Reads `key`, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
