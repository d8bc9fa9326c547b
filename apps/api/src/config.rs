use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails before the listener binds if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: PathBuf::from(
                std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploaded_resumes".to_string()),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
