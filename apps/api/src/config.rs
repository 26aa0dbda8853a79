use anyhow::{Context, Result};

pub const DEFAULT_MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-small-latest";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub mistral_api_key: String,
    pub mistral_api_url: String,
    pub mistral_model: String,
    pub mistral_timeout_secs: u64,
    /// Retrieval service endpoint. RAG generation is disabled when unset.
    pub retrieval_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            mistral_api_key: require("MISTRAL_API_KEY")?,
            mistral_api_url: lookup("MISTRAL_API_URL")
                .unwrap_or_else(|| DEFAULT_MISTRAL_API_URL.to_string()),
            mistral_model: lookup("MISTRAL_MODEL")
                .unwrap_or_else(|| DEFAULT_MISTRAL_MODEL.to_string()),
            mistral_timeout_secs: lookup("MISTRAL_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("MISTRAL_TIMEOUT_SECS must be a whole number of seconds")?,
            retrieval_url: lookup("RETRIEVAL_URL").filter(|v| !v.trim().is_empty()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
