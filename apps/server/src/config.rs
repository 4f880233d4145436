//! Server configuration from environment variables.

use std::time::Duration;

use foliopulse_ai::DEFAULT_GEMINI_MODEL;
use foliopulse_core::returns::DEFAULT_QUOTE_TTL;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`LISTEN_ADDR`).
    pub listen_addr: String,
    /// Gemini API key (`GEMINI_API_KEY`); the assistant endpoint is
    /// disabled when absent.
    pub gemini_api_key: Option<String>,
    /// Gemini model id (`GEMINI_MODEL`).
    pub gemini_model: String,
    /// Quote staleness window override in seconds (`QUOTE_TTL_SECS`).
    pub quote_ttl: Duration,
    /// Seed the built-in demo portfolio at startup (`SEED_DEMO_PORTFOLIO`).
    pub seed_demo_portfolio: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let quote_ttl = std::env::var("QUOTE_TTL_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_QUOTE_TTL);
        let seed_demo_portfolio = std::env::var("SEED_DEMO_PORTFOLIO")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            listen_addr,
            gemini_api_key,
            gemini_model,
            quote_ttl,
            seed_demo_portfolio,
        }
    }
}
