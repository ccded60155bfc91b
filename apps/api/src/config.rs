use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a workable default except the API key, whose absence
/// simply disables the AI summary pass.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Feature flag for the AI summary pass.
    pub use_ai_summary: bool,
    pub anthropic_api_key: Option<String>,
    /// Default minimum score threshold for shortlisting candidates.
    pub min_keyword_score: u32,
    /// JSON file holding custom job profiles.
    pub profile_store_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            use_ai_summary: parse_flag(&env_or("USE_AI_SUMMARY", "true")),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            min_keyword_score: env_or("MIN_KEYWORD_SCORE", "50")
                .parse::<u32>()
                .context("MIN_KEYWORD_SCORE must be an integer between 0 and 100")?,
            profile_store_path: PathBuf::from(env_or(
                "PROFILE_STORE_PATH",
                "custom_profiles.json",
            )),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Boolean env/form flag parsing: "true", "1" and "yes" (any case) are on.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        for raw in ["true", "TRUE", " 1 ", "yes", "Yes"] {
            assert!(parse_flag(raw), "expected {raw:?} to be on");
        }
        for raw in ["false", "0", "no", "", "maybe"] {
            assert!(!parse_flag(raw), "expected {raw:?} to be off");
        }
    }
}
