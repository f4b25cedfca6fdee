use serde::Deserialize;
use std::env;
use wardwatch_common::error::{WardwatchError, WardwatchResult};

#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub insight_api_base_url: String,
    pub insight_api_token: Option<String>,
    pub insight_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> WardwatchResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            insight_api_base_url: get_var("INSIGHT_API_BASE_URL")?,
            insight_api_token: env::var("INSIGHT_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            insight_timeout_secs: get_var_or("INSIGHT_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|e| {
                    WardwatchError::Config(format!("invalid INSIGHT_TIMEOUT_SECS: {e}"))
                })?,
            host: get_var_or("HOST", "0.0.0.0"),
            port: get_var_or("PORT", "8080")
                .parse()
                .map_err(|e| WardwatchError::Config(format!("invalid PORT: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
            cors_origins: parse_csv(&get_var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn get_var(key: &str) -> WardwatchResult<String> {
    env::var(key).map_err(|_| WardwatchError::Config(format!("{key} is required but not set")))
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
