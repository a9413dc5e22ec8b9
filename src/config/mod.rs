// src/config/mod.rs
// All values come from the environment (.env honored); defaults cover local
// development. Loaded once at startup into a global.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct GabbleConfig {
    // ── Completion Provider
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub upstream_timeout: u64,

    // ── Server
    pub host: String,
    pub port: u16,
    pub cors_origin: String,

    // ── Logging
    pub log_level: String,
}

/// Parses an env var, tolerating trailing comments and whitespace; missing
/// or unparseable values fall back to the default.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl GabbleConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            api_key: std::env::var("PERPLEXITY_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            api_base: env_var_or("GABBLE_API_BASE", "https://api.perplexity.ai".to_string()),
            model: env_var_or("GABBLE_MODEL", "sonar".to_string()),
            upstream_timeout: env_var_or("GABBLE_UPSTREAM_TIMEOUT", 60),
            host: env_var_or("GABBLE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("GABBLE_PORT", 8787),
            cors_origin: env_var_or("GABBLE_CORS_ORIGIN", "*".to_string()),
            log_level: env_var_or("GABBLE_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<GabbleConfig> = Lazy::new(GabbleConfig::from_env);
