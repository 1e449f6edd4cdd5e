use std::env;
use std::time::Duration;

use crate::config::persona::SYSTEM_INSTRUCTION;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            RunMode::Production
        } else {
            RunMode::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Production => "production",
        }
    }
}

/// Process configuration, read once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub mode: RunMode,
    pub database_url: String,
    pub static_dir: String,
    pub dev_server_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub provider_timeout: Duration,
    pub admin_token: Option<String>,
    pub system_instruction: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: RunMode::Development,
            database_url: "sqlite://leads.db".to_string(),
            static_dir: "dist".to_string(),
            dev_server_url: "http://localhost:5173".to_string(),
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
            admin_token: None,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = get("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let mode = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .map(|m| RunMode::parse(&m))
            .unwrap_or(defaults.mode);
        let provider_timeout = get("PROVIDER_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.provider_timeout);

        Self {
            port,
            mode,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
            dev_server_url: get("DEV_SERVER_URL").unwrap_or(defaults.dev_server_url),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            provider_timeout,
            admin_token: get("ADMIN_TOKEN"),
            system_instruction: defaults.system_instruction,
        }
    }
}
