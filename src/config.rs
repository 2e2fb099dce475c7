use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::groq::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_LOG_FILE: &str = "islamic_qa_log.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set in the environment")]
    MissingApiKey,
}

/// Runtime configuration, read once at startup and passed into the app
/// state. Only the API key is mandatory.
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5000);

        let base_url = env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_ms = env::var("GROQ_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20_000);

        let log_file = env::var("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            port,
            api_key,
            base_url,
            model,
            timeout_ms,
            log_file,
        })
    }
}
