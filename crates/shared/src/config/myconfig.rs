use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/core";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = "./.dayflow/session.json";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub session_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        // Trailing slash is stripped so request paths can always start with '/'.
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match std::env::var("API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("API_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_file = std::env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            api: ApiConfig {
                base_url,
                timeout_secs,
            },
            storage: StorageConfig { session_file },
        })
    }
}
