use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::api::DEFAULT_API_URL;

/// Server-side configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend serving `/api/resources`
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        reqwest::Url::parse(&api_url)
            .with_context(|| format!("API_URL must be an absolute URL, got {api_url:?}"))?;

        Ok(Self { api_url })
    }
}
