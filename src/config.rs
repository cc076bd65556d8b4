use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_base_url: String,

    // Locale
    pub default_locale: String,

    // HTTP
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend base URL, e.g. https://devosoft.uz
            api_base_url: std::env::var("API_BASE_URL")
                .context("API_BASE_URL not set")?,

            // Locale the CLI renders in when none is given on the command line
            default_locale: std::env::var("DEFAULT_LOCALE")
                .unwrap_or_else(|_| "uz".to_string()),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}
