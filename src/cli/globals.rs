use crate::api::ApiConfig;
use anyhow::{Context, Result};
use std::time::Duration;

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, timeout: Duration) -> Self {
        Self { api_url, timeout }
    }

    /// # Errors
    /// Returns an error if the API URL is not a valid HTTP(S) URL.
    pub fn api_config(&self) -> Result<ApiConfig> {
        let config = ApiConfig::new(&self.api_url).context("invalid ZCBUS_API_URL")?;
        Ok(config.with_timeout(self.timeout))
    }
}
