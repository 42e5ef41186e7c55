//! Connection settings for the remote ticketing API. Values are public; do not
//! store secrets here.

use super::errors::ApiError;
use std::time::Duration;
use url::Url;

/// Default request timeout (seconds) applied by the client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Validates the base URL and applies the default timeout.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL does not parse or is not HTTP(S).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        let url = Url::parse(trimmed)
            .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
