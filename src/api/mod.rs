//! HTTP helpers for the ticketing API with a consistent timeout and error policy.
//! Feature clients go through [`ApiClient`] so every request shares the same user
//! agent and error mapping. The helpers never log request bodies; callers pass
//! credentials and codes through them.

pub mod config;
pub mod errors;

pub use self::config::ApiConfig;
pub use self::errors::ApiError;

use crate::APP_USER_AGENT;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Maximum number of error body characters kept in `ApiError::Http` messages.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client bound to the configured base URL and timeout.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to initialize HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns the `ApiError` kind matching the failure.
    #[instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_post(path, body).await?;
        handle_json_response(response).await
    }

    /// Posts JSON and ignores the body of a successful response, returning its
    /// status code.
    ///
    /// # Errors
    /// Returns the `ApiError` kind matching the failure.
    #[instrument(skip(self, body))]
    pub async fn post_json_empty<B>(&self, path: &str, body: &B) -> Result<u16, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send_post(path, body).await?;
        handle_empty_response(response).await
    }

    async fn send_post<B>(&self, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = build_url_with_base(&self.base_url, path);
        let payload = serde_json::to_vec(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

        debug!("POST {}", url);

        self.http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)
    }
}

/// Joins a path onto the base URL, tolerating missing or duplicate slashes.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Config(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<u16, ApiError> {
    if response.status().is_success() {
        Ok(response.status().as_u16())
    } else {
        Err(http_error(response).await)
    }
}

/// Keeps the JSON body (if any) for callers that map field errors, plus a
/// sanitized text message for display.
async fn http_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<Value>(&text).ok();

    ApiError::Http {
        status,
        message: sanitize_body(&text),
        body,
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
