use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Closed set of failures returned by the API client. Callers match on the kind
/// instead of probing response shapes.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of a server rejection, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decodes the JSON error body of a server rejection into `T`.
    /// Only object bodies are decoded; serde would otherwise accept an array
    /// as a struct in field order. Returns `None` for transport errors and for
    /// bodies of another shape.
    #[must_use]
    pub fn body_as<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            ApiError::Http {
                body: Some(body @ Value::Object(_)),
                ..
            } => serde_json::from_value(body.clone()).ok(),
            _ => None,
        }
    }
}
