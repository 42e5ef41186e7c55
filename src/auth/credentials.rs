//! Credentials sign-in and session claims.
//!
//! `authorize` exchanges an email/password pair for the backend's user record.
//! The record is merged into the session token claims by [`jwt`] and exposed as
//! the session user by [`session`]. Token signing is owned by the host.

use crate::{
    api::{ApiClient, ApiError},
    auth::{
        client,
        types::{AuthUser, LoginErrorResponse, LoginRequest},
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub const GENERIC_SIGN_IN_ERROR: &str = "An error occurred";

#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Sign-in failures; the display text is the message shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SignInError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{}", GENERIC_SIGN_IN_ERROR)]
    Failed,
}

/// Looks the user up from the supplied credentials.
///
/// Returns `Ok(None)` when either field is empty or the backend answers without a
/// user object.
///
/// # Errors
/// Returns a `SignInError` carrying the backend's message for 400/401 answers and
/// the generic message for anything else.
#[instrument(skip_all)]
pub async fn authorize(
    api: &ApiClient,
    credentials: &Credentials,
) -> Result<Option<AuthUser>, SignInError> {
    let password = credentials.password.expose_secret();
    if credentials.email.is_empty() || password.is_empty() {
        debug!("missing email or password");
        return Ok(None);
    }

    let request = LoginRequest {
        email: &credentials.email,
        password,
    };

    match client::login(api, &request).await {
        Ok(Value::Object(user)) => Ok(Some(user)),
        Ok(other) => {
            debug!("login returned no user object: {}", json_kind(&other));
            Ok(None)
        }
        Err(err) => Err(sign_in_error(&err)),
    }
}

fn sign_in_error(err: &ApiError) -> SignInError {
    warn!("sign-in failed: {}", err);

    let body = err.body_as::<LoginErrorResponse>().unwrap_or_default();
    match err.status() {
        Some(400) => body
            .non_field_errors
            .into_iter()
            .next()
            .map_or(SignInError::Failed, SignInError::InvalidCredentials),
        Some(401) => body
            .detail
            .map_or(SignInError::Failed, SignInError::Unauthorized),
        _ => SignInError::Failed,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Session token claims.
pub type TokenClaims = Map<String, Value>;

/// Merges the freshly signed-in user into the token claims; user fields win.
#[must_use]
pub fn jwt(mut token: TokenClaims, user: Option<&AuthUser>) -> TokenClaims {
    if let Some(user) = user {
        for (key, value) in user {
            token.insert(key.clone(), value.clone());
        }
    }
    token
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Session {
    pub user: TokenClaims,
}

/// Exposes the token claims as the session user.
#[must_use]
pub fn session(token: &TokenClaims) -> Session {
    Session {
        user: token.clone(),
    }
}
