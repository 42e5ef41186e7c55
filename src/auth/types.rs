//! Request and response payloads for the auth endpoints. These carry codes and
//! passwords, so they must never be logged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Field errors returned by `/user/verify-otp/`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OtpErrorResponse {
    #[serde(default)]
    pub otp: Vec<String>,
}

/// Error body returned by `/user/login/`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginErrorResponse {
    #[serde(default)]
    pub non_field_errors: Vec<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// User record returned by the login endpoint. The shape is owned by the backend,
/// so it is carried as loose JSON claims.
pub type AuthUser = Map<String, Value>;
