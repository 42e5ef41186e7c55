//! Client wrappers for the auth endpoints. Route paths live here so flows never
//! build URLs themselves.

use crate::{
    api::{ApiClient, ApiError},
    auth::types::{LoginRequest, ResendOtpRequest, VerifyOtpRequest},
};
use serde_json::Value;

pub const VERIFY_OTP_PATH: &str = "/user/verify-otp/";
pub const RESEND_OTP_PATH: &str = "user/resend-otp/";
pub const LOGIN_PATH: &str = "/user/login/";

/// Submits a one-time code for the given email. Only a 200 counts as verified.
/// Must never log the code.
///
/// # Errors
/// Returns the `ApiError` reported by the transport or the server, or
/// `ApiError::Http` for any other success status.
pub async fn verify_otp(client: &ApiClient, request: &VerifyOtpRequest) -> Result<(), ApiError> {
    match client.post_json_empty(VERIFY_OTP_PATH, request).await? {
        200 => Ok(()),
        status => Err(ApiError::Http {
            status,
            message: format!("Unexpected status {status}"),
            body: None,
        }),
    }
}

/// Asks the backend to mail a fresh code.
///
/// # Errors
/// Returns the `ApiError` reported by the transport or the server.
pub async fn resend_otp(client: &ApiClient, request: &ResendOtpRequest) -> Result<(), ApiError> {
    client.post_json_empty(RESEND_OTP_PATH, request).await?;
    Ok(())
}

/// Exchanges credentials for the user record. The body may be `null`.
///
/// # Errors
/// Returns the `ApiError` reported by the transport or the server.
pub async fn login(client: &ApiClient, request: &LoginRequest<'_>) -> Result<Value, ApiError> {
    client.post_json(LOGIN_PATH, request).await
}
