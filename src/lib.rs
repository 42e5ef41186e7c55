//! # zcbus (email verification and sign-in client)
//!
//! `zcbus` drives the customer-side authentication flows of the ZC Bus ticketing
//! service against its remote API. All business rules (OTP issuance, validation,
//! persistence) live on the server; this crate owns the client-side state only.
//!
//! ## OTP Verification
//!
//! 1. **Submit:** The user enters the 4-character code mailed to them. Codes that are
//!    too short never reach the network. The first submission arms the resend cooldown.
//! 2. **Verify:** The code is POSTed to `/user/verify-otp/`. On success the panel
//!    closes and the host navigates to `/login`.
//! 3. **Reject:** Server validation errors are mapped onto the code field, falling
//!    back to `Invalid OTP`.
//! 4. **Resend:** Once the 60 second cooldown has elapsed, `user/resend-otp/` mails a
//!    new code and re-arms the cooldown.
//!
//! ## Sign-in
//!
//! Credentials are exchanged at `/user/login/` and the returned user record is folded
//! into the session claims.
//!
//! Email addresses, passwords and codes must never be logged.

pub mod api;
pub mod auth;
pub mod cli;
pub mod navigation;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
