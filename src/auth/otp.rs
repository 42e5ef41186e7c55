//! Email OTP verification form.
//!
//! Holds the state of the panel that asks for the 4-character code mailed to the
//! user: the field error under the code input, the resend cooldown and whether a
//! first submission has happened yet. `submit` and `resend` take the form by
//! exclusive reference, so only one request per form is in flight at a time.

use crate::{
    api::{ApiClient, ApiError},
    auth::{
        client,
        timer::ResendTimer,
        types::{OtpErrorResponse, ResendOtpRequest, VerifyOtpRequest},
    },
    navigation::{paths, Navigator},
};
use tracing::{debug, error, info, instrument, warn};

pub const OTP_LENGTH: usize = 4;
pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const OTP_LENGTH_MESSAGE: &str = "Your one-time password must be 4 characters.";
pub const INVALID_OTP_MESSAGE: &str = "Invalid OTP";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Code accepted; the panel is closed and the host was sent to the login view.
    Verified,
    /// Code rejected locally; no request was issued.
    Invalid(String),
    /// Code rejected by the server or the request failed.
    Rejected(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResendOutcome {
    Sent,
    /// Cooldown still running, or nothing submitted yet.
    Unavailable { remaining: u32 },
    /// Request failed; only logged, the cooldown is left as it was.
    Failed,
}

pub struct OtpVerificationForm<N> {
    client: ApiClient,
    navigator: N,
    email: String,
    open: bool,
    initial: bool,
    pin_error: Option<String>,
    timer: ResendTimer,
}

impl<N: Navigator> OtpVerificationForm<N> {
    /// Opens the panel for `email`. The address is trusted as given.
    pub fn new(client: ApiClient, email: impl Into<String>, navigator: N) -> Self {
        Self {
            client,
            navigator,
            email: email.into(),
            open: true,
            initial: true,
            pin_error: None,
            timer: ResendTimer::new(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Message currently shown under the code input.
    #[must_use]
    pub fn pin_error(&self) -> Option<&str> {
        self.pin_error.as_deref()
    }

    #[must_use]
    pub fn resend_timer(&self) -> u32 {
        self.timer.remaining()
    }

    #[must_use]
    pub fn resend_enabled(&self) -> bool {
        !self.initial && self.timer.remaining() == 0
    }

    #[must_use]
    pub fn resend_label(&self) -> String {
        match self.timer.remaining() {
            0 => "Resend OTP".to_string(),
            seconds => format!("Resend OTP in {seconds} seconds"),
        }
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Tears the form down, cancelling the cooldown, and hands back the navigator.
    pub fn into_navigator(self) -> N {
        let Self { navigator, .. } = self;
        navigator
    }

    /// Submits a code for verification.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, code: &str) -> VerificationOutcome {
        self.pin_error = None;

        if let Err(message) = validate_code(code) {
            self.pin_error = Some(message.clone());
            return VerificationOutcome::Invalid(message);
        }

        if self.initial {
            self.timer.start(RESEND_COOLDOWN_SECS);
            self.initial = false;
        }

        let request = VerifyOtpRequest {
            email: self.email.clone(),
            otp: code.to_string(),
        };

        match client::verify_otp(&self.client, &request).await {
            Ok(()) => {
                info!("email verified");
                self.open = false;
                self.navigator.push(paths::LOGIN);
                VerificationOutcome::Verified
            }
            Err(err) => {
                warn!("OTP verification failed: {}", err);
                let message = otp_error_message(&err);
                self.pin_error = Some(message.clone());
                VerificationOutcome::Rejected(message)
            }
        }
    }

    /// Requests a new code once the cooldown allows it.
    #[instrument(skip_all)]
    pub async fn resend(&mut self) -> ResendOutcome {
        if !self.resend_enabled() {
            let remaining = self.timer.remaining();
            debug!("resend unavailable, {} seconds left", remaining);
            return ResendOutcome::Unavailable { remaining };
        }

        let request = ResendOtpRequest {
            email: self.email.clone(),
        };

        match client::resend_otp(&self.client, &request).await {
            Ok(()) => {
                self.timer.start(RESEND_COOLDOWN_SECS);
                ResendOutcome::Sent
            }
            Err(err) => {
                error!("Error resending OTP: {}", err);
                ResendOutcome::Failed
            }
        }
    }
}

fn validate_code(code: &str) -> Result<(), String> {
    if code.chars().count() < OTP_LENGTH {
        Err(OTP_LENGTH_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

/// First `otp` message from the server, or the generic fallback.
fn otp_error_message(err: &ApiError) -> String {
    err.body_as::<OtpErrorResponse>()
        .and_then(|body| body.otp.into_iter().next())
        .unwrap_or_else(|| INVALID_OTP_MESSAGE.to_string())
}
