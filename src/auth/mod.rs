//! Auth feature module: OTP email verification and credentials sign-in. It keeps
//! request wiring out of the front end and must stay aligned with the backend's
//! error shapes. Codes, passwords and email addresses must not be logged.

pub mod client;
pub mod credentials;
pub mod otp;
pub mod timer;
pub mod types;

pub use self::credentials::{authorize, Credentials, Session, SignInError};
pub use self::otp::{OtpVerificationForm, ResendOutcome, VerificationOutcome};
