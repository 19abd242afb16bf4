//! `totp-core` — RFC 4226 HOTP and RFC 6238 TOTP.
//!
//! Pure computation: no I/O, no async, no randomness. An engine is built once
//! from a [`Secret`] and a [`TotpConfig`] and is then a function of time (or
//! counter) alone.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod secret;

pub mod codec;

pub mod truncate;

pub mod render;

pub mod config;
pub mod totp;

pub use codec::{base32_decode, base32_encode, base64_decode, base64_encode};
pub use config::TotpConfig;
pub use error::OtpError;
pub use render::{Renderer, DEFAULT_DIGITS, MIN_DIGITS};
pub use secret::Secret;
pub use totp::{
    generate_hotp, OtpAlgorithm, Totp, DEFAULT_INTERVAL, DEFAULT_REFERENCE_TIMESTAMP,
    RECOMMENDED_MAX_WINDOW,
};
pub use truncate::{extract_31bit, MIN_DIGEST_LEN};
