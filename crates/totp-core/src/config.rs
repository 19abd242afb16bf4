//! Engine configuration.
//!
//! Everything except the secret, so a configuration can be stored or sent
//! as plain JSON next to an encrypted secret. Every field has an RFC 6238
//! default.

use serde::{Deserialize, Serialize};

use crate::render::{Renderer, DEFAULT_DIGITS};
use crate::totp::{OtpAlgorithm, DEFAULT_INTERVAL, DEFAULT_REFERENCE_TIMESTAMP};
use crate::OtpError;

/// Non-secret TOTP parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotpConfig {
    /// HMAC hash: `"SHA1"`, `"SHA256"` or `"SHA512"`.
    #[serde(default)]
    pub algorithm: OtpAlgorithm,

    /// Seconds per time step (≥ 1).
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// Unix timestamp of counter zero (T0).
    #[serde(default = "default_reference_timestamp")]
    pub reference_timestamp: u64,

    /// Password width in digits (≥ 6).
    #[serde(default = "default_digits")]
    pub digits: u32,

    /// Largest verification window callers may request. `None` leaves the
    /// window uncapped; requests above the cap are rejected, never clamped.
    #[serde(default)]
    pub max_window: Option<u32>,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            algorithm: OtpAlgorithm::default(),
            interval: default_interval(),
            reference_timestamp: default_reference_timestamp(),
            digits: default_digits(),
            max_window: None,
        }
    }
}

const fn default_interval() -> u64 {
    DEFAULT_INTERVAL
}
const fn default_reference_timestamp() -> u64 {
    DEFAULT_REFERENCE_TIMESTAMP
}
const fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

impl TotpConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidConfiguration` if the JSON is malformed or
    /// the parsed values fail [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, OtpError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OtpError::config("config", format!("malformed JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidConfiguration` if serialization fails.
    pub fn to_json(&self) -> Result<String, OtpError> {
        serde_json::to_string(self)
            .map_err(|e| OtpError::config("config", format!("serialization failed: {e}")))
    }

    /// Check the interval and digit count.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidConfiguration` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), OtpError> {
        if self.interval == 0 {
            return Err(OtpError::config("interval", "must be at least 1 second"));
        }
        Renderer::new(self.digits)?;
        Ok(())
    }
}
