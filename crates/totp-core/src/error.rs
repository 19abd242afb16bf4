//! Error types for `totp-core`.

use thiserror::Error;

/// Errors produced by OTP configuration, generation, verification and the
/// secret codecs.
///
/// Every variant is a deterministic function of its input: retrying the same
/// call reproduces the same error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    /// A construction or call parameter violates its constraint
    /// (digit count, interval, empty secret, window above the configured cap).
    #[error("invalid configuration: {parameter}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The constraint that was violated.
        reason: String,
    },

    /// No non-negative counter exists for the timestamp: it lies before the
    /// reference timestamp (T0), or the system clock reads before the epoch.
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Malformed Base32/Base64 text.
    #[error("decoding error: {0}")]
    Decoding(String),
}

impl OtpError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_parameter_and_constraint() {
        let err = OtpError::config("digits", "must be at least 6, got 5");
        insta::assert_snapshot!(err.to_string(), @"invalid configuration: digits: must be at least 6, got 5");
    }

    #[test]
    fn display_decoding() {
        let err = OtpError::Decoding("invalid Base32: invalid symbol at 3".to_owned());
        insta::assert_snapshot!(err.to_string(), @"decoding error: invalid Base32: invalid symbol at 3");
    }
}
