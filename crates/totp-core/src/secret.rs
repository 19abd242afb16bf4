//! Shared-secret wrapper for OTP key material.
//!
//! [`Secret`] wraps [`SecretSlice<u8>`] from the `secrecy` crate, so the bytes
//! are zeroized on drop and never appear in `Debug` output. The only way back
//! to text is an explicit codec call by the caller.

use std::fmt;

use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroize;

use crate::codec::{base32_decode, base64_decode};
use crate::OtpError;

/// Immutable, non-empty shared secret used as the HMAC key.
pub struct Secret {
    inner: SecretSlice<u8>,
}

impl Secret {
    /// Copy `bytes` into a new secret.
    ///
    /// RFC 4226 recommends at least 128 bits of entropy; only emptiness is
    /// enforced here. The caller should zeroize its source buffer afterwards.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidConfiguration` if `bytes` is empty.
    pub fn new(bytes: &[u8]) -> Result<Self, OtpError> {
        if bytes.is_empty() {
            return Err(OtpError::config("secret", "must not be empty"));
        }
        Ok(Self {
            inner: bytes.to_vec().into(),
        })
    }

    /// Decode a Base32 secret, the format authenticator apps exchange.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::Decoding` for malformed text and
    /// `OtpError::InvalidConfiguration` if it decodes to nothing.
    pub fn from_base32(text: &str) -> Result<Self, OtpError> {
        let mut bytes = base32_decode(text)?;
        let result = Self::new(&bytes);
        bytes.zeroize();
        result
    }

    /// Decode a Base64 secret.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::Decoding` for malformed text and
    /// `OtpError::InvalidConfiguration` if it decodes to nothing.
    pub fn from_base64(text: &str) -> Result<Self, OtpError> {
        let mut bytes = base64_decode(text)?;
        let result = Self::new(&bytes);
        bytes.zeroize();
        result
    }

    /// Expose the raw key bytes. Keep the borrow short.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// Number of key bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Always `false`: empty secrets are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}
