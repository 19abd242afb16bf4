//! Base32 and Base64 codecs (RFC 4648) for moving secrets across textual
//! boundaries.
//!
//! The OTP engine itself only ever sees raw bytes; these helpers exist for
//! callers that receive secrets as text (authenticator exports, provisioning
//! forms) and for [`Secret::from_base32`](crate::Secret::from_base32).

use data_encoding::{BASE32, BASE32_NOPAD, BASE64};

use crate::OtpError;

/// Encode bytes as uppercase RFC 4648 Base32, padded with `=` to a multiple
/// of 8 characters.
#[must_use]
pub fn base32_encode(bytes: &[u8]) -> String {
    BASE32.encode(bytes)
}

/// Decode RFC 4648 Base32 text.
///
/// Input is case-insensitive and padding is optional. When padding is
/// present the text must be a whole number of 8-character groups.
///
/// # Errors
///
/// Returns `OtpError::Decoding` for characters outside `A–Z2–7` (other than
/// trailing padding) or an impossible unpadded length.
pub fn base32_decode(text: &str) -> Result<Vec<u8>, OtpError> {
    let normalized = text.to_ascii_uppercase();
    let decoded = if normalized.contains('=') {
        BASE32.decode(normalized.as_bytes())
    } else {
        BASE32_NOPAD.decode(normalized.as_bytes())
    };
    decoded.map_err(|e| OtpError::Decoding(format!("invalid Base32: {e}")))
}

/// Encode bytes as RFC 4648 Base64 with `=` padding.
#[must_use]
pub fn base64_encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode padded RFC 4648 Base64 text.
///
/// # Errors
///
/// Returns `OtpError::Decoding` for characters outside the standard alphabet
/// or a malformed length.
pub fn base64_decode(text: &str) -> Result<Vec<u8>, OtpError> {
    BASE64
        .decode(text.as_bytes())
        .map_err(|e| OtpError::Decoding(format!("invalid Base64: {e}")))
}
