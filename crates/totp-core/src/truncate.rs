//! Dynamic truncation (RFC 4226 §5.3).

/// Shortest digest accepted by [`extract_31bit`] (HMAC-SHA1 output).
pub const MIN_DIGEST_LEN: usize = 20;

/// Extract the unsigned 31-bit integer an HMAC digest designates.
///
/// The low nibble of the final byte is an offset into the digest; the four
/// bytes starting there are read big-endian and the top bit is masked off,
/// so the result is always below `2^31`.
///
/// # Panics
///
/// Panics if `digest` is shorter than [`MIN_DIGEST_LEN`] bytes. HMAC output
/// for every supported algorithm is at least that long, so a shorter digest
/// is a caller bug rather than a runtime condition.
#[must_use]
pub fn extract_31bit(digest: &[u8]) -> u32 {
    assert!(
        digest.len() >= MIN_DIGEST_LEN,
        "digest must be at least {MIN_DIGEST_LEN} bytes, got {}",
        digest.len()
    );

    let offset = usize::from(digest[digest.len().wrapping_sub(1)] & 0x0F);
    u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ])
}
