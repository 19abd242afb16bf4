//! Decimal password rendering (RFC 4226 §5.3, step 3).

use crate::truncate::extract_31bit;
use crate::OtpError;

/// Minimum digit count allowed by RFC 4226.
pub const MIN_DIGITS: u32 = 6;

/// Digit count used when none is configured.
pub const DEFAULT_DIGITS: u32 = 6;

/// Renders a truncated HMAC value as a fixed-width decimal password.
///
/// The digit count is bound at construction. Values are reduced modulo
/// `10^digits` (not cut from the decimal string) and left-padded with `0`.
/// Anything beyond 9 digits only adds padding, since the extracted value is
/// below `2^31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    digits: u32,
}

impl Renderer {
    /// Create a renderer for `digits`-wide passwords.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidConfiguration` if `digits` is below
    /// [`MIN_DIGITS`].
    pub fn new(digits: u32) -> Result<Self, OtpError> {
        if digits < MIN_DIGITS {
            return Err(OtpError::config(
                "digits",
                format!("must be at least {MIN_DIGITS}, got {digits}"),
            ));
        }
        Ok(Self { digits })
    }

    /// The common 6-digit renderer.
    #[must_use]
    pub const fn six_digits() -> Self {
        Self { digits: 6 }
    }

    /// The 8-digit renderer used by the RFC 6238 test vectors.
    #[must_use]
    pub const fn eight_digits() -> Self {
        Self { digits: 8 }
    }

    /// Number of digits in rendered passwords.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Render an already-extracted 31-bit value.
    #[must_use]
    pub fn render_value(&self, value: u32) -> String {
        // 10^digits overflows u64 past 19 digits; any such modulus exceeds
        // every u32, so the value is left as is.
        let code = 10u64
            .checked_pow(self.digits)
            .and_then(|modulus| u64::from(value).checked_rem(modulus))
            .unwrap_or_else(|| u64::from(value));
        let width = usize::try_from(self.digits).unwrap_or(usize::MAX);
        format!("{code:0>width$}")
    }

    /// Truncate `digest` and render the result.
    ///
    /// # Panics
    ///
    /// Panics if `digest` is shorter than
    /// [`MIN_DIGEST_LEN`](crate::truncate::MIN_DIGEST_LEN).
    #[must_use]
    pub fn render(&self, digest: &[u8]) -> String {
        self.render_value(extract_31bit(digest))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_accepts_six_and_above() {
        for digits in [6, 7, 8, 9, 10, 50] {
            let renderer = Renderer::new(digits).unwrap();
            assert_eq!(renderer.digits(), digits);
        }
    }

    #[test]
    fn constructor_rejects_below_six() {
        for digits in [0, 1, 5] {
            let err = Renderer::new(digits).unwrap_err();
            assert!(
                matches!(
                    err,
                    OtpError::InvalidConfiguration {
                        parameter: "digits",
                        ..
                    }
                ),
                "digits={digits} gave {err:?}"
            );
        }
    }

    #[test]
    fn presets_match_constructor() {
        assert_eq!(Renderer::six_digits(), Renderer::new(6).unwrap());
        assert_eq!(Renderer::eight_digits(), Renderer::new(8).unwrap());
        assert_eq!(Renderer::default(), Renderer::six_digits());
    }

    #[test]
    fn reduces_modulo_not_by_truncating_string() {
        let max = 0x7fff_ffff; // 2147483647
        assert_eq!(Renderer::new(6).unwrap().render_value(max), "483647");
        assert_eq!(Renderer::new(7).unwrap().render_value(max), "7483647");
        assert_eq!(Renderer::new(8).unwrap().render_value(max), "47483647");
        assert_eq!(Renderer::new(9).unwrap().render_value(max), "147483647");
        assert_eq!(Renderer::new(10).unwrap().render_value(max), "2147483647");
    }

    #[test]
    fn pads_with_leading_zeros() {
        assert_eq!(Renderer::six_digits().render_value(0), "000000");
        assert_eq!(Renderer::six_digits().render_value(1), "000001");
        assert_eq!(Renderer::eight_digits().render_value(4096), "00004096");
        assert_eq!(Renderer::new(12).unwrap().render_value(42), "000000000042");
    }

    #[test]
    fn very_wide_renderer_only_pads() {
        let rendered = Renderer::new(50).unwrap().render_value(0x7fff_ffff);
        assert_eq!(rendered.len(), 50);
        assert!(rendered.ends_with("2147483647"));
        assert!(rendered[..40].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn render_digest_fixtures() {
        // (digits, digest, expected)
        let fixtures: [(u32, [u8; 20], &str); 6] = [
            (
                6,
                [
                    0xe2, 0xfd, 0xbb, 0xb7, 0x75, 0xce, 0xf7, 0xaa, 0x91, 0xee, 0xfe, 0x01, 0xea,
                    0x1e, 0x52, 0xae, 0x1c, 0x9c, 0xb2, 0x9a,
                ],
                "054686",
            ),
            (
                8,
                [
                    0x8c, 0x86, 0x7f, 0x32, 0x32, 0x85, 0x0c, 0x6e, 0x64, 0xf7, 0x6c, 0x06, 0x89,
                    0xba, 0x8a, 0xa3, 0x34, 0x4b, 0x7d, 0x03,
                ],
                "42171660",
            ),
            (
                8,
                [
                    0x03, 0x80, 0xde, 0xcd, 0xff, 0x60, 0xdb, 0x19, 0xea, 0x5d, 0x59, 0x75, 0xca,
                    0xf7, 0xa0, 0xef, 0x3b, 0x25, 0xda, 0x53,
                ],
                "08582107",
            ),
            (
                7,
                [
                    0x66, 0x1c, 0x99, 0x76, 0xdd, 0x47, 0x3e, 0xe0, 0x27, 0x76, 0xab, 0x8b, 0xb1,
                    0x3b, 0x8e, 0xe3, 0x0d, 0x95, 0x8d, 0x9f,
                ],
                "1834637",
            ),
            (
                6,
                [
                    0x00, 0x00, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00,
                ],
                "000001",
            ),
            (
                8,
                [
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0x00, 0x00, 0x11, 0x11, 0x0f,
                ],
                "00004369",
            ),
        ];

        for (digits, digest, expected) in fixtures {
            let rendered = Renderer::new(digits).unwrap().render(&digest);
            assert_eq!(rendered, expected, "digits={digits}");
        }
    }
}
