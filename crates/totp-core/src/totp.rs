//! RFC 6238 TOTP and RFC 4226 HOTP engine.
//!
//! Provides standards-compliant one-time password generation and
//! window-tolerant verification using `ring::hmac` for HMAC-SHA1,
//! HMAC-SHA256, and HMAC-SHA512.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use ring::hmac;
use serde::{Deserialize, Serialize};

use crate::config::TotpConfig;
use crate::render::Renderer;
use crate::secret::Secret;
use crate::OtpError;

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// The early return on length mismatch only reveals the digit count, which
/// is public configuration. The code value itself is compared without
/// data-dependent branches.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ── Constants ───────────────────────────────────────────────────────

/// Default time step in seconds (RFC 6238 §4).
pub const DEFAULT_INTERVAL: u64 = 30;

const DEFAULT_STEP: NonZeroU64 = match NonZeroU64::new(DEFAULT_INTERVAL) {
    Some(step) => step,
    None => panic!("DEFAULT_INTERVAL must be non-zero"),
};

/// Default reference timestamp T0 (the Unix epoch).
pub const DEFAULT_REFERENCE_TIMESTAMP: u64 = 0;

/// Largest verification window RFC 6238 §5.2 recommends: the current step
/// plus the one before it.
pub const RECOMMENDED_MAX_WINDOW: u32 = 1;

// ── Types ───────────────────────────────────────────────────────────

/// HMAC algorithm used for OTP generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OtpAlgorithm {
    /// HMAC-SHA1 (default for most authenticator apps).
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl OtpAlgorithm {
    /// Map to the corresponding `ring::hmac::Algorithm`.
    fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }

    /// Length in bytes of the HMAC digest this algorithm produces.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Canonical upper-case name (`SHA1`, `SHA256`, `SHA512`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for OtpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OtpAlgorithm {
    type Err = OtpError;

    /// Parse `SHA1`/`SHA-1`, `SHA256`/`SHA-256` or `SHA512`/`SHA-512`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            "SHA512" => Ok(Self::Sha512),
            _ => Err(OtpError::config(
                "algorithm",
                format!("unsupported hash algorithm {s:?} (expected SHA1, SHA256 or SHA512)"),
            )),
        }
    }
}

// ── HOTP (RFC 4226) ────────────────────────────────────────────────

/// HMAC(K, C) with C as 8-byte big-endian (RFC 4226 §5.2), then truncate
/// and render.
fn hotp_unchecked(
    secret: &[u8],
    counter: u64,
    algorithm: OtpAlgorithm,
    renderer: &Renderer,
) -> String {
    let key = hmac::Key::new(algorithm.to_ring_algorithm(), secret);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    renderer.render(tag.as_ref())
}

/// Generate an HOTP code per RFC 4226.
///
/// # Arguments
/// - `secret`: Shared secret key bytes (from [`Secret::expose`])
/// - `counter`: Moving factor, serialized as 8 bytes big-endian
/// - `algorithm`: HMAC algorithm to use
/// - `renderer`: Output width
///
/// # Errors
/// Returns `OtpError::InvalidConfiguration` if the secret is empty.
#[must_use = "OTP code should be used or stored"]
pub fn generate_hotp(
    secret: &[u8],
    counter: u64,
    algorithm: OtpAlgorithm,
    renderer: &Renderer,
) -> Result<String, OtpError> {
    if secret.is_empty() {
        return Err(OtpError::config("secret", "must not be empty"));
    }
    Ok(hotp_unchecked(secret, counter, algorithm, renderer))
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// A configured TOTP engine.
///
/// Immutable after construction: every operation is a pure function of the
/// configuration and the timestamp (or counter) passed in, so one engine can
/// be shared across threads without locking.
///
/// Verification does not remember which counters were accepted. Callers that
/// need replay protection must track the last accepted counter themselves.
pub struct Totp {
    secret: Secret,
    algorithm: OtpAlgorithm,
    interval: NonZeroU64,
    reference_timestamp: u64,
    renderer: Renderer,
    max_window: Option<u32>,
}

impl Totp {
    /// Build an engine from a secret and a configuration.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidConfiguration` if the interval is 0 or the
    /// digit count is below 6.
    pub fn new(secret: Secret, config: &TotpConfig) -> Result<Self, OtpError> {
        config.validate()?;
        let interval = NonZeroU64::new(config.interval)
            .ok_or_else(|| OtpError::config("interval", "must be at least 1 second"))?;
        let renderer = Renderer::new(config.digits)?;

        if config
            .max_window
            .is_some_and(|max| max > RECOMMENDED_MAX_WINDOW)
        {
            tracing::warn!(
                max_window = ?config.max_window,
                recommended = RECOMMENDED_MAX_WINDOW,
                "verification window cap exceeds the recommended maximum"
            );
        }
        tracing::debug!(
            algorithm = %config.algorithm,
            interval = config.interval,
            reference_timestamp = config.reference_timestamp,
            digits = config.digits,
            "TOTP engine configured"
        );

        Ok(Self {
            secret,
            algorithm: config.algorithm,
            interval,
            reference_timestamp: config.reference_timestamp,
            renderer,
            max_window: config.max_window,
        })
    }

    /// Build an engine with RFC 6238 defaults: SHA1, 30 s, T0 = 0, 6 digits.
    #[must_use]
    pub fn with_defaults(secret: Secret) -> Self {
        Self {
            secret,
            algorithm: OtpAlgorithm::default(),
            interval: DEFAULT_STEP,
            reference_timestamp: DEFAULT_REFERENCE_TIMESTAMP,
            renderer: Renderer::default(),
            max_window: None,
        }
    }

    /// The configured HMAC algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> OtpAlgorithm {
        self.algorithm
    }

    /// The time step in seconds.
    #[must_use]
    pub const fn interval(&self) -> u64 {
        self.interval.get()
    }

    /// The reference timestamp T0.
    #[must_use]
    pub const fn reference_timestamp(&self) -> u64 {
        self.reference_timestamp
    }

    /// Number of digits in generated passwords.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        self.renderer.digits()
    }

    /// The configured cap on verification windows, if any.
    #[must_use]
    pub const fn max_window(&self) -> Option<u32> {
        self.max_window
    }

    /// Counter for timestamp `at`: `floor((at - T0) / interval)`.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidTime` if `at` precedes the reference timestamp.
    pub fn counter(&self, at: u64) -> Result<u64, OtpError> {
        let elapsed = at.checked_sub(self.reference_timestamp).ok_or_else(|| {
            OtpError::InvalidTime(format!(
                "timestamp {at} precedes reference timestamp {}",
                self.reference_timestamp
            ))
        })?;
        // interval is non-zero by construction.
        #[allow(clippy::arithmetic_side_effects)]
        let counter = elapsed / self.interval;
        Ok(counter)
    }

    /// HOTP password for an explicit counter, with this engine's secret,
    /// algorithm and digit count.
    #[must_use = "OTP code should be used or stored"]
    pub fn hotp(&self, counter: u64) -> String {
        hotp_unchecked(
            self.secret.expose(),
            counter,
            self.algorithm,
            &self.renderer,
        )
    }

    /// Password valid at timestamp `at`.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidTime` if `at` precedes the reference timestamp.
    #[must_use = "OTP code should be used or stored"]
    pub fn password(&self, at: u64) -> Result<String, OtpError> {
        Ok(self.hotp(self.counter(at)?))
    }

    /// Verify `candidate` against the password at `at` and the `window`
    /// steps before it.
    ///
    /// A window of 0 accepts only the current step; 1 also accepts the
    /// immediately preceding step. Keep it at 0 or 1: every extra step is
    /// another live password an attacker may replay or guess. Steps before
    /// counter 0 do not exist and are not checked.
    ///
    /// Every step in the window is computed and compared in constant time,
    /// so timing reveals neither where a mismatch occurs nor which step
    /// matched.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidTime` if `at` precedes the reference
    /// timestamp, or `OtpError::InvalidConfiguration` if `window` exceeds the
    /// configured `max_window`.
    #[must_use = "verification result should be checked"]
    pub fn verify(&self, candidate: &str, at: u64, window: u32) -> Result<bool, OtpError> {
        if let Some(max) = self.max_window {
            if window > max {
                return Err(OtpError::config(
                    "window",
                    format!("{window} exceeds the configured maximum of {max}"),
                ));
            }
        }

        let counter = self.counter(at)?;
        let start = counter.saturating_sub(u64::from(window));

        let mut matched = false;
        for step in start..=counter {
            let expected = self.hotp(step);
            matched |= constant_time_eq(expected.as_bytes(), candidate.as_bytes());
        }

        tracing::debug!(counter, window, matched, "TOTP verification");
        Ok(matched)
    }

    /// Counter for the current system time.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidTime` if the clock reads before T0.
    pub fn counter_now(&self) -> Result<u64, OtpError> {
        self.counter(unix_now()?)
    }

    /// Password for the current system time.
    ///
    /// # Errors
    /// Returns `OtpError::InvalidTime` if the clock reads before T0.
    #[must_use = "OTP code should be used or stored"]
    pub fn password_now(&self) -> Result<String, OtpError> {
        self.password(unix_now()?)
    }

    /// [`verify`](Self::verify) at the current system time.
    ///
    /// # Errors
    /// As for [`verify`](Self::verify).
    #[must_use = "verification result should be checked"]
    pub fn verify_now(&self, candidate: &str, window: u32) -> Result<bool, OtpError> {
        self.verify(candidate, unix_now()?, window)
    }
}

impl fmt::Debug for Totp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Totp")
            .field("secret", &self.secret)
            .field("algorithm", &self.algorithm)
            .field("interval", &self.interval)
            .field("reference_timestamp", &self.reference_timestamp)
            .field("digits", &self.renderer.digits())
            .field("max_window", &self.max_window)
            .finish()
    }
}

/// Seconds since the Unix epoch according to the system clock.
fn unix_now() -> Result<u64, OtpError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|_| OtpError::InvalidTime("system clock is before the Unix epoch".to_owned()))
}

// ── Tests ───────────────────────────────────────────────────────────
