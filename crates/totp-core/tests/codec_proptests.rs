#![allow(clippy::unwrap_used)]

//! Property-based tests for the Base32/Base64 secret codecs.

use proptest::prelude::*;
use totp_core::{base32_decode, base32_encode, base64_decode, base64_encode};

proptest! {
    /// Base32 decode inverts encode, including for empty input.
    #[test]
    fn base32_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = base32_encode(&bytes);
        prop_assert_eq!(encoded.len() % 8, 0);
        prop_assert!(encoded.bytes().all(|b| matches!(b, b'A'..=b'Z' | b'2'..=b'7' | b'=')));
        prop_assert_eq!(base32_decode(&encoded).unwrap(), bytes);
    }

    /// Decoding ignores case and tolerates stripped padding.
    #[test]
    fn base32_decode_lowercase_unpadded(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let relaxed = base32_encode(&bytes).trim_end_matches('=').to_ascii_lowercase();
        prop_assert_eq!(base32_decode(&relaxed).unwrap(), bytes);
    }

    /// Base64 decode inverts encode.
    #[test]
    fn base64_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = base64_encode(&bytes);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(base64_decode(&encoded).unwrap(), bytes);
    }
}
