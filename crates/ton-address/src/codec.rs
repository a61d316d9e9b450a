//! Base64 helpers with URL-safe alphabet support.
//!
//! Encoding uses the standard alphabet and swaps `+`/`/` for `-`/`_` on
//! request. Decoding swaps in the opposite direction first, so either
//! alphabet is accepted on input. Padding (`=`) is never altered.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::AddressError;

/// Encode `data`, optionally substituting the URL-safe alphabet.
pub fn encode(data: &[u8], url_safe: bool) -> String {
    let encoded = STANDARD.encode(data);
    if url_safe {
        encoded.replace('+', "-").replace('/', "_")
    } else {
        encoded
    }
}

/// Decode `text`, accepting either alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>, AddressError> {
    let normalized = text.replace('-', "+").replace('_', "/");
    Ok(STANDARD.decode(normalized)?)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_both_alphabets() {
        let data = decode("cZ+8IP/1L2//+Q==").unwrap();
        assert_eq!(encode(&data, true), "cZ-8IP_1L2__-Q==");
        assert_eq!(encode(&data, false), "cZ+8IP/1L2//+Q==");
    }

    #[test]
    fn test_decode_tolerates_both_alphabets() {
        let standard = decode("cZ+8IP/1L2//+Q==").unwrap();
        let url_safe = decode("cZ-8IP_1L2__-Q==").unwrap();
        assert_eq!(standard, url_safe);
        assert_eq!(standard.len(), 10);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not base64 at all!"),
            Err(AddressError::InvalidBase64(_))
        ));
    }
}
