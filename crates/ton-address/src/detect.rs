//! Textual format classification for address inputs.
//!
//! Two families exist on the wire: the raw colon form
//! (`wc:hash-in-hex`, e.g. `-1:811c…`) and the 48-character
//! human-readable base64 form. Classification is char-level, no full
//! decode. The raw shape allows a single decimal digit for the
//! workchain, so workchains outside -9..=9 are unrepresentable in that
//! family; widening it would break round-trips with existing strings.

/// Textual family an input string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// `wc:hash` colon form, no checksum or flags.
    Raw,
    /// 48-char base64 form carrying a tag byte and a CRC16.
    HumanReadable,
}

/// Length of the human-readable text: 36 bytes × 4/3, no padding.
pub const FRIENDLY_LEN: usize = 48;

/// Hex digits in the raw hash part: 32 bytes × 2.
const RAW_HASH_LEN: usize = 64;

/// Classify an input string, or `None` when it matches neither family.
pub fn detect(input: &str) -> Option<AddressFormat> {
    if is_raw_format(input) {
        Some(AddressFormat::Raw)
    } else if input.len() == FRIENDLY_LEN {
        Some(AddressFormat::HumanReadable)
    } else {
        None
    }
}

/// Check the raw shape: optional leading minus, one decimal digit, a
/// colon, then exactly 64 hex digits (either case).
pub fn is_raw_format(input: &str) -> bool {
    let bytes = input.as_bytes();
    let rest = match bytes.first() {
        Some(b'-') => &bytes[1..],
        _ => bytes,
    };
    if rest.len() != 2 + RAW_HASH_LEN {
        return false;
    }
    if !rest[0].is_ascii_digit() || rest[1] != b':' {
        return false;
    }
    rest[2..].iter().all(|b| b.is_ascii_hexdigit())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_HEX: &str = "811ced271f8f449cb51eb5920090b92cb200b20f07170676e9db6fbe9da516cf";

    #[test]
    fn test_detect_raw() {
        assert_eq!(detect(&format!("-1:{HASH_HEX}")), Some(AddressFormat::Raw));
        assert_eq!(detect(&format!("0:{HASH_HEX}")), Some(AddressFormat::Raw));
        assert_eq!(detect(&format!("9:{HASH_HEX}")), Some(AddressFormat::Raw));
    }

    #[test]
    fn test_detect_raw_uppercase_hex() {
        let upper = HASH_HEX.to_uppercase();
        assert_eq!(detect(&format!("-1:{upper}")), Some(AddressFormat::Raw));
    }

    #[test]
    fn test_detect_human_readable() {
        assert_eq!(
            detect("Ef-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz8VY"),
            Some(AddressFormat::HumanReadable)
        );
    }

    #[test]
    fn test_multi_digit_workchain_rejected() {
        // One decimal digit only; -10 is not representable in raw form.
        assert_eq!(detect(&format!("-10:{HASH_HEX}")), None);
        assert_eq!(detect(&format!("10:{HASH_HEX}")), None);
    }

    #[test]
    fn test_detect_neither() {
        assert_eq!(detect(""), None);
        assert_eq!(detect("12345"), None);
        // Hash part one hex digit short
        assert_eq!(detect(&format!("-1:{}", &HASH_HEX[..63])), None);
        // Non-hex character in the hash part
        assert_eq!(detect(&format!("-1:{}g", &HASH_HEX[..63])), None);
        // 49 chars: one longer than the friendly form
        assert_eq!(detect("EEf-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz000"), None);
    }
}
