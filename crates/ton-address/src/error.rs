//! Error type for address construction, parsing and decoding.

use thiserror::Error;

/// Errors produced while constructing or parsing an [`Address`](crate::Address).
///
/// Every failure is fatal to the call: either a fully valid address is
/// produced or none is. The one advisory condition (a workchain other
/// than 0 or -1) is logged, not raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The hash part must be exactly 32 bytes.
    #[error("address hash part must be 32 bytes, given {0}")]
    InvalidHashLength(usize),

    /// Input matches neither the raw colon form nor the 48-char
    /// human-readable form.
    #[error("invalid address format")]
    InvalidAddressFormat,

    /// Human-readable input is not valid base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The embedded checksum disagrees with the recomputed one.
    #[error("wrong crc16 checksum: expected {expected:02x?}, given {actual:02x?}")]
    ChecksumMismatch { expected: [u8; 2], actual: [u8; 2] },

    /// Tag byte is neither bounceable (0x11) nor non-bounceable (0x51)
    /// after stripping the testnet bit.
    #[error("invalid tag: expected 0x11 or 0x51, given {0:#04x}")]
    InvalidTag(u8),
}
