//! # ton-address
//!
//! Parse, validate and render TON account addresses.
//!
//! Two textual families exist for the same 32-byte account hash:
//!
//! | Family | Shape | Carries |
//! |--------|-------|---------|
//! | Raw | `wc:hash-in-hex` (e.g. `-1:811c…`) | workchain + hash only |
//! | Human-readable | 48-char base64 | tag flags + workchain + hash + CRC16 |
//!
//! Parsing normalizes both into one [`Address`] value that records the
//! presentation flags it was parsed with (bounceable, test-only,
//! user-friendly, URL-safe alphabet), so it can be re-rendered later in
//! any style.
//!
//! ## Example
//!
//! ```
//! use ton_address::{Address, StringFormat};
//!
//! let addr =
//!     Address::parse("-1:811ced271f8f449cb51eb5920090b92cb200b20f07170676e9db6fbe9da516cf")
//!         .unwrap();
//! assert_eq!(addr.workchain(), -1);
//!
//! // Same account, human-readable bounceable URL-safe form:
//! assert_eq!(
//!     addr.to_string_with(StringFormat::default().user_friendly(true)),
//!     "Ef-BHO0nH49EnLUetZIAkLkssgCyDwcXBnbp22--naUWz8VY",
//! );
//!
//! // Quick validity check, never errors:
//! assert!(!Address::is_valid("12345"));
//! ```

pub mod address;
pub mod codec;
pub mod crc16;
pub mod detect;
pub mod error;

// Re-export main API
pub use address::{
    Address, AddressFlags, ParseInput, StringFormat, FLAG_TESTNET, TAG_BOUNCEABLE,
    TAG_NON_BOUNCEABLE,
};
pub use crc16::crc16;
pub use detect::{detect, AddressFormat};
pub use error::AddressError;
