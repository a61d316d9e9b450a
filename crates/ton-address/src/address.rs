//! The [`Address`] value type: construction, parsing and serialization.
//!
//! Packed layout of the human-readable form (36 bytes before base64):
//!
//! ```text
//! [ tag (1) ][ workchain (1, signed) ][ hash (32) ][ crc16 (2, BE) ]
//! ```
//!
//! - **tag**: 0x11 = bounceable, 0x51 = non-bounceable; bit 0x80 marks
//!   a test-network address
//! - **crc16**: checksum of the first 34 bytes

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::crc16::crc16;
use crate::detect::{detect, AddressFormat};
use crate::error::AddressError;

/// Tag byte of a bounceable address.
pub const TAG_BOUNCEABLE: u8 = 0x11;
/// Tag byte of a non-bounceable address.
pub const TAG_NON_BOUNCEABLE: u8 = 0x51;
/// Tag bit marking a test-network address.
pub const FLAG_TESTNET: u8 = 0x80;

/// Packed size of the human-readable form before base64 encoding.
const PACKED_LEN: usize = 36;
/// Bytes covered by the checksum: tag + workchain + hash.
const CHECKSUMMED_LEN: usize = 34;

// ============================================================================
// PRESENTATION FLAGS
// ============================================================================

/// Presentation defaults stored on an [`Address`].
///
/// These record how the value was parsed (or how it should render by
/// default); each is independently overridable per render call via
/// [`StringFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressFlags {
    /// Address is marked for a test network.
    pub test_only: bool,
    /// A failed transfer to this address bounces back to the sender.
    pub bounceable: bool,
    /// Renders as the human-readable base64 family by default.
    pub user_friendly: bool,
    /// Uses the URL-safe base64 alphabet by default.
    pub url_safe: bool,
}

impl Default for AddressFlags {
    fn default() -> Self {
        Self {
            test_only: false,
            bounceable: true,
            user_friendly: true,
            url_safe: true,
        }
    }
}

/// Per-call overrides for [`Address::to_string_with`].
///
/// Each `None` field resolves to the address's stored flag.
///
/// # Example
///
/// ```
/// use ton_address::StringFormat;
///
/// let fmt = StringFormat::default().user_friendly(true).bounceable(false);
/// assert_eq!(fmt.bounceable, Some(false));
/// assert_eq!(fmt.test_only, None); // falls back to the stored flag
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringFormat {
    pub user_friendly: Option<bool>,
    pub url_safe: Option<bool>,
    pub bounceable: Option<bool>,
    pub test_only: Option<bool>,
}

impl StringFormat {
    pub fn user_friendly(mut self, value: bool) -> Self {
        self.user_friendly = Some(value);
        self
    }

    pub fn url_safe(mut self, value: bool) -> Self {
        self.url_safe = Some(value);
        self
    }

    pub fn bounceable(mut self, value: bool) -> Self {
        self.bounceable = Some(value);
        self
    }

    pub fn test_only(mut self, value: bool) -> Self {
        self.test_only = Some(value);
        self
    }
}

// ============================================================================
// PARSE INPUT
// ============================================================================

/// Input accepted by [`Address::parse`]: text in either family, or an
/// existing address (which yields a structural copy).
#[derive(Debug, Clone, Copy)]
pub enum ParseInput<'a> {
    Text(&'a str),
    Address(&'a Address),
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(text: &'a str) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(text: &'a String) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a Address> for ParseInput<'a> {
    fn from(address: &'a Address) -> Self {
        ParseInput::Address(address)
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

/// A TON account address with its presentation defaults.
///
/// Immutable once constructed; every rendering derives from the stored
/// workchain, 32-byte hash and [`AddressFlags`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    workchain: i32,
    hash: [u8; 32],
    flags: AddressFlags,
}

impl Address {
    /// Construct with default presentation flags.
    ///
    /// Fails when `hash` is not exactly 32 bytes.
    pub fn new(workchain: i32, hash: &[u8]) -> Result<Self, AddressError> {
        Self::with_flags(workchain, hash, AddressFlags::default())
    }

    /// Construct with explicit presentation flags.
    ///
    /// Fails when `hash` is not exactly 32 bytes. A workchain other
    /// than 0 or -1 is stored as given but logged at WARN level.
    pub fn with_flags(
        workchain: i32,
        hash: &[u8],
        flags: AddressFlags,
    ) -> Result<Self, AddressError> {
        let hash: [u8; 32] = hash
            .try_into()
            .map_err(|_| AddressError::InvalidHashLength(hash.len()))?;

        if workchain != 0 && workchain != -1 {
            tracing::warn!(workchain, "workchain should be 0 or -1");
        }

        Ok(Self {
            workchain,
            hash,
            flags,
        })
    }

    /// Workchain the account belongs to (0 = basic, -1 = masterchain).
    pub fn workchain(&self) -> i32 {
        self.workchain
    }

    /// Account hash within the workchain.
    pub fn hash(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Stored presentation defaults.
    pub fn flags(&self) -> AddressFlags {
        self.flags
    }

    pub fn is_test_only(&self) -> bool {
        self.flags.test_only
    }

    pub fn is_bounceable(&self) -> bool {
        self.flags.bounceable
    }

    pub fn is_user_friendly(&self) -> bool {
        self.flags.user_friendly
    }

    pub fn is_url_safe(&self) -> bool {
        self.flags.url_safe
    }

    // ------------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------------

    /// Parse text in either family, or copy an existing address.
    ///
    /// Raw inputs (`wc:hex`) produce `user_friendly = false` with the
    /// other flags at their defaults. Human-readable inputs derive all
    /// four flags from the tag byte and the alphabet actually used.
    pub fn parse<'a>(input: impl Into<ParseInput<'a>>) -> Result<Self, AddressError> {
        match input.into() {
            ParseInput::Address(address) => Ok(address.clone()),
            ParseInput::Text(text) => match detect(text) {
                Some(AddressFormat::Raw) => Self::parse_raw(text),
                Some(AddressFormat::HumanReadable) => Self::parse_human_readable(text),
                None => Err(AddressError::InvalidAddressFormat),
            },
        }
    }

    /// True iff `input` parses as an address. Never propagates errors.
    pub fn is_valid<'a>(input: impl Into<ParseInput<'a>>) -> bool {
        Self::parse(input).is_ok()
    }

    fn parse_raw(text: &str) -> Result<Self, AddressError> {
        // detect() has verified the shape: -?D:<64 hex chars>
        let (wc_part, hash_part) = text
            .split_once(':')
            .ok_or(AddressError::InvalidAddressFormat)?;
        let workchain: i32 = wc_part
            .parse()
            .map_err(|_| AddressError::InvalidAddressFormat)?;
        let hash = hex::decode(hash_part).map_err(|_| AddressError::InvalidAddressFormat)?;

        Self::with_flags(
            workchain,
            &hash,
            AddressFlags {
                user_friendly: false,
                ..AddressFlags::default()
            },
        )
    }

    fn parse_human_readable(text: &str) -> Result<Self, AddressError> {
        let bytes = codec::decode(text)?;
        if bytes.len() != PACKED_LEN {
            return Err(AddressError::InvalidAddressFormat);
        }

        let mut tag = bytes[0];
        let workchain = bytes[1] as i8 as i32;
        let hash = &bytes[2..CHECKSUMMED_LEN];
        let actual = [bytes[34], bytes[35]];

        let expected = crc16(&bytes[..CHECKSUMMED_LEN]);
        if expected != actual {
            return Err(AddressError::ChecksumMismatch { expected, actual });
        }

        let url_safe = !text.contains('+') && !text.contains('/');
        let mut test_only = false;

        if tag & FLAG_TESTNET != 0 {
            test_only = true;
            // The tag stays an unsigned byte here; no sign extension.
            tag &= !FLAG_TESTNET;
        }

        if tag != TAG_BOUNCEABLE && tag != TAG_NON_BOUNCEABLE {
            return Err(AddressError::InvalidTag(tag));
        }

        Self::with_flags(
            workchain,
            hash,
            AddressFlags {
                test_only,
                bounceable: tag == TAG_BOUNCEABLE,
                user_friendly: true,
                url_safe,
            },
        )
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    /// Render with per-call overrides; `None` fields fall back to the
    /// stored flags.
    pub fn to_string_with(&self, format: StringFormat) -> String {
        let user_friendly = format.user_friendly.unwrap_or(self.flags.user_friendly);
        let url_safe = format.url_safe.unwrap_or(self.flags.url_safe);
        let bounceable = format.bounceable.unwrap_or(self.flags.bounceable);
        let test_only = format.test_only.unwrap_or(self.flags.test_only);

        if !user_friendly {
            return format!("{}:{}", self.workchain, hex::encode(self.hash));
        }

        let mut tag = if bounceable {
            TAG_BOUNCEABLE
        } else {
            TAG_NON_BOUNCEABLE
        };
        if test_only {
            tag |= FLAG_TESTNET;
        }

        let mut packed = [0u8; PACKED_LEN];
        packed[0] = tag;
        packed[1] = self.workchain as u8; // low byte, matches the signed pack
        packed[2..CHECKSUMMED_LEN].copy_from_slice(&self.hash);
        let checksum = crc16(&packed[..CHECKSUMMED_LEN]);
        packed[CHECKSUMMED_LEN..].copy_from_slice(&checksum);

        codec::encode(&packed, url_safe)
    }

    /// Canonical display form: human-readable, bounceable, URL-safe,
    /// non-test — independent of the stored flags.
    pub fn to_canonical_string(&self) -> String {
        self.to_string_with(
            StringFormat::default()
                .user_friendly(true)
                .url_safe(true)
                .bounceable(true)
                .test_only(false),
        )
    }
}

impl fmt::Display for Address {
    /// Renders with the stored presentation flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(StringFormat::default()))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================
