//! MAC address token
//!
//! A MAC address is handled as a normalized string token, never as a parsed
//! binary value. Normalization strips `:` separators and upper-cases; a token
//! is valid when it is exactly 12 hexadecimal digits.
//!
//! # Examples
//!
//! ```
//! use macsep::core::models::MacAddress;
//!
//! let a = MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap();
//! let b = MacAddress::parse("AABBCCDDEEFF").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "AABBCCDDEEFF");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex digits in a normalized MAC address
pub const MAC_LEN: usize = 12;

/// Errors that can occur when parsing a MAC address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    /// Nothing left after trimming and stripping separators
    #[error("empty MAC address")]
    Empty,

    /// Wrong number of characters after stripping separators
    #[error("invalid MAC length ({len} characters): {value}")]
    InvalidLength {
        /// The normalized value
        value: String,
        /// Its length in characters
        len: usize,
    },

    /// Contains something other than hex digits
    #[error("invalid MAC characters: {value}")]
    InvalidCharacter {
        /// The normalized value
        value: String,
    },
}

/// A validated, normalized MAC address (`^[A-F0-9]{12}$`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalize and validate a candidate token
    pub fn parse(raw: &str) -> Result<Self, MacError> {
        let value = normalize(raw.trim());
        validate(&value)?;
        Ok(Self(value))
    }

    /// The 12-character uppercase hex form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip `:` separators and upper-case.
///
/// Whitespace inside the token is preserved so malformed input stays invalid.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.replace(':', "").to_uppercase()
}

/// Check the `^[A-F0-9]{12}$` predicate on an already-normalized token
#[must_use]
pub fn is_valid(normalized: &str) -> bool {
    validate(normalized).is_ok()
}

fn validate(value: &str) -> Result<(), MacError> {
    if value.is_empty() {
        return Err(MacError::Empty);
    }
    let len = value.chars().count();
    if len != MAC_LEN {
        return Err(MacError::InvalidLength {
            value: value.to_string(),
            len,
        });
    }
    if !value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return Err(MacError::InvalidCharacter {
            value: value.to_string(),
        });
    }
    Ok(())
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = MacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
