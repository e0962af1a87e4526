//! Account addresses for the MGC ledger
//!
//! Accounts are opaque fixed-width byte handles. The ledger never
//! interprets them; it only compares them for equality and uses them as
//! map keys. The all-zero address is the reserved void account: it is the
//! notional destination of burned units and can never legitimately hold
//! or receive funds.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Errors from parsing an address out of its hex form.
///
/// `PartialEq` only: the wrapped hex error does not implement `Eq`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressParseError {
    /// The decoded byte string had the wrong width.
    #[error("address must be 20 bytes, got {0}")]
    BadLength(usize),

    /// The input was not valid hex.
    #[error("invalid hex in address: {0}")]
    BadHex(#[from] hex::FromHexError),
}

/// Opaque account handle: a fixed-width 20-byte identifier.
///
/// Addresses are cheap to copy and hash, and order lexicographically by
/// their bytes. Their canonical text form is lowercase `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// The reserved void account (all zero bytes).
    ///
    /// Transfers may never target it; burns notionally send units to it.
    pub const VOID: Address = Address([0u8; ADDRESS_LEN]);

    /// Create from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Whether this is the reserved void account.
    pub fn is_void(&self) -> bool {
        *self == Self::VOID
    }

    /// Get the inner bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Parse from hex (with or without a `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(s)?;
        if decoded.len() != ADDRESS_LEN {
            return Err(AddressParseError::BadLength(decoded.len()));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Convert to the canonical lowercase `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Addresses serialize as their hex string form so they stay readable in
// logs and snapshots and can key JSON maps.
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AddressVisitor;

        impl Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 20-byte hex address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Address, E>
            where
                E: de::Error,
            {
                Address::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
