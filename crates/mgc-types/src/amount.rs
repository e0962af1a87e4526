//! Amounts of indivisible asset units
//!
//! All accounting is done in the smallest indivisible unit, using u128 so
//! the canonical supply of 10^27 units fits with room to spare. Amounts
//! are unsigned: balances and allowances can never go negative, and every
//! subtraction is checked.
//!
//! Amounts cross the JSON boundary as decimal strings because u128 values
//! exceed what JSON numbers can carry losslessly.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;

/// An unsigned quantity of indivisible asset units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(pub u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create from a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction; `None` when `other` exceeds `self`.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Saturating addition, clamping at the unit width.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction, flooring at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Scale a whole-token count into indivisible units.
    ///
    /// `from_whole(5, 18)` is five whole tokens at 18-decimal precision.
    /// `None` when the scaled value overflows the unit width.
    pub fn from_whole(whole: u128, decimals: u8) -> Option<Self> {
        10u128
            .checked_pow(decimals as u32)
            .and_then(|scale| whole.checked_mul(scale))
            .map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc.saturating_add(a))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or unsigned integer of asset units")
            }

            fn visit_str<E>(self, v: &str) -> Result<Amount, E>
            where
                E: de::Error,
            {
                v.parse::<u128>().map(Amount).map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Amount, E>
            where
                E: de::Error,
            {
                Ok(Amount(v as u128))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
