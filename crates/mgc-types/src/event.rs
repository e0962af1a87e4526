//! Notification events emitted by the MGC engine
//!
//! Every successful mutating operation appends one or more events to the
//! engine's log. The log is append-only and ordered: observers replaying
//! it see operations in the exact order they executed. Failed operations
//! emit nothing.

use crate::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An externally observable record of a committed state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenEvent {
    /// Units moved between accounts (or to the void account on a burn).
    Transfer {
        from: Address,
        to: Address,
        value: Amount,
    },

    /// A spending allowance was set; `value` is the new stored allowance.
    Approval {
        owner: Address,
        spender: Address,
        value: Amount,
    },

    /// Units were permanently removed from circulation.
    Burn { burner: Address, value: Amount },
}

impl fmt::Display for TokenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer { from, to, value } => {
                write!(f, "Transfer({} -> {}, {})", from, to, value)
            }
            Self::Approval {
                owner,
                spender,
                value,
            } => write!(f, "Approval({} -> {}, {})", owner, spender, value),
            Self::Burn { burner, value } => write!(f, "Burn({}, {})", burner, value),
        }
    }
}
