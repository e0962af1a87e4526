//! Error types for MGC ledger operations
//!
//! Every operation is all-or-nothing: when one of these errors comes
//! back, no balance, allowance, supply, or notification state changed.

use crate::{Address, Amount};
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors raised by the MGC accounting engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The debited account holds fewer units than the operation needs.
    #[error("insufficient balance: account {account} has {available}, needs {required}")]
    InsufficientBalance {
        account: Address,
        available: Amount,
        required: Amount,
    },

    /// The spender's remaining allowance from the owner is too small.
    #[error(
        "insufficient allowance: {spender} may spend {available} of {owner}'s funds, needs {required}"
    )]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        available: Amount,
        required: Amount,
    },

    /// Transfers may not target the void account.
    #[error("invalid recipient: the void account cannot receive transfers")]
    InvalidRecipient,
}
