//! MGC Types - Canonical domain types for the MGC asset ledger
//!
//! This crate contains the foundational types for the MGC fixed-supply
//! fungible asset, with zero dependencies on other mgc crates:
//!
//! - Account addresses (opaque 20-byte handles, with a reserved void account)
//! - Amounts of indivisible asset units (unsigned, checked arithmetic)
//! - Notification events emitted by successful operations
//! - Error types shared by every ledger operation
//!
//! # Architectural Invariants
//!
//! These types support the core accounting invariants:
//!
//! 1. Balances and allowances are unsigned and can never go negative
//! 2. Supply only moves at construction (up) and on burn (down)
//! 3. Failed operations leave no partial state behind
//! 4. The void account can never be a legitimate holder

pub mod address;
pub mod amount;
pub mod error;
pub mod event;

pub use address::*;
pub use amount::*;
pub use error::*;
pub use event::*;

/// Version of the MGC types schema
pub const TYPES_VERSION: &str = "0.1.0";
