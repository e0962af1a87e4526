//! MGC Ledger - Balance and allowance state for the MGC asset
//!
//! The ledger is:
//! - Single-asset (one fungible token, fixed at construction)
//! - Account-keyed by Address
//! - Implicit-account (any address holds a balance; absent means zero)
//! - Strictly serial (the host executes one operation at a time, so all
//!   state is plain and mutated through `&mut self`)
//!
//! # Invariants
//!
//! 1. No negative balances or allowances (unsigned, checked subtraction)
//! 2. The sum of all balances equals the recorded total supply
//! 3. Failed operations mutate nothing
//! 4. A zero-valued entry is indistinguishable from an absent one

pub mod allowance;
pub mod balance;

pub use allowance::AllowanceRegistry;
pub use balance::BalanceLedger;
