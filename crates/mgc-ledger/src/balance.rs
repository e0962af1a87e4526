//! Per-account balances and the circulating supply

use std::collections::HashMap;

use mgc_types::{Address, Amount, Result, TokenError};
use serde::{Deserialize, Serialize};

/// Per-account unit balances plus the total supply scalar.
///
/// Accounts are implicit: any address can be queried or credited, and an
/// address with no recorded entry holds zero. The total supply tracks the
/// sum of all balances; it moves only through `credit` (up) and `burn`
/// (down), never through `transfer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceLedger {
    balances: HashMap<Address, Amount>,
    total_supply: Amount,
}

impl BalanceLedger {
    /// Create an empty ledger with zero supply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the balance of an account (zero if it never held funds).
    pub fn balance_of(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    /// Get the number of units currently in circulation.
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Credit an account, increasing the total supply by the same amount.
    ///
    /// This is the minting primitive. Returns the new balance.
    pub fn credit(&mut self, account: Address, amount: Amount) -> Amount {
        self.total_supply = self.total_supply.saturating_add(amount);
        self.deposit(account, amount)
    }

    /// Debit an account, leaving the total supply unchanged.
    ///
    /// Returns the new balance.
    /// Fails if the balance would go negative (invariant: no negative
    /// balances); the ledger is untouched in that case.
    pub fn debit(&mut self, account: Address, amount: Amount) -> Result<Amount> {
        let current = self.balance_of(account);
        let remaining = current
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance {
                account,
                available: current,
                required: amount,
            })?;
        self.balances.insert(account, remaining);
        Ok(remaining)
    }

    /// Move units between two accounts.
    ///
    /// This is atomic: if the debit fails, nothing is deposited and the
    /// error passes through unchanged. The total supply never moves here.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<()> {
        self.debit(from, amount)?;
        self.deposit(to, amount);
        Ok(())
    }

    /// Remove units from an account and from circulation.
    ///
    /// Fails if the balance would go negative; on failure neither the
    /// balance nor the supply moves.
    pub fn burn(&mut self, account: Address, amount: Amount) -> Result<()> {
        self.debit(account, amount)?;
        // The debit bounds amount by the balance, and every balance is
        // bounded by the supply, so this cannot underflow.
        self.total_supply = self.total_supply.saturating_sub(amount);
        Ok(())
    }

    /// Iterate all recorded entries (zero-valued entries included).
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    /// Get the number of recorded account entries.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    fn deposit(&mut self, account: Address, amount: Amount) -> Amount {
        let entry = self.balances.entry(account).or_default();
        // Every balance is bounded by the supply, which is itself bounded
        // by the unit width, so the add cannot overflow.
        *entry = entry.saturating_add(amount);
        *entry
    }
}
