//! Delegated spending allowances

use std::collections::HashMap;

use mgc_types::{Address, Amount, Result, TokenError};
use serde::{Deserialize, Serialize};

/// Spending limits granted by account owners to delegate spenders.
///
/// Keyed by owner, then spender; an absent pair means zero. An allowance
/// only bounds delegated transfers. It is not reserved out of the owner's
/// balance, and the owner's own transfers never consult it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllowanceRegistry {
    allowances: HashMap<Address, HashMap<Address, Amount>>,
}

impl AllowanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the allowance `owner` has granted to `spender` (zero if never
    /// set).
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&owner)
            .and_then(|per_spender| per_spender.get(&spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Set the allowance to `amount`, overwriting any previous value.
    ///
    /// Not additive, and independent of the owner's balance. Returns the
    /// stored value.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Amount {
        self.set(owner, spender, amount)
    }

    /// Raise the allowance by `delta`, saturating at the unit width.
    ///
    /// Returns the new allowance.
    pub fn increase(&mut self, owner: Address, spender: Address, delta: Amount) -> Amount {
        let next = self.allowance(owner, spender).saturating_add(delta);
        self.set(owner, spender, next)
    }

    /// Lower the allowance by `delta`, flooring at zero when `delta`
    /// exceeds the current value.
    ///
    /// Never fails. Returns the new allowance.
    pub fn decrease(&mut self, owner: Address, spender: Address, delta: Amount) -> Amount {
        let next = self.allowance(owner, spender).saturating_sub(delta);
        self.set(owner, spender, next)
    }

    /// Consume part of an allowance for a delegated transfer.
    ///
    /// Returns the remaining allowance.
    /// Fails if the allowance would go negative; the registry is untouched
    /// in that case.
    pub fn spend(&mut self, owner: Address, spender: Address, amount: Amount) -> Result<Amount> {
        let current = self.allowance(owner, spender);
        let remaining = current
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance {
                owner,
                spender,
                available: current,
                required: amount,
            })?;
        self.set(owner, spender, remaining);
        Ok(remaining)
    }

    /// Restore a previously spent amount.
    ///
    /// Used to roll a `spend` back when the paired balance move fails, so
    /// the failed operation leaves no partial state behind.
    pub fn refund(&mut self, owner: Address, spender: Address, amount: Amount) {
        let next = self.allowance(owner, spender).saturating_add(amount);
        self.set(owner, spender, next);
    }

    fn set(&mut self, owner: Address, spender: Address, amount: Amount) -> Amount {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    #[test]
    fn test_unset_allowance_is_zero() {
        let registry = AllowanceRegistry::new();
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::ZERO);
    }

    #[test]
    fn test_approve_overwrites() {
        let mut registry = AllowanceRegistry::new();

        registry.approve(addr(1), addr(2), Amount::new(100));
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::new(100));

        // A second approval replaces the first, it does not add to it
        registry.approve(addr(1), addr(2), Amount::new(30));
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::new(30));
    }

    #[test]
    fn test_allowances_are_directional() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(100));

        assert_eq!(registry.allowance(addr(2), addr(1)), Amount::ZERO);
    }

    #[test]
    fn test_increase_is_additive() {
        let mut registry = AllowanceRegistry::new();

        assert_eq!(
            registry.increase(addr(1), addr(2), Amount::new(40)),
            Amount::new(40)
        );
        assert_eq!(
            registry.increase(addr(1), addr(2), Amount::new(2)),
            Amount::new(42)
        );
    }

    #[test]
    fn test_decrease_floors_at_zero() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(10));

        let remaining = registry.decrease(addr(1), addr(2), Amount::new(25));
        assert_eq!(remaining, Amount::ZERO);
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::ZERO);
    }

    #[test]
    fn test_partial_decrease_leaves_remainder() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(101));

        let remaining = registry.decrease(addr(1), addr(2), Amount::new(100));
        assert_eq!(remaining, Amount::new(1));
    }

    #[test]
    fn test_spend_consumes_the_allowance() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(100));

        let remaining = registry.spend(addr(1), addr(2), Amount::new(60)).unwrap();
        assert_eq!(remaining, Amount::new(40));
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::new(40));
    }

    #[test]
    fn test_overspend_fails_and_mutates_nothing() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(50));

        let result = registry.spend(addr(1), addr(2), Amount::new(51));
        assert_eq!(
            result,
            Err(TokenError::InsufficientAllowance {
                owner: addr(1),
                spender: addr(2),
                available: Amount::new(50),
                required: Amount::new(51),
            })
        );
        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::new(50));
    }

    #[test]
    fn test_refund_restores_a_spend() {
        let mut registry = AllowanceRegistry::new();
        registry.approve(addr(1), addr(2), Amount::new(100));

        registry.spend(addr(1), addr(2), Amount::new(100)).unwrap();
        registry.refund(addr(1), addr(2), Amount::new(100));

        assert_eq!(registry.allowance(addr(1), addr(2)), Amount::new(100));
    }
}
