//! MGC Token - Fixed-supply fungible asset engine
//!
//! This crate implements the Myanmar Gold Coin accounting engine. The
//! engine owns the complete state of one fungible asset:
//!
//! - Per-account balances and the total supply (`mgc_ledger::BalanceLedger`)
//! - Delegated spending allowances (`mgc_ledger::AllowanceRegistry`)
//! - Immutable metadata fixed at construction (`TokenConfig`)
//! - The append-only notification log (`mgc_types::TokenEvent`)
//!
//! Transfers and approvals live in `transfer`, supply reduction in
//! `supply`; both extend [`Token`].
//!
//! # Invariants
//!
//! 1. The sum of all balances equals the total supply at every operation
//!    boundary
//! 2. Operations are all-or-nothing: a failed operation changes nothing,
//!    including the notification log
//! 3. Supply moves only at construction (up) and at burn (down); there
//!    is no public mint
//! 4. The void account never holds or receives funds
//!
//! The hosting environment executes operations strictly one at a time, so
//! the engine holds plain state and mutates it through `&mut self`. There
//! is no interior locking and no partially applied operation to observe.

mod supply;
mod transfer;

use mgc_ledger::{AllowanceRegistry, BalanceLedger};
use serde::{Deserialize, Serialize};
use tracing::info;

pub use mgc_types::{Address, Amount, Result, TokenError, TokenEvent};

/// Configuration for the token, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Human-readable name
    pub name: String,
    /// Symbol (e.g., "MGC")
    pub symbol: String,
    /// Decimals (for display, internally we use smallest units)
    pub decimals: u8,
    /// Units credited to the initial holder at construction
    pub initial_supply: Amount,
}

impl TokenConfig {
    /// The canonical Myanmar Gold Coin deployment: one billion whole
    /// tokens at 18-decimal precision.
    pub fn myanmar_gold() -> Self {
        Self {
            name: "MyanmarGoldToken".to_string(),
            symbol: "MGC".to_string(),
            decimals: 18,
            initial_supply: Amount::new(1_000_000_000 * 10u128.pow(18)), // 10^9 whole tokens
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::myanmar_gold()
    }
}

/// The MGC accounting engine
///
/// One state object owning balances, allowances, metadata, and the
/// notification log. The supply is fixed at construction and can only
/// ever shrink, through `burn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    config: TokenConfig,
    balances: BalanceLedger,
    allowances: AllowanceRegistry,
    events: Vec<TokenEvent>,
}

impl Token {
    /// Create the token and credit the entire initial supply to
    /// `initial_holder`.
    ///
    /// This is the only mint that will ever happen; no event records it,
    /// since there are no observers before construction completes.
    /// Fails if `initial_holder` is the void account (invariant: the void
    /// account never holds funds).
    pub fn new(config: TokenConfig, initial_holder: Address) -> Result<Self> {
        if initial_holder.is_void() {
            return Err(TokenError::InvalidRecipient);
        }

        let mut balances = BalanceLedger::new();
        balances.credit(initial_holder, config.initial_supply);
        info!(
            "Token created: {} {} minted to {}",
            config.initial_supply, config.symbol, initial_holder
        );

        Ok(Self {
            config,
            balances,
            allowances: AllowanceRegistry::new(),
            events: Vec::new(),
        })
    }

    /// Get the human-readable name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Get the display precision (one whole token is 10^decimals units).
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Get the token configuration.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Get the number of units currently in circulation.
    pub fn total_supply(&self) -> Amount {
        self.balances.total_supply()
    }

    /// Get the balance of an account (zero if it never held funds).
    pub fn balance_of(&self, account: Address) -> Amount {
        self.balances.balance_of(account)
    }

    /// Get the remaining allowance `owner` has granted to `spender`.
    pub fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances.allowance(owner, spender)
    }

    /// Get the full notification log, oldest first.
    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Get the total number of notifications recorded.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Get recent notifications (newest first).
    pub fn recent_events(&self, limit: usize) -> Vec<TokenEvent> {
        self.events.iter().rev().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::new([tag; 20])
    }

    #[test]
    fn test_construction_mints_full_supply_to_holder() {
        let token = Token::new(TokenConfig::myanmar_gold(), addr(1)).unwrap();

        assert_eq!(token.total_supply(), Amount::new(10u128.pow(27)));
        assert_eq!(token.balance_of(addr(1)), token.total_supply());
        assert_eq!(token.balance_of(addr(2)), Amount::ZERO);
    }

    #[test]
    fn test_construction_emits_no_events() {
        let token = Token::new(TokenConfig::default(), addr(1)).unwrap();
        assert!(token.events().is_empty());
        assert_eq!(token.event_count(), 0);
    }

    #[test]
    fn test_construction_rejects_the_void_account() {
        let result = Token::new(TokenConfig::default(), Address::VOID);
        assert!(matches!(result, Err(TokenError::InvalidRecipient)));
    }

    #[test]
    fn test_metadata_matches_config() {
        let token = Token::new(TokenConfig::myanmar_gold(), addr(1)).unwrap();

        assert_eq!(token.name(), "MyanmarGoldToken");
        assert_eq!(token.symbol(), "MGC");
        assert_eq!(token.decimals(), 18);
    }

    #[test]
    fn test_default_config_is_the_canonical_deployment() {
        assert_eq!(TokenConfig::default(), TokenConfig::myanmar_gold());
    }

    #[test]
    fn test_recent_events_returns_newest_first() {
        let mut token = Token::new(TokenConfig::default(), addr(1)).unwrap();
        token.transfer(addr(1), addr(2), Amount::new(1)).unwrap();
        token.transfer(addr(1), addr(3), Amount::new(2)).unwrap();
        token.transfer(addr(1), addr(4), Amount::new(3)).unwrap();

        let recent = token.recent_events(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(
            recent[0],
            TokenEvent::Transfer {
                from: addr(1),
                to: addr(4),
                value: Amount::new(3),
            }
        );
        assert_eq!(
            recent[1],
            TokenEvent::Transfer {
                from: addr(1),
                to: addr(3),
                value: Amount::new(2),
            }
        );
    }

    #[test]
    fn test_state_snapshot_round_trip() {
        let mut token = Token::new(TokenConfig::myanmar_gold(), addr(1)).unwrap();
        token.transfer(addr(1), addr(2), Amount::new(777)).unwrap();
        token.approve(addr(1), addr(3), Amount::new(42));

        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();

        assert_eq!(back.balance_of(addr(2)), Amount::new(777));
        assert_eq!(back.allowance(addr(1), addr(3)), Amount::new(42));
        assert_eq!(back.total_supply(), token.total_supply());
        assert_eq!(back.events(), token.events());
    }
}
