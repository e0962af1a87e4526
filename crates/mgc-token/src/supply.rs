//! Supply reduction
//!
//! The supply is fixed by the construction mint and only ever decreases
//! afterward, through `burn`. There is no way to issue new units.

use mgc_types::{Address, Amount, Result, TokenEvent};
use tracing::info;

use crate::Token;

impl Token {
    /// Permanently remove `amount` units from `holder` and from
    /// circulation.
    ///
    /// On success emits `Burn` followed by a `Transfer` to the void
    /// account, in that order, both carrying the burned amount.
    /// Fails with `InsufficientBalance` if the holder's balance is short;
    /// neither the balance nor the supply moves in that case.
    pub fn burn(&mut self, holder: Address, amount: Amount) -> Result<()> {
        self.balances.burn(holder, amount)?;
        self.events.push(TokenEvent::Burn {
            burner: holder,
            value: amount,
        });
        self.events.push(TokenEvent::Transfer {
            from: holder,
            to: Address::VOID,
            value: amount,
        });
        info!(
            "Burn executed: {} from {}, supply now {}",
            amount,
            holder,
            self.balances.total_supply()
        );
        Ok(())
    }
}
