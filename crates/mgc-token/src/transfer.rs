//! Direct and delegated transfers, and the approval surface
//!
//! A delegated transfer consumes the (owner, spender) allowance before
//! the balance moves. If the balance move then fails, the allowance is
//! restored, so a failed call leaves no partial spend behind.

use mgc_types::{Address, Amount, Result, TokenError, TokenEvent};
use tracing::{debug, warn};

use crate::Token;

impl Token {
    /// Move `amount` from `sender` to `recipient`.
    ///
    /// Emits one `Transfer` on success. A zero amount is a valid transfer
    /// and still emits.
    /// Fails with `InvalidRecipient` if `recipient` is the void account
    /// (checked before anything else, whatever the amount), and with
    /// `InsufficientBalance` if the sender's balance is short.
    pub fn transfer(&mut self, sender: Address, recipient: Address, amount: Amount) -> Result<()> {
        if recipient.is_void() {
            return Err(TokenError::InvalidRecipient);
        }

        self.balances.transfer(sender, recipient, amount)?;
        self.events.push(TokenEvent::Transfer {
            from: sender,
            to: recipient,
            value: amount,
        });
        debug!("Transfer executed: {} from {} to {}", amount, sender, recipient);
        Ok(())
    }

    /// Move `amount` from `owner` to `recipient` on the authority of the
    /// allowance `owner` granted to `spender`.
    ///
    /// The allowance is consumed before the balance moves, so when both
    /// the allowance and the balance are short the error reports the
    /// allowance. Emits one `Transfer` with `from = owner` on success; the
    /// spender never appears in the event.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<()> {
        if recipient.is_void() {
            return Err(TokenError::InvalidRecipient);
        }

        self.allowances.spend(owner, spender, amount)?;
        if let Err(err) = self.balances.transfer(owner, recipient, amount) {
            // Restore the spend so the failed call changes nothing
            self.allowances.refund(owner, spender, amount);
            warn!("Delegated transfer rolled back: {} from {}", amount, owner);
            return Err(err);
        }

        self.events.push(TokenEvent::Transfer {
            from: owner,
            to: recipient,
            value: amount,
        });
        debug!(
            "Delegated transfer executed: {} from {} to {} by {}",
            amount, owner, recipient, spender
        );
        Ok(())
    }

    /// Set the allowance `owner` grants to `spender`, overwriting any
    /// previous value.
    ///
    /// Never fails: the amount may exceed the owner's balance and the
    /// spender may be any address, the void account included. Emits one
    /// `Approval` carrying the stored value, which is also returned.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> Amount {
        let value = self.allowances.approve(owner, spender, amount);
        self.events.push(TokenEvent::Approval {
            owner,
            spender,
            value,
        });
        debug!("Approval set: {} for {} by {}", value, spender, owner);
        value
    }

    /// Raise the allowance `owner` grants to `spender` by `delta`.
    ///
    /// Never fails. Emits one `Approval` carrying the new total, which is
    /// also returned.
    pub fn increase_approval(&mut self, owner: Address, spender: Address, delta: Amount) -> Amount {
        let value = self.allowances.increase(owner, spender, delta);
        self.events.push(TokenEvent::Approval {
            owner,
            spender,
            value,
        });
        debug!("Approval raised: {} for {} by {}", value, spender, owner);
        value
    }

    /// Lower the allowance `owner` grants to `spender` by `delta`,
    /// flooring at zero when `delta` exceeds the current allowance.
    ///
    /// Never fails. Emits one `Approval` carrying the new value, which is
    /// also returned.
    pub fn decrease_approval(&mut self, owner: Address, spender: Address, delta: Amount) -> Amount {
        let value = self.allowances.decrease(owner, spender, delta);
        self.events.push(TokenEvent::Approval {
            owner,
            spender,
            value,
        });
        debug!("Approval lowered: {} for {} by {}", value, spender, owner);
        value
    }
}
