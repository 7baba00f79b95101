// Transfer, Approval & Redeem Operations
//
// Transfers carry no role restriction; they are gated on the pause flag and
// the sender's balance only. Approvals are never pause-gated (pausing halts
// movement of funds, not bookkeeping of intent).

use log::debug;

use crate::address::Address;
use crate::config::Amount;
use crate::error::{TokenError, TokenResult};

use super::StratosLedger;

impl StratosLedger {
    /// Move `amount` from the caller to `to`.
    pub fn transfer(&mut self, caller: &Address, to: Address, amount: Amount) -> TokenResult<()> {
        self.ensure_not_paused()?;
        self.move_balance(caller, &to, amount)?;
        debug!("transfer {} base units {} -> {}", amount, caller, to);
        Ok(())
    }

    /// Set the allowance from the caller to `spender` (overwrite semantics).
    pub fn approve(&mut self, caller: &Address, spender: Address, amount: Amount) -> TokenResult<()> {
        self.set_allowance(*caller, spender, amount);
        debug!("approve {} base units {} -> {}", amount, caller, spender);
        Ok(())
    }

    /// Add `amount` to the existing allowance from the caller to `spender`.
    pub fn increase_allowance(
        &mut self,
        caller: &Address,
        spender: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        let new_allowance = self
            .allowance(caller, &spender)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.set_allowance(*caller, spender, new_allowance);
        Ok(())
    }

    /// Subtract `amount` from the existing allowance from the caller to
    /// `spender`. Fails with `AllowanceBelowZero` when the current allowance
    /// is smaller than `amount`.
    pub fn decrease_allowance(
        &mut self,
        caller: &Address,
        spender: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        let new_allowance = self
            .allowance(caller, &spender)
            .checked_sub(amount)
            .ok_or(TokenError::AllowanceBelowZero)?;
        self.set_allowance(*caller, spender, new_allowance);
        Ok(())
    }

    /// Move `amount` from `owner` to `to` on the strength of the allowance
    /// `owner` granted the caller.
    ///
    /// Allowance, balance and both account writes commit together or not at
    /// all.
    pub fn transfer_from(
        &mut self,
        caller: &Address,
        owner: &Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.ensure_not_paused()?;

        let new_allowance = self
            .allowance(owner, caller)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;

        // Balance check happens before the allowance write
        if self.balance_of(owner) < amount {
            return Err(TokenError::InsufficientBalance);
        }

        self.move_balance(owner, &to, amount)?;
        self.set_allowance(*owner, *caller, new_allowance);

        debug!(
            "transfer_from {} base units {} -> {} (spender {})",
            amount, owner, to, caller
        );
        Ok(())
    }

    /// Move `amount` from the ledger's own account to the caller.
    ///
    /// Gated on the ledger's self-held balance only; any caller may redeem.
    pub fn redeem(&mut self, caller: &Address, amount: Amount) -> TokenResult<()> {
        self.ensure_not_paused()?;

        let held = self.balance_of(self.address());
        if held < amount {
            return Err(TokenError::RedeemExceedsBalance);
        }

        let ledger_account = *self.address();
        self.move_balance(&ledger_account, caller, amount)?;
        debug!("redeemed {} base units to {}", amount, caller);
        Ok(())
    }
}
