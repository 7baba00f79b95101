// Mint & Burn Operations
//
// Both are gated on the caller holding the mint-burn role. Burn is custodial:
// the role holder may burn from any account, mirroring the minting authority.

use log::debug;

use crate::address::Address;
use crate::config::Amount;
use crate::error::{TokenError, TokenResult};
use crate::roles::MINT_BURN_ROLE;

use super::StratosLedger;

impl StratosLedger {
    /// Mint `amount` base units to `to`.
    ///
    /// Requires the caller to hold the mint-burn role, the ledger to be
    /// running, and the new supply to stay within the ceiling. A zero-amount
    /// mint is a no-op success subject to the same gates.
    pub fn mint(&mut self, caller: &Address, to: Address, amount: Amount) -> TokenResult<()> {
        if !self.has_role(&MINT_BURN_ROLE, caller) {
            return Err(TokenError::MintNotAllowed);
        }
        self.ensure_not_paused()?;

        // Compute both new values before writing anything
        let new_supply = self
            .total_supply()
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        if new_supply > self.max_supply() {
            return Err(TokenError::MaxSupplyExceeded);
        }

        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.set_balance(to, new_balance);
        self.set_supply(new_supply);

        debug!("minted {} base units to {} (supply {})", amount, to, new_supply);
        Ok(())
    }

    /// Burn `amount` base units from `from`.
    ///
    /// Requires the caller to hold the mint-burn role and the ledger to be
    /// running; `from` needs no role. Fails with `InsufficientBalance` when
    /// the account holds less than `amount`.
    pub fn burn(&mut self, caller: &Address, from: &Address, amount: Amount) -> TokenResult<()> {
        if !self.has_role(&MINT_BURN_ROLE, caller) {
            return Err(TokenError::BurnNotAllowed);
        }
        self.ensure_not_paused()?;

        let new_balance = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;

        // Supply is the sum of all balances, so it cannot underflow here
        let new_supply = self
            .total_supply()
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;

        self.set_balance(*from, new_balance);
        self.set_supply(new_supply);

        debug!("burned {} base units from {} (supply {})", amount, from, new_supply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COIN_VALUE, MAX_SUPPLY};

    const ADMIN: Address = Address::new([0x01; 32]);
    const BOB: Address = Address::new([0x02; 32]);

    #[test]
    fn mint_requires_role() {
        let mut ledger = StratosLedger::new(ADMIN);
        let err = ledger.mint(&BOB, BOB, COIN_VALUE).unwrap_err();
        assert_eq!(err, TokenError::MintNotAllowed);
        assert_eq!(ledger.balance_of(&BOB), 0);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn mint_updates_balance_and_supply() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, BOB, 100 * COIN_VALUE).unwrap();
        assert_eq!(ledger.balance_of(&BOB), 100 * COIN_VALUE);
        assert_eq!(ledger.total_supply(), 100 * COIN_VALUE);
    }

    #[test]
    fn zero_amount_mint_is_a_no_op_success() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, BOB, 0).unwrap();
        assert_eq!(ledger.balance_of(&BOB), 0);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn mint_cannot_exceed_ceiling() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, ADMIN, MAX_SUPPLY).unwrap();

        let err = ledger.mint(&ADMIN, BOB, 1).unwrap_err();
        assert_eq!(err, TokenError::MaxSupplyExceeded);
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
        assert_eq!(ledger.balance_of(&BOB), 0);
    }

    #[test]
    fn burn_requires_role_on_caller_only() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, BOB, 100).unwrap();

        // Bob holds the tokens but not the role
        let err = ledger.burn(&BOB, &BOB, 90).unwrap_err();
        assert_eq!(err, TokenError::BurnNotAllowed);

        // The role holder burns from Bob's balance
        ledger.burn(&ADMIN, &BOB, 90).unwrap();
        assert_eq!(ledger.balance_of(&BOB), 10);
        assert_eq!(ledger.total_supply(), 10);
    }

    #[test]
    fn burn_rejects_overdraft() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, BOB, 100).unwrap();
        let err = ledger.burn(&ADMIN, &BOB, 101).unwrap_err();
        assert_eq!(err, TokenError::InsufficientBalance);
        assert_eq!(ledger.balance_of(&BOB), 100);
        assert_eq!(ledger.total_supply(), 100);
    }

    #[test]
    fn mint_and_burn_respect_pause() {
        let mut ledger = StratosLedger::new(ADMIN);
        ledger.mint(&ADMIN, BOB, 100).unwrap();
        ledger.stop(&ADMIN).unwrap();

        assert_eq!(ledger.mint(&ADMIN, BOB, 1).unwrap_err(), TokenError::Paused);
        assert_eq!(ledger.burn(&ADMIN, &BOB, 1).unwrap_err(), TokenError::Paused);
        assert_eq!(ledger.balance_of(&BOB), 100);

        ledger.resume(&ADMIN).unwrap();
        ledger.mint(&ADMIN, BOB, 1).unwrap();
        assert_eq!(ledger.balance_of(&BOB), 101);
    }
}
