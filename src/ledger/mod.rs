//! Ledger & Access-Control Engine
//!
//! One `StratosLedger` instance is created per deployment and lives for the
//! process. All state is owned by the instance and mutated only through the
//! operations in this module tree:
//!
//! - `admin` - ownership transfer, role grant/revoke, pause control
//! - `supply` - mint and burn
//! - `transfer` - transfer, approvals, transferFrom, redeem
//!
//! Every operation validates its preconditions before touching state, so a
//! failed call leaves the ledger exactly as it found it.

mod admin;
mod supply;
mod transfer;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::address::{derive_ledger_address, Address};
use crate::config::{Amount, DECIMALS, MAX_SUPPLY, TOKEN_NAME, TOKEN_SYMBOL};
use crate::error::{TokenError, TokenResult};
use crate::roles::{AccessControl, RoleId, DEFAULT_ADMIN_ROLE, MINT_BURN_ROLE};

/// The STOS token ledger state machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StratosLedger {
    /// Account balances in base units. Absent entry = zero.
    balances: HashMap<Address, Amount>,
    /// Remaining allowances, owner -> spender -> amount
    allowances: HashMap<Address, HashMap<Address, Amount>>,
    /// Current total supply
    supply: Amount,
    /// Fixed supply ceiling
    max_supply: Amount,
    /// Owner identity
    owner: Address,
    /// The ledger's own account, derived from the creator at construction
    address: Address,
    /// Role membership table
    access: AccessControl,
    /// Pause flag
    paused: bool,
}

impl StratosLedger {
    /// Create a new ledger owned by `creator`.
    ///
    /// Total supply starts at zero; the creator holds both the default-admin
    /// and mint-burn roles.
    pub fn new(creator: Address) -> Self {
        let mut access = AccessControl::new();
        access.grant_role(DEFAULT_ADMIN_ROLE, creator);
        access.grant_role(MINT_BURN_ROLE, creator);

        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            supply: 0,
            max_supply: MAX_SUPPLY,
            owner: creator,
            address: derive_ledger_address(&creator),
            access,
            paused: false,
        }
    }

    // ========================================
    // Queries
    // ========================================

    /// Token name
    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    /// Token symbol
    pub fn symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    /// Decimal places of precision
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Current total supply in base units
    pub fn total_supply(&self) -> Amount {
        self.supply
    }

    /// Fixed supply ceiling in base units
    pub fn max_supply(&self) -> Amount {
        self.max_supply
    }

    /// Balance of `account` in base units
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining allowance granted by `owner` to `spender`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Current owner identity
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// The ledger's own account identity (holds the redeemable balance)
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Whether the ledger is paused
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Alias of [`paused`](Self::paused) - the contract exposes both names
    pub fn stopped(&self) -> bool {
        self.paused
    }

    /// Pure role membership lookup, no access restriction
    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.access.has_role(role, account)
    }

    // ========================================
    // Internal guards & balance plumbing
    // ========================================

    /// Fail with `Paused` when the pause flag is set
    pub(crate) fn ensure_not_paused(&self) -> TokenResult<()> {
        if self.paused {
            return Err(TokenError::Paused);
        }
        Ok(())
    }

    /// Fail with `NotOwner` unless `caller` is the current owner
    pub(crate) fn ensure_owner(&self, caller: &Address) -> TokenResult<()> {
        if *caller != self.owner {
            return Err(TokenError::NotOwner);
        }
        Ok(())
    }

    /// Fail with `NotRoleAdmin` unless `caller` holds the default-admin role
    pub(crate) fn ensure_role_admin(&self, caller: &Address) -> TokenResult<()> {
        if !self.access.has_role(&DEFAULT_ADMIN_ROLE, caller) {
            return Err(TokenError::NotRoleAdmin);
        }
        Ok(())
    }

    pub(crate) fn access_mut(&mut self) -> &mut AccessControl {
        &mut self.access
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn set_owner_unchecked(&mut self, owner: Address) {
        self.owner = owner;
    }

    pub(crate) fn set_supply(&mut self, supply: Amount) {
        self.supply = supply;
    }

    /// Write a balance, pruning zero entries so iteration only sees live
    /// accounts
    pub(crate) fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount == 0 {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    /// Write an allowance, pruning exhausted entries
    pub(crate) fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount == 0 {
            if let Some(spenders) = self.allowances.get_mut(&owner) {
                spenders.remove(&spender);
                if spenders.is_empty() {
                    self.allowances.remove(&owner);
                }
            }
        } else {
            self.allowances.entry(owner).or_default().insert(spender, amount);
        }
    }

    /// Move `amount` from one account to another, atomically.
    ///
    /// Both writes happen only after both new values are computed, so a
    /// failure leaves no partial state.
    pub(crate) fn move_balance(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> TokenResult<()> {
        let from_balance = self.balance_of(from);
        let new_from = from_balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;

        if from == to {
            // Self-transfer: balance checked above, nothing moves
            return Ok(());
        }

        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.set_balance(*from, new_from);
        self.set_balance(*to, new_to);
        Ok(())
    }
}
