// Ownership, Role & Pause Control
//
// Ownership transfer is fused with role reassignment: the old owner loses
// both predefined roles and the new owner gains them in the same call, with
// no observable intermediate state.

use log::debug;

use crate::address::Address;
use crate::error::{TokenError, TokenResult};
use crate::roles::{DEFAULT_ADMIN_ROLE, MINT_BURN_ROLE};

use super::StratosLedger;

impl StratosLedger {
    /// Transfer ownership to `new_owner`.
    ///
    /// Restricted to the current owner. Atomically strips the default-admin
    /// and mint-burn roles from the old owner and grants both to the new one.
    pub fn set_owner(&mut self, caller: &Address, new_owner: Address) -> TokenResult<()> {
        self.ensure_owner(caller)?;

        let old_owner = *self.owner();
        let access = self.access_mut();
        access.revoke_role(&DEFAULT_ADMIN_ROLE, &old_owner);
        access.revoke_role(&MINT_BURN_ROLE, &old_owner);
        access.grant_role(DEFAULT_ADMIN_ROLE, new_owner);
        access.grant_role(MINT_BURN_ROLE, new_owner);
        self.set_owner_unchecked(new_owner);

        debug!("ownership transferred from {} to {}", old_owner, new_owner);
        Ok(())
    }

    /// Grant the mint-burn role to `account`. Restricted to the role admin.
    pub fn grant_mint_burn_role(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        self.ensure_role_admin(caller)?;
        self.access_mut().grant_role(MINT_BURN_ROLE, account);
        debug!("mint-burn role granted to {}", account);
        Ok(())
    }

    /// Alias of [`grant_mint_burn_role`](Self::grant_mint_burn_role) - the
    /// contract exposes both entry points.
    pub fn set_authority(&mut self, caller: &Address, account: Address) -> TokenResult<()> {
        self.grant_mint_burn_role(caller, account)
    }

    /// Revoke the mint-burn role from `account`. Restricted to the role
    /// admin.
    pub fn revoke_mint_burn_role(&mut self, caller: &Address, account: &Address) -> TokenResult<()> {
        self.ensure_role_admin(caller)?;
        self.access_mut().revoke_role(&MINT_BURN_ROLE, account);
        debug!("mint-burn role revoked from {}", account);
        Ok(())
    }

    /// Set the pause flag, halting all economic mutations.
    ///
    /// Restricted to the role admin. Fails with `Paused` if already paused.
    pub fn stop(&mut self, caller: &Address) -> TokenResult<()> {
        self.ensure_role_admin(caller)?;
        if self.paused() {
            return Err(TokenError::Paused);
        }
        self.set_paused(true);
        debug!("ledger paused by {}", caller);
        Ok(())
    }

    /// Clear the pause flag.
    ///
    /// Restricted to the role admin. Fails with `NotPaused` if not paused.
    pub fn resume(&mut self, caller: &Address) -> TokenResult<()> {
        self.ensure_role_admin(caller)?;
        if !self.paused() {
            return Err(TokenError::NotPaused);
        }
        self.set_paused(false);
        debug!("ledger resumed by {}", caller);
        Ok(())
    }
}
