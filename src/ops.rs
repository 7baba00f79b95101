//! Host Interface
//!
//! A deployment harness drives the ledger with `(identity, operation)` pairs
//! and surfaces failures to its own callers as rejected transactions with a
//! reason string. `TokenOperation` is the wire form of every ledger
//! operation; variant and field names follow the original contract ABI.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::config::Amount;
use crate::error::TokenResult;
use crate::ledger::StratosLedger;
use crate::roles::{RoleId, DEFAULT_ADMIN_ROLE, MINT_BURN_ROLE};

/// A single ledger operation, as submitted by the host.
///
/// Externally tagged on purpose: tagged representations buffer their content
/// and serde cannot replay 128-bit amounts through that buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenOperation {
    // ===== Ownership & roles =====
    #[serde(rename_all = "camelCase")]
    SetOwner { new_owner: Address },
    GrantMintBurnRole { account: Address },
    SetAuthority { account: Address },
    RevokeMintBurnRole { account: Address },
    HasRole {
        #[serde(with = "hex")]
        role: RoleId,
        account: Address,
    },

    // ===== Pause control =====
    Stop,
    Resume,

    // ===== Supply =====
    Mint { to: Address, amount: Amount },
    Burn { from: Address, amount: Amount },

    // ===== Transfers & allowances =====
    Transfer { to: Address, amount: Amount },
    Approve { spender: Address, amount: Amount },
    IncreaseAllowance { spender: Address, amount: Amount },
    DecreaseAllowance { spender: Address, amount: Amount },
    TransferFrom {
        owner: Address,
        to: Address,
        amount: Amount,
    },
    Redeem { amount: Amount },

    // ===== Queries =====
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    MaxSupply,
    BalanceOf { account: Address },
    Allowance { owner: Address, spender: Address },
    Owner,
    Paused,
    Stopped,
    DefaultAdminRole,
    MintBurnRole,
}

/// Return value of a committed operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOutcome {
    /// Mutation committed, nothing to return
    Unit,
    Bool(bool),
    Amount(Amount),
    Decimals(u8),
    Account(Address),
    Role(#[serde(with = "hex")] RoleId),
    Text(String),
}

impl StratosLedger {
    /// Apply one operation on behalf of `caller`.
    ///
    /// Either commits fully and returns the operation's value, or fails with
    /// a [`TokenError`](crate::error::TokenError) and no state change.
    pub fn apply(&mut self, caller: &Address, op: TokenOperation) -> TokenResult<TokenOutcome> {
        use TokenOperation::*;

        let outcome = match op {
            // Ownership & roles
            SetOwner { new_owner } => {
                self.set_owner(caller, new_owner)?;
                TokenOutcome::Unit
            }
            GrantMintBurnRole { account } => {
                self.grant_mint_burn_role(caller, account)?;
                TokenOutcome::Unit
            }
            SetAuthority { account } => {
                self.set_authority(caller, account)?;
                TokenOutcome::Unit
            }
            RevokeMintBurnRole { account } => {
                self.revoke_mint_burn_role(caller, &account)?;
                TokenOutcome::Unit
            }
            HasRole { role, account } => TokenOutcome::Bool(self.has_role(&role, &account)),

            // Pause control
            Stop => {
                self.stop(caller)?;
                TokenOutcome::Unit
            }
            Resume => {
                self.resume(caller)?;
                TokenOutcome::Unit
            }

            // Supply
            Mint { to, amount } => {
                self.mint(caller, to, amount)?;
                TokenOutcome::Unit
            }
            Burn { from, amount } => {
                self.burn(caller, &from, amount)?;
                TokenOutcome::Unit
            }

            // Transfers & allowances
            Transfer { to, amount } => {
                self.transfer(caller, to, amount)?;
                TokenOutcome::Unit
            }
            Approve { spender, amount } => {
                self.approve(caller, spender, amount)?;
                TokenOutcome::Unit
            }
            IncreaseAllowance { spender, amount } => {
                self.increase_allowance(caller, spender, amount)?;
                TokenOutcome::Unit
            }
            DecreaseAllowance { spender, amount } => {
                self.decrease_allowance(caller, spender, amount)?;
                TokenOutcome::Unit
            }
            TransferFrom { owner, to, amount } => {
                self.transfer_from(caller, &owner, to, amount)?;
                TokenOutcome::Unit
            }
            Redeem { amount } => {
                self.redeem(caller, amount)?;
                TokenOutcome::Unit
            }

            // Queries
            Name => TokenOutcome::Text(self.name().to_string()),
            Symbol => TokenOutcome::Text(self.symbol().to_string()),
            Decimals => TokenOutcome::Decimals(self.decimals()),
            TotalSupply => TokenOutcome::Amount(self.total_supply()),
            MaxSupply => TokenOutcome::Amount(self.max_supply()),
            BalanceOf { account } => TokenOutcome::Amount(self.balance_of(&account)),
            Allowance { owner, spender } => TokenOutcome::Amount(self.allowance(&owner, &spender)),
            Owner => TokenOutcome::Account(*self.owner()),
            Paused | Stopped => TokenOutcome::Bool(self.paused()),
            DefaultAdminRole => TokenOutcome::Role(DEFAULT_ADMIN_ROLE),
            MintBurnRole => TokenOutcome::Role(MINT_BURN_ROLE),
        };

        Ok(outcome)
    }
}
