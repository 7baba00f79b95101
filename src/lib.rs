//! Stratos (STOS) Token Ledger
//!
//! In-process reconstruction of the Stratos ERC20-style token contract:
//! a single ledger object holding balances, total supply, allowances, an
//! owner, a role table and a pause flag, with deterministic synchronous
//! operations validated against the token invariants.
//!
//! The engine performs no I/O and never blocks. Mutating operations take
//! `&mut self`, so a single-writer discipline is enforced by the borrow
//! checker; a multi-caller host wraps the ledger in its own lock and is
//! responsible for authenticating the caller identities it supplies.

pub mod address;
pub mod config;
pub mod error;
pub mod ledger;
pub mod ops;
pub mod roles;

pub use address::Address;
pub use config::{Amount, COIN_VALUE, DECIMALS, MAX_SUPPLY, TOKEN_NAME, TOKEN_SYMBOL};
pub use error::{TokenError, TokenResult};
pub use ledger::StratosLedger;
pub use ops::{TokenOperation, TokenOutcome};
pub use roles::{AccessControl, RoleId, DEFAULT_ADMIN_ROLE, MINT_BURN_ROLE};
