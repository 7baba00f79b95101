// STOS Token Ledger - Error Codes
// This module defines all failures of the ledger state machine.
//
// Every failure is synchronous and non-retryable: it reflects a precondition
// violation at call time and aborts the call with zero state mutation. The
// Display string of each variant is the exact revert reason the original
// contract surfaces, so hosts can forward it unchanged.
//
// Error Code Ranges:
// - 100-199: Ownership errors
// - 200-299: Role errors
// - 300-399: Pause errors
// - 400-499: Supply errors
// - 500-599: Balance & allowance errors
// - 900-999: Arithmetic errors

use thiserror::Error;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Token error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum TokenError {
    // ========================================
    // Ownership errors (100-199)
    // ========================================
    #[error("Ownable: caller is not the owner")]
    NotOwner = 100,

    // ========================================
    // Role errors (200-299)
    // ========================================
    #[error("Caller is not allowed to mint")]
    MintNotAllowed = 200,

    #[error("Caller is not allowed to burn")]
    BurnNotAllowed = 201,

    #[error("AccessControl: caller is not the role admin")]
    NotRoleAdmin = 202,

    // ========================================
    // Pause errors (300-399)
    // ========================================
    #[error("Pausable: paused")]
    Paused = 300,

    #[error("Pausable: not paused")]
    NotPaused = 301,

    // ========================================
    // Supply errors (400-499)
    // ========================================
    #[error("Exceeds STOS token max totalSupply")]
    MaxSupplyExceeded = 400,

    // ========================================
    // Balance & allowance errors (500-599)
    // ========================================
    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance = 500,

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance = 501,

    #[error("ERC20: decreased allowance below zero")]
    AllowanceBelowZero = 502,

    #[error("redeem can not exceed the balance")]
    RedeemExceedsBalance = 503,

    // ========================================
    // Arithmetic errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl TokenError {
    /// Stable numeric code for the error
    pub fn code(self) -> u64 {
        self as u64
    }

    /// Revert reason string surfaced to the host
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
