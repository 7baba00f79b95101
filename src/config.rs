//! Token Constants
//!
//! Fixed at construction and immutable for the life of the ledger.

/// Base unit amount. The supply ceiling (10^26 base units) exceeds
/// `u64::MAX`, so amounts are 128-bit.
pub type Amount = u128;

/// Token name
pub const TOKEN_NAME: &str = "Stratos Token";

/// Token symbol/ticker
pub const TOKEN_SYMBOL: &str = "STOS";

/// Decimal places of precision
pub const DECIMALS: u8 = 18;

/// One whole STOS in base units (10^18)
pub const COIN_VALUE: Amount = 10u128.pow(DECIMALS as u32);

/// Maximum total supply: 100,000,000 STOS in base units
pub const MAX_SUPPLY: Amount = 100_000_000 * COIN_VALUE;
