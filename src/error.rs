//! Unified error types for the pool accounting engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Variants are error *kinds*: callers match on them to decide
//! how to react (retry with a fresh deadline, widen slippage, etc.), and the
//! `Display` text is only a default rendering.
//!
//! Every pool operation validates completely before it mutates, so any
//! `Err` returned from a mint, burn or swap leaves the pool exactly as it
//! was.

use thiserror::Error;

use crate::domain::{Amount, Liquidity, Timestamp};

/// Errors returned by pool, registry, configuration and arithmetic code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("operation expired: deadline {deadline} is before now {now}")]
    Expired {
        /// Deadline carried by the request.
        deadline: Timestamp,
        /// Time the operation was evaluated at.
        now: Timestamp,
    },

    /// First deposit too small: `sqrt(amount0 * amount1)` does not exceed
    /// the locked minimum liquidity.
    #[error("insufficient initial liquidity: sqrt(product) {root} <= minimum {minimum}")]
    InsufficientInitialLiquidity {
        /// Integer square root of the deposited product.
        root: Liquidity,
        /// Minimum liquidity that would have been locked.
        minimum: Liquidity,
    },

    /// A computed amount fell below the caller's floor.
    #[error("slippage exceeded on {side}: got {actual}, minimum {minimum}")]
    SlippageExceeded {
        /// Which amount violated its floor (`amount0`, `amount1`, `amount_out`).
        side: &'static str,
        /// Amount the engine computed.
        actual: Amount,
        /// Floor the caller asked for.
        minimum: Amount,
    },

    /// A burn asked for more liquidity than the caller holds or than exists.
    #[error("insufficient liquidity owned: requested {requested}, available {available}")]
    InsufficientLiquidityOwned {
        /// Liquidity the caller tried to redeem.
        requested: Liquidity,
        /// Liquidity the caller (or the pool) actually has.
        available: Liquidity,
    },

    /// One or both reserves on the relevant side are zero, or the
    /// requested output would drain the reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Swap or quote input amount is zero.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// Swap output rounds down to zero.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A non-first deposit mints zero liquidity.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A burn of zero liquidity, or one that returns zero of both tokens.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// Post-swap constant-product check failed.
    #[error("constant-product invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Fee fraction is malformed.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Token does not belong to the pair, or a pair was built from one token.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Swap path has the wrong shape for the requested operation.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// Decimal scale outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Configuration failed validation or could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A pool for this pair is already registered.
    #[error("pool already exists for this pair")]
    PoolAlreadyExists,

    /// No pool is registered for this pair.
    #[error("pool not found for this pair")]
    PoolNotFound,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl AmmError {
    /// Returns `true` for errors caused by market movement between quote
    /// and execution, which a caller can usually fix by re-quoting.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Expired { .. } | Self::SlippageExceeded { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
