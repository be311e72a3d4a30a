//! Swap execution and quoting.
//!
//! [`SwapPool`] is the trading surface of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] performs an exact-input swap.
//! 2. **Quote**: [`SwapPool::quote_swap`] prices the same swap without
//!    touching state.
//! 3. **Inspect**: [`SwapPool::token_pair`] and [`SwapPool::fee`].
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input before pricing:
//!
//! ```text
//! in_after_fee = amount_in × (den − num)
//! amount_out   = price_curve(in_after_fee)
//! ```
//!
//! and the fee stays in the input reserve.

use crate::domain::{Amount, FeeRate, SwapDirection, SwapOutcome, SwapRequest, Timestamp, TokenPair};
use crate::error::AmmError;

/// A pool that swaps one side of its pair for the other.
pub trait SwapPool {
    /// Executes `request` as of `now`.
    ///
    /// Either the whole swap applies or the pool is left untouched.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see the implementing pool.
    fn swap(&mut self, request: &SwapRequest, now: Timestamp) -> Result<SwapOutcome, AmmError>;

    /// Output the pool would pay for `amount_in` in `direction` right now.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see the implementing pool.
    fn quote_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<Amount, AmmError>;

    /// The canonically ordered pair this pool trades.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// The pool's swap fee.
    #[must_use]
    fn fee(&self) -> FeeRate;
}
