//! Liquidity provision on top of [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! [`LiquidityPool::total_liquidity`] changes **only** through
//! [`LiquidityPool::quote_and_mint`] and [`LiquidityPool::burn`]; swaps
//! move reserves but never shares. `total_liquidity() == 0` exactly when
//! both reserves are zero.
//!
//! The pool does not track who owns which shares. Burns carry the caller's
//! balance as reported by the external share ledger.

use super::SwapPool;
use crate::domain::{
    Amount, BurnOutcome, BurnRequest, Liquidity, MintOutcome, MintRequest, Timestamp,
};
use crate::error::AmmError;

/// A pool that accepts deposits and redeems shares.
pub trait LiquidityPool: SwapPool {
    /// Quotes the accepted deposit for `request` and applies it.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see the implementing pool.
    fn quote_and_mint(
        &mut self,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<MintOutcome, AmmError>;

    /// Redeems `request.liquidity` shares for both tokens.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see the implementing pool.
    fn burn(&mut self, request: &BurnRequest, now: Timestamp) -> Result<BurnOutcome, AmmError>;

    /// `(reserve0, reserve1)`.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);

    /// Outstanding shares, including any locked minimum.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;
}
