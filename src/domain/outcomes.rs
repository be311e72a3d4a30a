//! Results of the three pool mutations.

use core::fmt;

use super::{Amount, Liquidity, SwapDirection};

/// Amounts actually deposited and the liquidity minted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintOutcome {
    /// Token0 taken into the reserves.
    pub amount0: Amount,
    /// Token1 taken into the reserves.
    pub amount1: Amount,
    /// Liquidity credited to the depositor (excludes any locked minimum).
    pub liquidity: Liquidity,
}

/// Amounts paid out for burned liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurnOutcome {
    /// Token0 released from the reserves.
    pub amount0: Amount,
    /// Token1 released from the reserves.
    pub amount1: Amount,
}

/// The outcome of an exact-input swap.
///
/// `fee` is informational: the share of `amount_in` that stayed in the
/// pool as fee, rounded up. It is already part of `amount_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    /// Direction the swap ran in.
    pub direction: SwapDirection,
    /// Amount sold into the pool.
    pub amount_in: Amount,
    /// Amount paid out.
    pub amount_out: Amount,
    /// Fee portion of `amount_in`.
    pub fee: Amount,
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {}: in={} out={} fee={}",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
