//! Inputs to the three pool mutations.

use super::{Amount, Deadline, Liquidity, SwapDirection, Token, TokenPair};
use crate::error::AmmError;

/// Deposit request: desired amounts, their slippage floors, and a deadline.
///
/// Amounts are in canonical (token0, token1) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintRequest {
    /// Most of token0 the caller is willing to deposit.
    pub desired0: Amount,
    /// Most of token1 the caller is willing to deposit.
    pub desired1: Amount,
    /// Least of token0 the caller accepts depositing.
    pub min0: Amount,
    /// Least of token1 the caller accepts depositing.
    pub min1: Amount,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl MintRequest {
    /// A request with no slippage floors.
    pub const fn new(desired0: Amount, desired1: Amount, deadline: Deadline) -> Self {
        Self {
            desired0,
            desired1,
            min0: Amount::ZERO,
            min1: Amount::ZERO,
            deadline,
        }
    }

    /// Sets the slippage floors.
    pub const fn with_minimums(mut self, min0: Amount, min1: Amount) -> Self {
        self.min0 = min0;
        self.min1 = min1;
        self
    }
}

/// Withdrawal request.
///
/// `owned` is the caller's LP balance as recorded by the external share
/// ledger; the engine only checks `liquidity` against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurnRequest {
    /// Liquidity to redeem.
    pub liquidity: Liquidity,
    /// Liquidity the caller holds.
    pub owned: Liquidity,
    /// Least token0 the caller accepts.
    pub min0: Amount,
    /// Least token1 the caller accepts.
    pub min1: Amount,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl BurnRequest {
    /// A request with no slippage floors.
    pub const fn new(liquidity: Liquidity, owned: Liquidity, deadline: Deadline) -> Self {
        Self {
            liquidity,
            owned,
            min0: Amount::ZERO,
            min1: Amount::ZERO,
            deadline,
        }
    }

    /// Sets the slippage floors.
    pub const fn with_minimums(mut self, min0: Amount, min1: Amount) -> Self {
        self.min0 = min0;
        self.min1 = min1;
        self
    }
}

/// Exact-input swap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    /// Amount sold into the pool.
    pub amount_in: Amount,
    /// Least output the caller accepts.
    pub min_amount_out: Amount,
    /// Which reserve receives `amount_in`.
    pub direction: SwapDirection,
    /// Latest execution time.
    pub deadline: Deadline,
}

impl SwapRequest {
    /// Creates a request.
    pub const fn new(
        amount_in: Amount,
        min_amount_out: Amount,
        direction: SwapDirection,
        deadline: Deadline,
    ) -> Self {
        Self {
            amount_in,
            min_amount_out,
            direction,
            deadline,
        }
    }

    /// Resolves a two-token path `[token_in, token_out]` against `pair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the path does not hold exactly two tokens.
    /// - [`AmmError::InvalidToken`] if either token is not in `pair`, or
    ///   both ends are the same token.
    pub fn from_path(
        pair: &TokenPair,
        path: &[Token],
        amount_in: Amount,
        min_amount_out: Amount,
        deadline: Deadline,
    ) -> Result<Self, AmmError> {
        let [token_in, token_out] = path else {
            return Err(AmmError::InvalidPath("single-pool swap takes exactly two tokens"));
        };
        let direction = pair.direction_for(token_in)?;
        if pair.other(token_in)? != *token_out {
            return Err(AmmError::InvalidToken("token_out is not part of the pool pair"));
        }
        Ok(Self::new(amount_in, min_amount_out, direction, deadline))
    }
}
