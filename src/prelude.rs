//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use bumdex_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BurnOutcome, BurnRequest, Deadline, Decimals, FeeRate, Liquidity, MintOutcome,
    MintRequest, PairId, SlippageTolerance, SwapDirection, SwapOutcome, SwapRequest, Timestamp,
    Token, TokenAddress, TokenPair,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{EngineConfig, PoolConfig};

pub use crate::error::{AmmError, Result};

pub use crate::pools::ConstantProductPool;

pub use crate::registry::PoolRegistry;
