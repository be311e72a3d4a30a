//! Configuration for a single constant-product pool.

use crate::domain::{FeeRate, Liquidity, TokenPair};
use crate::error::AmmError;

/// Minimum liquidity locked by the pair contract on first mint.
pub const DEFAULT_MINIMUM_LIQUIDITY: Liquidity = Liquidity::new(1_000);

/// Immutable parameters of a constant-product pool (`x · y = k`).
///
/// A pool built from this config starts empty; reserves only appear
/// through the first mint.
///
/// # Validation
///
/// - The fee fraction must satisfy `0 <= numerator < denominator`.
/// - The minimum liquidity must be non-zero.
/// - The token pair is validated at [`TokenPair`] construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    token_pair: TokenPair,
    fee: FeeRate,
    minimum_liquidity: Liquidity,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] for a malformed fee or
    /// [`AmmError::InvalidConfiguration`] for a zero minimum liquidity.
    pub fn new(
        token_pair: TokenPair,
        fee: FeeRate,
        minimum_liquidity: Liquidity,
    ) -> Result<Self, AmmError> {
        let config = Self {
            token_pair,
            fee,
            minimum_liquidity,
        };
        config.validate()?;
        Ok(config)
    }

    /// A config with the pair contract's defaults: 3/1000 fee, 1000
    /// locked liquidity.
    #[must_use]
    pub const fn standard(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            fee: FeeRate::STANDARD,
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee.validate()?;
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns the liquidity locked on first mint.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }
}
