//! Swap fee as an exact fraction.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Swap fee expressed as `numerator / denominator` of the input amount.
///
/// The pair contract charges 3/1000 (0.3%); any fraction with
/// `0 <= numerator < denominator` is accepted. Keeping the fee as a
/// fraction rather than basis points lets the swap formula stay exact:
/// `in_after_fee = amount_in * (denominator - numerator)`.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::STANDARD;
/// assert_eq!(fee.retained(), 997);
/// assert_eq!(fee.fee_amount(Amount::new(100_000)), Ok(Amount::new(300)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRate {
    numerator: u32,
    denominator: u32,
}

impl FeeRate {
    /// 0.3%, the pair contract's fee.
    pub const STANDARD: Self = Self {
        numerator: 3,
        denominator: 1_000,
    };

    /// No fee.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1_000,
    };

    /// Creates a validated fee fraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `denominator` is zero or
    /// `numerator >= denominator`.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, AmmError> {
        let fee = Self {
            numerator,
            denominator,
        };
        fee.validate()?;
        Ok(fee)
    }

    /// Checks the fraction. Needed after deserialization, which does not
    /// go through [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] on a zero denominator or a fee of
    /// 100% or more.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if self.denominator == 0 {
            return Err(AmmError::InvalidFee("denominator must be non-zero"));
        }
        if self.numerator >= self.denominator {
            return Err(AmmError::InvalidFee("numerator must be below denominator"));
        }
        Ok(())
    }

    /// Fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// `denominator - numerator`: the share of the input that reaches the curve.
    #[must_use]
    pub const fn retained(&self) -> u32 {
        self.denominator.saturating_sub(self.numerator)
    }

    /// Returns `true` for a zero fee.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Portion of `amount_in` kept by the pool as fee, rounded up.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `amount_in * numerator` does not
    /// fit in `u128`, or [`AmmError::DivisionByZero`] for a zero denominator.
    pub const fn fee_amount(&self, amount_in: Amount) -> Result<Amount, AmmError> {
        let product = match amount_in.get().checked_mul(self.numerator as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("fee amount overflow")),
        };
        match crate::math::div_round(product, self.denominator as u128, Rounding::Up) {
            Some(v) => Ok(Amount::new(v)),
            None => Err(AmmError::DivisionByZero),
        }
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
