//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods
//! of [`Amount`] and [`Liquidity`] into [`Result`]s carrying a specific
//! [`AmmError`] variant, so pool code can chain them with `?`.
//!
//! # Examples
//!
//! ```
//! use bumdex_amm::domain::Amount;
//! use bumdex_amm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000_000);
//! assert_eq!(reserve.safe_add(&Amount::new(100_000)), Ok(Amount::new(1_100_000)));
//! assert!(reserve.safe_sub(&Amount::new(2_000_000)).is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("liquidity subtraction underflow"))
    }
}
