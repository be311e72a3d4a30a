//! Slippage tolerance applied to quotes.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// Tolerances above this are flagged as risky (3%).
const HIGH_THRESHOLD_BPS: u32 = 300;

/// Tolerances below this may fail on ordinary price movement (0.1%).
const LOW_THRESHOLD_BPS: u32 = 10;

/// Maximum acceptable shortfall between a quote and the executed amount.
///
/// Turns a quoted amount into the `min_*` floor passed to mint, burn and
/// swap requests.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Amount, SlippageTolerance};
///
/// let tolerance = SlippageTolerance::HALF_PERCENT;
/// assert_eq!(tolerance.minimum_out(Amount::new(10_000)), Ok(Amount::new(9_950)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlippageTolerance(BasisPoints);

impl SlippageTolerance {
    /// 0.1%.
    pub const TENTH_PERCENT: Self = Self(BasisPoints::new(10));

    /// 0.5%.
    pub const HALF_PERCENT: Self = Self(BasisPoints::new(50));

    /// 1%.
    pub const ONE_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a tolerance from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] above 100%.
    pub fn new(bps: BasisPoints) -> Result<Self, AmmError> {
        if !bps.is_valid_percent() {
            return Err(AmmError::InvalidConfiguration(format!(
                "slippage tolerance {bps} exceeds 100%"
            )));
        }
        Ok(Self(bps))
    }

    /// The tolerance in basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Smallest acceptable amount for a `quote`:
    /// `floor(quote * (10_000 - bps) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if `quote` is too large to scale, or
    /// [`AmmError::Underflow`] if the tolerance exceeds 100%.
    pub fn minimum_out(&self, quote: Amount) -> Result<Amount, AmmError> {
        self.0.complement()?.apply(quote, Rounding::Down)
    }

    /// Above 3%: likely to be sandwiched.
    #[must_use]
    pub const fn is_high(&self) -> bool {
        self.0.get() > HIGH_THRESHOLD_BPS
    }

    /// Below 0.1%: likely to revert.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.0.get() < LOW_THRESHOLD_BPS
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bps = self.0.get();
        write!(f, "{}.{:02}%", bps / 100, bps % 100)
    }
}
