//! Token decimal places.

use crate::error::AmmError;

/// Largest scale whose factor `10^d` still fits in `u128`.
const MAX_DECIMALS: u8 = 38;

/// Number of decimal places of a token's raw unit.
///
/// Decimals are a property of the token, not of the pool: a pool happily
/// pairs a 6-decimal stablecoin with an 18-decimal token. Any scale from 0
/// to 38 is accepted (the widest whose factor fits in `u128`).
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.scale_up(1), Some(1_000_000));
/// assert_eq!(d.split(1_500_000), (1, 500_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Six decimal places (USDC-style stable tokens).
    pub const SIX: Self = Self(6);

    /// Eighteen decimal places (EVM native-style tokens).
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 38.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=38"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts whole units to raw units, `None` on overflow.
    #[must_use]
    pub const fn scale_up(&self, whole: u128) -> Option<u128> {
        whole.checked_mul(self.factor())
    }

    /// Splits raw units into `(whole, fractional)` parts.
    #[must_use]
    pub const fn split(&self, raw: u128) -> (u128, u128) {
        let factor = self.factor();
        (raw / factor, raw % factor)
    }
}
