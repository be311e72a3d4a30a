//! Liquidity-share units.

use core::fmt;

/// Liquidity-share units of a pool (the LP token balance).
///
/// Distinct from [`Amount`](super::Amount): an amount counts one token,
/// while liquidity counts proportional ownership of *both* reserves.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
