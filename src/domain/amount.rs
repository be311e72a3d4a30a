//! Raw token amount with checked arithmetic.

use core::fmt;

use crate::math::U256;

/// A raw token amount in the token's smallest unit (wei, micro-unit, …).
///
/// `Amount` never interprets decimals. A 6-decimal stablecoin and an
/// 18-decimal token are both plain `u128` counts here; scaling is the
/// [`Token`](super::Token)'s business.
///
/// Arithmetic methods are checked and return `None` on overflow or
/// underflow instead of panicking. Products of two
/// amounts go through [`Amount::widening_mul`], which cannot overflow.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(Amount::from_wide(a.widening_mul(&b)), Some(Amount::new(20_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Full 256-bit product of two amounts.
    pub fn widening_mul(&self, other: &Self) -> U256 {
        U256::from(self.0) * U256::from(other.0)
    }

    /// Widens to 256 bits.
    pub fn to_wide(self) -> U256 {
        U256::from(self.0)
    }

    /// Narrows a 256-bit value back to an `Amount`.
    ///
    /// Returns `None` if the value does not fit in `u128`.
    #[must_use]
    pub fn from_wide(value: U256) -> Option<Self> {
        crate::math::narrow(value).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
