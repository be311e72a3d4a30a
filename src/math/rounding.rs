//! Rounding helpers for integer division.
//!
//! [`div_round`] divides `u128` values and [`div_round_wide`] divides the
//! 256-bit intermediates the pool forms, both with an explicit
//! [`Rounding`] direction.
//!
//! # Convention
//!
//! The pool always rounds in its own favour: outputs, minted liquidity and
//! burn payouts round down; the reverse quote's required input and the
//! reported fee round up.
//!
//! # Examples
//!
//! ```
//! use bumdex_amm::domain::Rounding;
//! use bumdex_amm::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use super::U256;
use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a remainder implies denominator > 1.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

/// 256-bit counterpart of [`div_round`].
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_mod(denominator);
    match rounding {
        Rounding::Up if !r.is_zero() => Some(q + U256::one()),
        _ => Some(q),
    }
}
