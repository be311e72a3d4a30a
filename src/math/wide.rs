//! 256-bit intermediates for reserve products.
//!
//! Reserves are capped at 112 bits, so every product the pool forms
//! (`reserve0 * reserve1`, `amount * total_liquidity`, the swap formula's
//! `amount_in * retained * reserve_out`) fits in 256 bits without overflow.

use uint::construct_uint;

use crate::domain::Rounding;

construct_uint! {
    /// Unsigned 256-bit integer for intermediate products.
    pub struct U256(4);
}

/// Narrows a 256-bit value to `u128`, `None` if it does not fit.
#[must_use]
pub fn narrow(value: U256) -> Option<u128> {
    if value.bits() > 128 {
        return None;
    }
    Some(value.low_u128())
}

/// `a * b / denominator` with the product held in 256 bits.
///
/// Returns `None` on a zero denominator or if the quotient exceeds `u128`.
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    let quotient = super::div_round_wide(
        U256::from(a) * U256::from(b),
        U256::from(denominator),
        rounding,
    )?;
    narrow(quotient)
}

/// Integer square root, `floor(sqrt(value))`, via Newton's method.
///
/// The result of a 256-bit input always fits in `u128`.
#[must_use]
pub fn isqrt(value: U256) -> u128 {
    if value.is_zero() {
        return 0;
    }
    // Start above the root: 2^ceil(bits/2).
    let mut x = U256::one() << ((value.bits() + 1) / 2);
    loop {
        let y = (x + value / x) >> 1;
        if y >= x {
            break;
        }
        x = y;
    }
    x.low_u128()
}
