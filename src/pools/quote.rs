//! Pure constant-product quoting.
//!
//! These functions read nothing but their arguments, so they serve both the
//! pool (which feeds them its reserves) and multi-hop routing (which chains
//! them over several pools' reserves).
//!
//! All products are formed in 256 bits; a quote that would not fit back
//! into `u128` fails with [`AmmError::Overflow`].

use crate::domain::{Amount, FeeRate, Rounding};
use crate::error::AmmError;
use crate::math::{mul_div, U256};

/// Output of an exact-input swap against `(reserve_in, reserve_out)`.
///
/// ```text
/// in_after_fee = amount_in * (den - num)
/// amount_out   = in_after_fee * reserve_out / (reserve_in * den + in_after_fee)
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidFee`] for a malformed fee.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Amount, FeeRate};
/// use bumdex_amm::pools::quote_swap_output;
///
/// let out = quote_swap_output(
///     Amount::new(1_000_000),
///     Amount::new(5_000_000_000_000_000_000),
///     Amount::new(100_000),
///     FeeRate::STANDARD,
/// );
/// assert_eq!(out, Ok(Amount::new(453_305_446_940_074_565)));
/// ```
pub fn quote_swap_output(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee: FeeRate,
) -> Result<Amount, AmmError> {
    fee.validate()?;
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }

    let in_after_fee = amount_in.to_wide() * U256::from(fee.retained());
    let numerator = in_after_fee
        .checked_mul(reserve_out.to_wide())
        .ok_or(AmmError::Overflow("swap numerator overflow"))?;
    let denominator = (reserve_in.to_wide() * U256::from(fee.denominator()))
        .checked_add(in_after_fee)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;

    let amount_out = numerator / denominator;
    tracing::trace!(%reserve_in, %reserve_out, %amount_in, %fee, %amount_out, "quoted swap output");
    Amount::from_wide(amount_out).ok_or(AmmError::Overflow("swap output exceeds u128"))
}

/// Input needed to receive exactly `amount_out` from `(reserve_in, reserve_out)`.
///
/// ```text
/// amount_in = reserve_in * amount_out * den / ((reserve_out - amount_out) * (den - num)) + 1
/// ```
///
/// The `+ 1` rounds in the pool's favour, so feeding the result back into
/// [`quote_swap_output`] yields at least `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidFee`] for a malformed fee.
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would drain `reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn quote_swap_input(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_out: Amount,
    fee: FeeRate,
) -> Result<Amount, AmmError> {
    fee.validate()?;
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = reserve_in
        .widening_mul(&amount_out)
        .checked_mul(U256::from(fee.denominator()))
        .ok_or(AmmError::Overflow("swap input numerator overflow"))?;
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = U256::from(remaining) * U256::from(fee.retained());

    let amount_in = (numerator / denominator)
        .checked_add(U256::one())
        .ok_or(AmmError::Overflow("swap input overflow"))?;
    Amount::from_wide(amount_in).ok_or(AmmError::Overflow("swap input exceeds u128"))
}

/// Amount of token B matching `amount_a` at the reserve ratio:
/// `floor(amount_a * reserve_b / reserve_a)`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get(), Rounding::Down)
        .map(Amount::new)
        .ok_or(AmmError::Overflow("proportional quote exceeds u128"))
}
