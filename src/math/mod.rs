//! Integer arithmetic for pool calculations.
//!
//! Everything is exact integer math: [`CheckedArithmetic`] for
//! overflow-safe operations on domain newtypes, [`div_round`] and
//! [`div_round_wide`] for explicit rounding, and [`U256`] with
//! [`mul_div`] / [`isqrt`] for the 256-bit intermediates of the
//! constant-product formulas. No floating point anywhere.

mod checked;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, div_round_wide};
pub use wide::{isqrt, mul_div, narrow, U256};
