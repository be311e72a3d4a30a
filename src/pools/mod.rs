//! Pool implementations.
//!
//! | Item | Role |
//! |------|------|
//! | [`ConstantProductPool`] | Uniswap V2 style `x · y = k` pool with share accounting |
//! | [`quote_swap_output`] / [`quote_swap_input`] | Pure fee-aware swap pricing |
//! | [`quote`] | Proportional counter-amount at the current reserve ratio |

pub mod constant_product;
mod quote;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::{ConstantProductPool, PoolState, MAX_RESERVE};
pub use quote::{quote, quote_swap_input, quote_swap_output};
