//! Construction of pools from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate every configuration invariant during
//! construction: a successfully built pool is in a valid initial state.
//! The registry relies on this when it creates pools on demand.

use crate::error::AmmError;

/// Builds a pool from its configuration type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for ConstantProductPool`
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee fraction is malformed.
    /// - [`AmmError::InvalidConfiguration`] for any other bad parameter.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
