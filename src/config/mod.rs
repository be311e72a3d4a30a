//! Declarative configuration.
//!
//! [`PoolConfig`] holds the immutable parameters of one pool and is
//! consumed through [`FromConfig`](crate::traits::FromConfig).
//! [`EngineConfig`] carries engine-wide defaults and can be loaded from a
//! TOML file.

mod constant_product;
mod engine;

pub use constant_product::{PoolConfig, DEFAULT_MINIMUM_LIQUIDITY};
pub use engine::EngineConfig;
