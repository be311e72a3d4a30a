//! Pool lookup and router-style operations across pairs.
//!
//! The [`PoolRegistry`] owns every pool, keyed by the canonical
//! [`PairId`](crate::domain::PairId), so `(a, b)` and `(b, a)` always
//! resolve to the same pool. It accepts tokens in caller order and
//! creates pools on first deposit.
//!
//! # Usage
//!
//! ```rust
//! use bumdex_amm::domain::{
//!     Amount, Deadline, Decimals, MintRequest, Timestamp, Token, TokenAddress,
//! };
//! use bumdex_amm::registry::PoolRegistry;
//!
//! let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
//! let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
//! let registry = PoolRegistry::default();
//!
//! let now = Timestamp::new(1_700_000_000);
//! let deadline = Deadline::after(now, 600);
//! registry
//!     .add_liquidity(
//!         wvery,
//!         vldemo,
//!         &MintRequest::new(Amount::new(1_000_000), Amount::new(2_000_000), deadline),
//!         now,
//!     )
//!     .expect("first deposit");
//!
//! let amounts = registry
//!     .quote_amounts_out(Amount::new(10_000), &[wvery, vldemo])
//!     .expect("quoted");
//! assert_eq!(amounts[1], Amount::new(19_743));
//! ```

mod pool_registry;

pub use pool_registry::{PoolRegistry, SharedPool};
