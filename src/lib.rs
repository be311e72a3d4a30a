//! # Bumdex AMM
//!
//! Constant-product pool accounting engine: liquidity share minting and
//! burning, fee-aware swap pricing, slippage and deadline enforcement.
//!
//! The engine is synchronous and deterministic. Callers supply every
//! input, including the current [`Timestamp`](domain::Timestamp), and
//! receive a typed outcome or an [`AmmError`](error::AmmError). Every
//! operation either applies completely or leaves the pool untouched.
//!
//! ## Create a pool and execute a swap
//!
//! ```rust
//! use bumdex_amm::config::PoolConfig;
//! use bumdex_amm::domain::{
//!     Amount, Deadline, Decimals, MintRequest, SwapDirection, SwapRequest,
//!     Timestamp, Token, TokenAddress, TokenPair,
//! };
//! use bumdex_amm::pools::ConstantProductPool;
//! use bumdex_amm::traits::{FromConfig, LiquidityPool, SwapPool};
//!
//! // 1. Define two tokens
//! let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
//! let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
//!
//! // 2. Build an empty pool with the standard 0.3% fee
//! let pair = TokenPair::new(wvery, vldemo).expect("distinct tokens");
//! let mut pool = ConstantProductPool::from_config(&PoolConfig::standard(pair))
//!     .expect("pool created");
//!
//! // 3. Seed it
//! let now = Timestamp::new(1_700_000_000);
//! let deadline = Deadline::after(now, 600);
//! let minted = pool
//!     .quote_and_mint(
//!         &MintRequest::new(Amount::new(1_000_000), Amount::new(2_000_000), deadline),
//!         now,
//!     )
//!     .expect("first mint");
//! assert_eq!(minted.liquidity.get(), 1_413_213);
//!
//! // 4. Sell 10 000 units of token0
//! let request = SwapRequest::new(
//!     Amount::new(10_000),
//!     Amount::ZERO,
//!     SwapDirection::ZeroForOne,
//!     deadline,
//! );
//! let outcome = pool.swap(&request, now).expect("swap succeeded");
//! assert_eq!(outcome.amount_out, Amount::new(19_743));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  tokens in caller order, Timestamp, Deadline
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   Registry    │  PairId → Arc<Mutex<ConstantProductPool>>
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves, total liquidity, x · y = k
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ Domain + Math │  Amount, Liquidity, FeeRate, U256, mul_div, isqrt
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types, requests and outcomes |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and TOML-loadable [`EngineConfig`](config::EngineConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and pure quote functions |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) keyed by canonical pair |
//! | [`math`]   | Checked arithmetic, rounding division, 256-bit helpers |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
