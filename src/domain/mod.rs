//! Fundamental domain value types used throughout the engine.
//!
//! Tokens and pairs, raw amounts and liquidity shares, the fee fraction,
//! caller-supplied time, and the request/outcome records of the three pool
//! mutations. All types are newtypes or plain records with validated
//! constructors where an invariant exists.

mod amount;
mod basis_points;
mod deadline;
mod decimals;
mod fee_rate;
mod liquidity;
mod outcomes;
mod requests;
mod rounding;
mod slippage;
mod swap_direction;
mod token;
mod token_address;
mod token_pair;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use deadline::{Deadline, Timestamp};
pub use decimals::Decimals;
pub use fee_rate::FeeRate;
pub use liquidity::Liquidity;
pub use outcomes::{BurnOutcome, MintOutcome, SwapOutcome};
pub use requests::{BurnRequest, MintRequest, SwapRequest};
pub use rounding::Rounding;
pub use slippage::SlippageTolerance;
pub use swap_direction::SwapDirection;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::{PairId, TokenPair};
