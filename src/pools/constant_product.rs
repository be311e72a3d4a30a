//! Constant-product pool accounting (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves of
//! the two tokens. The fee is taken from the input before pricing and stays
//! in the pool, so `k` grows with every swap.
//!
//! # Swap Algorithm (token0 → token1)
//!
//! 1. `in_after_fee = amount_in × (den − num)`
//! 2. `amount_out = in_after_fee × reserve1 / (reserve0 × den + in_after_fee)`
//! 3. `reserve0 += amount_in`, `reserve1 −= amount_out`
//! 4. reject unless `reserve0' × reserve1' ≥ reserve0 × reserve1`
//!
//! # Liquidity
//!
//! The first deposit mints `√(amount0 × amount1)` shares, of which
//! `minimum_liquidity` is locked forever. Later deposits are clipped to the
//! reserve ratio and mint `min(Δ0 × L / R0, Δ1 × L / R1)`.
//!
//! # All-or-nothing
//!
//! Every mutation first builds the complete next state from `&self`, then
//! assigns it in one step. An `Err` therefore never leaves a partial write.

use tracing::{debug, warn};

use super::quote::{quote_swap_input, quote_swap_output};
use crate::config::PoolConfig;
use crate::domain::{
    Amount, BurnOutcome, BurnRequest, FeeRate, Liquidity, MintOutcome, MintRequest, Rounding,
    SwapDirection, SwapOutcome, SwapRequest, Timestamp, Token, TokenPair,
};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div, CheckedArithmetic, U256};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// Largest reserve a pool holds: `2^112 − 1`, the pair contract's `uint112`.
///
/// Keeping both reserves within 112 bits keeps every product the pool forms
/// within 256 bits.
pub const MAX_RESERVE: Amount = Amount::new((1u128 << 112) - 1);

/// Macro-state of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// No liquidity outstanding; only a first mint is possible.
    Empty,
    /// Liquidity outstanding; every operation is available.
    Active,
}

/// A constant-product pool (`x · y = k`) for one token pair.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`]; becomes
/// [`PoolState::Active`] on the first successful mint.
///
/// # State
///
/// - `reserve0` / `reserve1`: token balances in raw units, fees included
/// - `total_liquidity`: outstanding shares, including the locked minimum
/// - `locked_liquidity`: shares credited to the null account on first mint
///
/// # Example
///
/// ```rust
/// use bumdex_amm::config::PoolConfig;
/// use bumdex_amm::domain::{
///     Amount, Deadline, Decimals, MintRequest, SwapDirection, SwapRequest, Timestamp,
///     Token, TokenAddress, TokenPair,
/// };
/// use bumdex_amm::pools::ConstantProductPool;
/// use bumdex_amm::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
/// let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
/// let pair = TokenPair::new(wvery, vldemo).expect("distinct");
///
/// let mut pool = ConstantProductPool::from_config(&PoolConfig::standard(pair))
///     .expect("pool created");
///
/// let now = Timestamp::new(1_700_000_000);
/// let deadline = Deadline::after(now, 600);
/// pool.quote_and_mint(
///     &MintRequest::new(Amount::new(1_000_000), Amount::new(5_000_000_000_000_000_000), deadline),
///     now,
/// )
/// .expect("first mint");
///
/// let request = SwapRequest::new(
///     Amount::new(100_000),
///     Amount::ZERO,
///     SwapDirection::ZeroForOne,
///     deadline,
/// );
/// let outcome = pool.swap(&request, now).expect("swap ok");
/// assert_eq!(outcome.amount_out, Amount::new(453_305_446_940_074_565));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    token_pair: TokenPair,
    fee: FeeRate,
    minimum_liquidity: Liquidity,
    reserve0: Amount,
    reserve1: Amount,
    total_liquidity: Liquidity,
    locked_liquidity: Liquidity,
}

impl ConstantProductPool {
    /// Returns the current reserve of token0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns the current reserve of token1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Liquidity locked on first mint and never redeemable.
    #[must_use]
    pub const fn locked_liquidity(&self) -> Liquidity {
        self.locked_liquidity
    }

    /// Liquidity locked by the first mint of this pool.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Liquidity {
        self.minimum_liquidity
    }

    /// `Empty` while no liquidity is outstanding.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.total_liquidity.is_zero() {
            PoolState::Empty
        } else {
            PoolState::Active
        }
    }

    /// `reserve0 × reserve1` in 256 bits.
    #[must_use]
    pub fn k(&self) -> U256 {
        self.reserve0.widening_mul(&self.reserve1)
    }

    /// `(reserve of token, reserve of the other token)`.
    ///
    /// The pair is the exact integer spot price of `token` in units of the
    /// other token: `other_reserve / token_reserve`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn reserves_for(&self, token: &Token) -> Result<(Amount, Amount), AmmError> {
        let direction = self.token_pair.direction_for(token)?;
        Ok(direction.orient((self.reserve0, self.reserve1)))
    }

    /// Input needed to receive exactly `amount_out` in `direction`.
    ///
    /// # Errors
    ///
    /// See [`quote_swap_input`].
    pub fn quote_swap_input(
        &self,
        amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = direction.orient((self.reserve0, self.reserve1));
        quote_swap_input(reserve_in, reserve_out, amount_out, self.fee)
    }

    /// Previews a mint without changing the pool.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::quote_and_mint`].
    pub fn quote_mint(
        &self,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<MintOutcome, AmmError> {
        self.plan_mint(request, now).map(|(outcome, _)| outcome)
    }

    /// Previews a burn without changing the pool.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::burn`].
    pub fn quote_burn(
        &self,
        request: &BurnRequest,
        now: Timestamp,
    ) -> Result<BurnOutcome, AmmError> {
        self.plan_burn(request, now).map(|(outcome, _)| outcome)
    }

    fn check_reserve(reserve: Amount) -> Result<Amount, AmmError> {
        if reserve > MAX_RESERVE {
            return Err(AmmError::Overflow("reserve exceeds 112 bits"));
        }
        Ok(reserve)
    }

    fn check_minimum(side: &'static str, actual: Amount, minimum: Amount) -> Result<(), AmmError> {
        if actual < minimum {
            return Err(AmmError::SlippageExceeded {
                side,
                actual,
                minimum,
            });
        }
        Ok(())
    }

    /// Accepted amounts for a deposit: the desired amounts on an empty pool,
    /// otherwise the largest pair at the current reserve ratio.
    fn accepted_amounts(&self, request: &MintRequest) -> Result<(Amount, Amount), AmmError> {
        if self.total_liquidity.is_zero() {
            return Ok((request.desired0, request.desired1));
        }
        // A quotient past u128 is certainly above desired1.
        let optimal1 = mul_div(
            request.desired0.get(),
            self.reserve1.get(),
            self.reserve0.get(),
            Rounding::Down,
        )
        .map(Amount::new);
        if let Some(optimal1) = optimal1.filter(|v| *v <= request.desired1) {
            return Ok((request.desired0, optimal1));
        }
        let optimal0 = mul_div(
            request.desired1.get(),
            self.reserve0.get(),
            self.reserve1.get(),
            Rounding::Down,
        )
        .map(Amount::new)
        .ok_or(AmmError::Overflow("optimal amount0 overflow"))?;
        Ok((optimal0, request.desired1))
    }

    /// Share of `total_liquidity` that `amount` represents against `reserve`.
    fn share_of(&self, amount: Amount, reserve: Amount) -> Result<u128, AmmError> {
        mul_div(
            amount.get(),
            self.total_liquidity.get(),
            reserve.get(),
            Rounding::Down,
        )
        .ok_or(AmmError::Overflow("minted liquidity overflow"))
    }

    fn plan_mint(
        &self,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<(MintOutcome, Self), AmmError> {
        request.deadline.check(now)?;

        let (amount0, amount1) = self.accepted_amounts(request)?;
        let reserve0 = Self::check_reserve(self.reserve0.safe_add(&amount0)?)?;
        let reserve1 = Self::check_reserve(self.reserve1.safe_add(&amount1)?)?;

        let (minted, total_liquidity, locked_liquidity) = if self.total_liquidity.is_zero() {
            let root = Liquidity::new(isqrt(amount0.widening_mul(&amount1)));
            if root <= self.minimum_liquidity {
                return Err(AmmError::InsufficientInitialLiquidity {
                    root,
                    minimum: self.minimum_liquidity,
                });
            }
            Self::check_minimum("amount0", amount0, request.min0)?;
            Self::check_minimum("amount1", amount1, request.min1)?;
            (
                root.safe_sub(&self.minimum_liquidity)?,
                root,
                self.locked_liquidity.safe_add(&self.minimum_liquidity)?,
            )
        } else {
            Self::check_minimum("amount0", amount0, request.min0)?;
            Self::check_minimum("amount1", amount1, request.min1)?;
            let minted = Liquidity::new(core::cmp::min(
                self.share_of(amount0, self.reserve0)?,
                self.share_of(amount1, self.reserve1)?,
            ));
            if minted.is_zero() {
                return Err(AmmError::InsufficientLiquidityMinted);
            }
            (
                minted,
                self.total_liquidity.safe_add(&minted)?,
                self.locked_liquidity,
            )
        };

        let outcome = MintOutcome {
            amount0,
            amount1,
            liquidity: minted,
        };
        let next = Self {
            reserve0,
            reserve1,
            total_liquidity,
            locked_liquidity,
            ..*self
        };
        Ok((outcome, next))
    }

    fn plan_burn(
        &self,
        request: &BurnRequest,
        now: Timestamp,
    ) -> Result<(BurnOutcome, Self), AmmError> {
        request.deadline.check(now)?;

        let liquidity = request.liquidity;
        if liquidity > request.owned {
            return Err(AmmError::InsufficientLiquidityOwned {
                requested: liquidity,
                available: request.owned,
            });
        }
        if liquidity > self.total_liquidity {
            return Err(AmmError::InsufficientLiquidityOwned {
                requested: liquidity,
                available: self.total_liquidity,
            });
        }
        if liquidity.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        let payout = |reserve: Amount| {
            mul_div(
                liquidity.get(),
                reserve.get(),
                self.total_liquidity.get(),
                Rounding::Down,
            )
            .map(Amount::new)
            .ok_or(AmmError::DivisionByZero)
        };
        let amount0 = payout(self.reserve0)?;
        let amount1 = payout(self.reserve1)?;
        if amount0.is_zero() || amount1.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        Self::check_minimum("amount0", amount0, request.min0)?;
        Self::check_minimum("amount1", amount1, request.min1)?;

        let total_liquidity = self.total_liquidity.safe_sub(&liquidity)?;
        let locked_liquidity = if total_liquidity.is_zero() {
            Liquidity::ZERO
        } else {
            self.locked_liquidity
        };
        let next = Self {
            reserve0: self.reserve0.safe_sub(&amount0)?,
            reserve1: self.reserve1.safe_sub(&amount1)?,
            total_liquidity,
            locked_liquidity,
            ..*self
        };
        Ok((BurnOutcome { amount0, amount1 }, next))
    }

    fn plan_swap(
        &self,
        request: &SwapRequest,
        now: Timestamp,
    ) -> Result<(SwapOutcome, Self), AmmError> {
        request.deadline.check(now)?;

        let (reserve_in, reserve_out) = request.direction.orient((self.reserve0, self.reserve1));
        let amount_out = quote_swap_output(reserve_in, reserve_out, request.amount_in, self.fee)?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        Self::check_minimum("amount_out", amount_out, request.min_amount_out)?;

        let new_in = Self::check_reserve(reserve_in.safe_add(&request.amount_in)?)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        if new_in.widening_mul(&new_out) < reserve_in.widening_mul(&reserve_out) {
            warn!(
                pair = %self.token_pair.id(),
                direction = %request.direction,
                amount_in = %request.amount_in,
                %amount_out,
                "swap rejected: constant product decreased"
            );
            return Err(AmmError::InvariantViolation("reserve product decreased"));
        }

        let (reserve0, reserve1) = request.direction.orient((new_in, new_out));
        let outcome = SwapOutcome {
            direction: request.direction,
            amount_in: request.amount_in,
            amount_out,
            fee: self.fee.fee_amount(request.amount_in)?,
        };
        Ok((
            outcome,
            Self {
                reserve0,
                reserve1,
                ..*self
            },
        ))
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            token_pair: *config.token_pair(),
            fee: config.fee(),
            minimum_liquidity: config.minimum_liquidity(),
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            total_liquidity: Liquidity::ZERO,
            locked_liquidity: Liquidity::ZERO,
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes an exact-input swap.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::InsufficientLiquidity`] on an empty pool.
    /// - [`AmmError::InsufficientInputAmount`] for a zero input.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_amount_out`.
    /// - [`AmmError::Overflow`] if the input reserve would exceed [`MAX_RESERVE`].
    /// - [`AmmError::InvariantViolation`] if the reserve product would shrink.
    fn swap(&mut self, request: &SwapRequest, now: Timestamp) -> Result<SwapOutcome, AmmError> {
        let (outcome, next) = self.plan_swap(request, now)?;
        *self = next;
        debug!(
            pair = %self.token_pair.id(),
            direction = %outcome.direction,
            amount_in = %outcome.amount_in,
            amount_out = %outcome.amount_out,
            fee = %outcome.fee,
            reserve0 = %self.reserve0,
            reserve1 = %self.reserve1,
            "swap executed"
        );
        Ok(outcome)
    }

    fn quote_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = direction.orient((self.reserve0, self.reserve1));
        quote_swap_output(reserve_in, reserve_out, amount_in, self.fee)
    }

    fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Deposits liquidity.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit does
    ///   not exceed the minimum liquidity.
    /// - [`AmmError::SlippageExceeded`] if an accepted amount is below its floor.
    /// - [`AmmError::InsufficientLiquidityMinted`] if a later deposit mints nothing.
    /// - [`AmmError::Overflow`] if a reserve would exceed [`MAX_RESERVE`].
    fn quote_and_mint(
        &mut self,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<MintOutcome, AmmError> {
        let (outcome, next) = self.plan_mint(request, now)?;
        *self = next;
        debug!(
            pair = %self.token_pair.id(),
            amount0 = %outcome.amount0,
            amount1 = %outcome.amount1,
            liquidity = %outcome.liquidity,
            total_liquidity = %self.total_liquidity,
            "liquidity minted"
        );
        Ok(outcome)
    }

    /// Redeems liquidity for a proportional share of both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::InsufficientLiquidityOwned`] if `liquidity` exceeds the
    ///   caller's balance or the pool's total.
    /// - [`AmmError::InsufficientLiquidityBurned`] for zero liquidity or a
    ///   zero payout on either side.
    /// - [`AmmError::SlippageExceeded`] if a payout is below its floor.
    fn burn(&mut self, request: &BurnRequest, now: Timestamp) -> Result<BurnOutcome, AmmError> {
        let (outcome, next) = self.plan_burn(request, now)?;
        *self = next;
        debug!(
            pair = %self.token_pair.id(),
            liquidity = %request.liquidity,
            amount0 = %outcome.amount0,
            amount1 = %outcome.amount1,
            total_liquidity = %self.total_liquidity,
            "liquidity burned"
        );
        Ok(outcome)
    }

    fn reserves(&self) -> (Amount, Amount) {
        (self.reserve0, self.reserve1)
    }

    fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Deadline, Decimals, TokenAddress};

    // -- helpers --------------------------------------------------------------

    fn wvery() -> Token {
        Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX)
    }

    fn vldemo() -> Token {
        Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN)
    }

    fn unknown_token() -> Token {
        let Ok(d) = Decimals::new(8) else {
            panic!("valid decimals");
        };
        Token::new(TokenAddress::from_bytes([99u8; 32]), d)
    }

    fn make_pair() -> TokenPair {
        let Ok(pair) = TokenPair::new(wvery(), vldemo()) else {
            panic!("expected valid pair");
        };
        pair
    }

    fn now() -> Timestamp {
        Timestamp::new(1_700_000_000)
    }

    fn deadline() -> Deadline {
        Deadline::after(now(), 600)
    }

    fn empty_pool_with(fee: FeeRate) -> ConstantProductPool {
        let Ok(cfg) = PoolConfig::new(make_pair(), fee, Liquidity::new(1_000)) else {
            panic!("expected valid config");
        };
        let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("expected valid pool");
        };
        pool
    }

    fn make_pool(r0: u128, r1: u128) -> ConstantProductPool {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let request = MintRequest::new(Amount::new(r0), Amount::new(r1), deadline());
        let Ok(_) = pool.quote_and_mint(&request, now()) else {
            panic!("expected first mint to succeed");
        };
        pool
    }

    fn swap_request(amount_in: u128, min_out: u128, direction: SwapDirection) -> SwapRequest {
        SwapRequest::new(
            Amount::new(amount_in),
            Amount::new(min_out),
            direction,
            deadline(),
        )
    }

    // -- FromConfig -----------------------------------------------------------

    #[test]
    fn from_config_starts_empty() {
        let pool = empty_pool_with(FeeRate::STANDARD);
        assert_eq!(pool.state(), PoolState::Empty);
        assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
        assert!(pool.total_liquidity().is_zero());
        assert_eq!(pool.fee(), FeeRate::STANDARD);
        assert_eq!(pool.minimum_liquidity(), Liquidity::new(1_000));
    }

    // -- first mint -----------------------------------------------------------

    #[test]
    fn first_mint_locks_minimum() {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let request = MintRequest::new(Amount::new(1_000_000), Amount::new(2_000_000), deadline());
        let Ok(outcome) = pool.quote_and_mint(&request, now()) else {
            panic!("expected Ok");
        };
        // floor(sqrt(2e12)) = 1_414_213
        assert_eq!(outcome.liquidity, Liquidity::new(1_413_213));
        assert_eq!(outcome.amount0, Amount::new(1_000_000));
        assert_eq!(outcome.amount1, Amount::new(2_000_000));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_414_213));
        assert_eq!(pool.locked_liquidity(), Liquidity::new(1_000));
        assert_eq!(pool.state(), PoolState::Active);
    }

    #[test]
    fn first_mint_at_floor_rejected() {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let request = MintRequest::new(Amount::new(1_000), Amount::new(1_000), deadline());
        let result = pool.quote_and_mint(&request, now());
        assert_eq!(
            result,
            Err(AmmError::InsufficientInitialLiquidity {
                root: Liquidity::new(1_000),
                minimum: Liquidity::new(1_000),
            })
        );
        assert_eq!(pool, empty_pool_with(FeeRate::STANDARD));
    }

    #[test]
    fn first_mint_one_sided_rejected() {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let request = MintRequest::new(Amount::new(1_000_000), Amount::ZERO, deadline());
        let result = pool.quote_and_mint(&request, now());
        assert!(matches!(
            result,
            Err(AmmError::InsufficientInitialLiquidity { .. })
        ));
    }

    #[test]
    fn first_mint_above_reserve_cap_rejected() {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let Some(too_big) = MAX_RESERVE.checked_add(&Amount::new(1)) else {
            panic!("cap + 1 fits in u128");
        };
        let request = MintRequest::new(too_big, Amount::new(1_000_000), deadline());
        let result = pool.quote_and_mint(&request, now());
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }

    // -- subsequent mint ------------------------------------------------------

    #[test]
    fn mint_clips_token1_to_ratio() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = MintRequest::new(Amount::new(500_000), Amount::new(2_000_000), deadline());
        let Ok(outcome) = pool.quote_and_mint(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(500_000));
        assert_eq!(outcome.amount1, Amount::new(1_000_000));
        assert_eq!(outcome.liquidity, Liquidity::new(707_106));
        assert_eq!(
            pool.reserves(),
            (Amount::new(1_500_000), Amount::new(3_000_000))
        );
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_414_213 + 707_106));
    }

    #[test]
    fn mint_clips_token0_to_ratio() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = MintRequest::new(Amount::new(1_000_000), Amount::new(500_000), deadline());
        let Ok(outcome) = pool.quote_and_mint(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(250_000));
        assert_eq!(outcome.amount1, Amount::new(500_000));
        assert_eq!(outcome.liquidity, Liquidity::new(353_553));
    }

    #[test]
    fn mint_slippage_on_clipped_side() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let before = pool.clone();
        let request = MintRequest::new(Amount::new(1_000_000), Amount::new(500_000), deadline())
            .with_minimums(Amount::new(300_000), Amount::ZERO);
        let result = pool.quote_and_mint(&request, now());
        assert_eq!(
            result,
            Err(AmmError::SlippageExceeded {
                side: "amount0",
                actual: Amount::new(250_000),
                minimum: Amount::new(300_000),
            })
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn mint_dust_mints_nothing() {
        let mut pool = make_pool(1_000_000, 2_000_000_000_000);
        let request = MintRequest::new(Amount::ZERO, Amount::new(1), deadline());
        let result = pool.quote_and_mint(&request, now());
        assert!(matches!(result, Err(AmmError::InsufficientLiquidityMinted)));
    }

    #[test]
    fn mint_clips_token0_when_optimal1_exceeds_u128() {
        // Ratio 2^100 token1 per token0: desired0 · r1 / r0 = 2^130.
        let mut pool = make_pool(1 << 10, 1 << 110);
        assert_eq!(pool.total_liquidity(), Liquidity::new(1 << 60));
        let request = MintRequest::new(Amount::new(1 << 30), Amount::new(1 << 105), deadline());
        let Ok(outcome) = pool.quote_and_mint(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(32));
        assert_eq!(outcome.amount1, Amount::new(1 << 105));
        assert_eq!(outcome.liquidity, Liquidity::new(1 << 55));
        assert_eq!(
            pool.reserves(),
            (Amount::new((1 << 10) + 32), Amount::new((1 << 110) + (1 << 105)))
        );
    }

    #[test]
    fn mint_uneven_ratio_clips_token1() {
        // Ratio 2^-100: a tiny token1 amount matches a large token0 deposit.
        let mut pool = make_pool(1 << 110, 1 << 10);
        let request = MintRequest::new(Amount::new(1 << 105), Amount::new(1 << 30), deadline());
        let Ok(outcome) = pool.quote_and_mint(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(1 << 105));
        assert_eq!(outcome.amount1, Amount::new(32));
        assert_eq!(outcome.liquidity, Liquidity::new(1 << 55));
    }

    #[test]
    fn share_overflow_reports_overflow() {
        let pool = make_pool(1 << 10, 1 << 110);
        let result = pool.share_of(Amount::MAX, Amount::new(1));
        assert_eq!(result, Err(AmmError::Overflow("minted liquidity overflow")));
    }

    #[test]
    fn quote_mint_does_not_mutate() {
        let pool = make_pool(1_000_000, 2_000_000);
        let request = MintRequest::new(Amount::new(500_000), Amount::new(2_000_000), deadline());
        let Ok(outcome) = pool.quote_mint(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.liquidity, Liquidity::new(707_106));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_414_213));
    }

    // -- burn -----------------------------------------------------------------

    #[test]
    fn burn_proportional() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = BurnRequest::new(
            Liquidity::new(1_413_213),
            Liquidity::new(1_413_213),
            deadline(),
        );
        let Ok(outcome) = pool.burn(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(999_292));
        assert_eq!(outcome.amount1, Amount::new(1_998_585));
        assert_eq!(pool.total_liquidity(), Liquidity::new(1_000));
        assert_eq!(pool.reserves(), (Amount::new(708), Amount::new(1_415)));
        assert_eq!(pool.state(), PoolState::Active);
    }

    #[test]
    fn burn_more_than_owned() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = BurnRequest::new(Liquidity::new(10), Liquidity::new(9), deadline());
        assert_eq!(
            pool.burn(&request, now()),
            Err(AmmError::InsufficientLiquidityOwned {
                requested: Liquidity::new(10),
                available: Liquidity::new(9),
            })
        );
    }

    #[test]
    fn burn_more_than_total() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = BurnRequest::new(
            Liquidity::new(2_000_000),
            Liquidity::new(2_000_000),
            deadline(),
        );
        let result = pool.burn(&request, now());
        assert!(matches!(
            result,
            Err(AmmError::InsufficientLiquidityOwned { .. })
        ));
    }

    #[test]
    fn burn_zero_rejected() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = BurnRequest::new(Liquidity::ZERO, Liquidity::new(5), deadline());
        let result = pool.burn(&request, now());
        assert!(matches!(result, Err(AmmError::InsufficientLiquidityBurned)));
    }

    #[test]
    fn burn_dust_rejected() {
        // 1 share of 2_236_067_977_499 against 1_000_000 token0 pays 0 token0.
        let mut pool = make_pool(1_000_000, 5_000_000_000_000_000_000);
        let request = BurnRequest::new(Liquidity::new(1), Liquidity::new(1), deadline());
        let result = pool.burn(&request, now());
        assert!(matches!(result, Err(AmmError::InsufficientLiquidityBurned)));
    }

    #[test]
    fn burn_slippage() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let before = pool.clone();
        let request = BurnRequest::new(
            Liquidity::new(1_413_213),
            Liquidity::new(1_413_213),
            deadline(),
        )
        .with_minimums(Amount::new(999_292), Amount::new(1_998_586));
        let result = pool.burn(&request, now());
        assert!(matches!(
            result,
            Err(AmmError::SlippageExceeded { side: "amount1", .. })
        ));
        assert_eq!(pool, before);
    }

    #[test]
    fn burn_everything_empties_pool() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let total = pool.total_liquidity();
        let request = BurnRequest::new(total, total, deadline());
        let Ok(outcome) = pool.burn(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount0, Amount::new(1_000_000));
        assert_eq!(outcome.amount1, Amount::new(2_000_000));
        assert_eq!(pool.state(), PoolState::Empty);
        assert!(pool.locked_liquidity().is_zero());
        assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
    }

    // -- swap -----------------------------------------------------------------

    #[test]
    fn swap_concrete_scenario() {
        let mut pool = make_pool(1_000_000, 5_000_000_000_000_000_000);
        let k_before = pool.k();
        let request = swap_request(100_000, 0, SwapDirection::ZeroForOne);
        let Ok(outcome) = pool.swap(&request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.amount_out, Amount::new(453_305_446_940_074_565));
        assert_eq!(outcome.fee, Amount::new(300));
        assert_eq!(
            pool.reserves(),
            (
                Amount::new(1_100_000),
                Amount::new(5_000_000_000_000_000_000 - 453_305_446_940_074_565)
            )
        );
        assert!(pool.k() > k_before);
    }

    #[test]
    fn swap_slippage_by_one_unit() {
        let mut pool = make_pool(1_000_000, 5_000_000_000_000_000_000);
        let before = pool.clone();
        let request = swap_request(100_000, 453_305_446_940_074_566, SwapDirection::ZeroForOne);
        assert_eq!(
            pool.swap(&request, now()),
            Err(AmmError::SlippageExceeded {
                side: "amount_out",
                actual: Amount::new(453_305_446_940_074_565),
                minimum: Amount::new(453_305_446_940_074_566),
            })
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn swap_reverse_direction() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = swap_request(10_000, 0, SwapDirection::OneForZero);
        let Ok(outcome) = pool.swap(&request, now()) else {
            panic!("expected Ok");
        };
        // 9_970_000 * 1_000_000 / (2_000_000_000 + 9_970_000) = 4960
        assert_eq!(outcome.amount_out, Amount::new(4_960));
        assert_eq!(pool.reserve1(), Amount::new(2_010_000));
        assert_eq!(pool.reserve0(), Amount::new(995_040));
    }

    #[test]
    fn swap_on_empty_pool() {
        let mut pool = empty_pool_with(FeeRate::STANDARD);
        let result = pool.swap(&swap_request(1_000, 0, SwapDirection::ZeroForOne), now());
        assert!(matches!(result, Err(AmmError::InsufficientLiquidity)));
    }

    #[test]
    fn swap_zero_input() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let result = pool.swap(&swap_request(0, 0, SwapDirection::ZeroForOne), now());
        assert!(matches!(result, Err(AmmError::InsufficientInputAmount)));
    }

    #[test]
    fn swap_output_rounds_to_zero() {
        let mut pool = make_pool(2_000_000_000_000, 1_000_000);
        let result = pool.swap(&swap_request(1, 0, SwapDirection::ZeroForOne), now());
        assert!(matches!(result, Err(AmmError::InsufficientOutputAmount)));
    }

    #[test]
    fn swap_input_reserve_cap() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let request = SwapRequest::new(
            MAX_RESERVE,
            Amount::ZERO,
            SwapDirection::ZeroForOne,
            deadline(),
        );
        let result = pool.swap(&request, now());
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }

    #[test]
    fn zero_fee_round_trip_breaks_even_up_to_rounding() {
        let mut pool = empty_pool_with(FeeRate::ZERO);
        let seed = MintRequest::new(
            Amount::new(1_000_000),
            Amount::new(5_000_000_000_000_000_000),
            deadline(),
        );
        let Ok(_) = pool.quote_and_mint(&seed, now()) else {
            panic!("expected Ok");
        };
        let Ok(forward) = pool.swap(&swap_request(100_000, 0, SwapDirection::ZeroForOne), now())
        else {
            panic!("expected Ok");
        };
        assert_eq!(forward.amount_out, Amount::new(454_545_454_545_454_545));
        assert!(forward.fee.is_zero());
        let back_request = SwapRequest::new(
            forward.amount_out,
            Amount::ZERO,
            SwapDirection::OneForZero,
            deadline(),
        );
        let Ok(back) = pool.swap(&back_request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(back.amount_out, Amount::new(99_999));
    }

    #[test]
    fn fee_round_trip_loses() {
        let mut pool = make_pool(1_000_000, 5_000_000_000_000_000_000);
        let Ok(forward) = pool.swap(&swap_request(100_000, 0, SwapDirection::ZeroForOne), now())
        else {
            panic!("expected Ok");
        };
        let back_request = SwapRequest::new(
            forward.amount_out,
            Amount::ZERO,
            SwapDirection::OneForZero,
            deadline(),
        );
        let Ok(back) = pool.swap(&back_request, now()) else {
            panic!("expected Ok");
        };
        assert_eq!(back.amount_out, Amount::new(99_455));
    }

    #[test]
    fn quote_swap_matches_swap() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let Ok(quoted) = pool.quote_swap(Amount::new(50_000), SwapDirection::ZeroForOne) else {
            panic!("expected Ok");
        };
        let Ok(outcome) = pool.swap(&swap_request(50_000, 0, SwapDirection::ZeroForOne), now())
        else {
            panic!("expected Ok");
        };
        assert_eq!(quoted, outcome.amount_out);
    }

    #[test]
    fn quote_swap_input_round_trips() {
        let pool = make_pool(1_000_000, 5_000_000_000_000_000_000);
        let result =
            pool.quote_swap_input(Amount::new(453_305_446_940_074_565), SwapDirection::ZeroForOne);
        assert_eq!(result, Ok(Amount::new(100_000)));
    }

    // -- deadline -------------------------------------------------------------

    #[test]
    fn every_operation_expires() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let before = pool.clone();
        let late = Timestamp::new(now().get() + 601);

        let mint = MintRequest::new(Amount::new(10_000), Amount::new(20_000), deadline());
        assert!(matches!(
            pool.quote_and_mint(&mint, late),
            Err(AmmError::Expired { .. })
        ));

        let burn = BurnRequest::new(Liquidity::new(10), Liquidity::new(10), deadline());
        assert!(matches!(pool.burn(&burn, late), Err(AmmError::Expired { .. })));

        let swap = swap_request(10_000, 0, SwapDirection::ZeroForOne);
        assert!(matches!(pool.swap(&swap, late), Err(AmmError::Expired { .. })));

        assert_eq!(pool, before);
    }

    #[test]
    fn deadline_boundary_accepted() {
        let mut pool = make_pool(1_000_000, 2_000_000);
        let at_deadline = deadline().timestamp();
        let result = pool.swap(&swap_request(10_000, 0, SwapDirection::ZeroForOne), at_deadline);
        assert!(result.is_ok());
    }

    // -- reserves_for ---------------------------------------------------------

    #[test]
    fn reserves_for_orients_by_token() {
        let pool = make_pool(1_000_000, 2_000_000);
        assert_eq!(
            pool.reserves_for(&wvery()),
            Ok((Amount::new(1_000_000), Amount::new(2_000_000)))
        );
        assert_eq!(
            pool.reserves_for(&vldemo()),
            Ok((Amount::new(2_000_000), Amount::new(1_000_000)))
        );
        assert!(matches!(
            pool.reserves_for(&unknown_token()),
            Err(AmmError::InvalidToken(_))
        ));
    }
}
