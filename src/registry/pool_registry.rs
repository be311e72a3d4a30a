//! Keyed collection of constant-product pools with router-style entry points.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::{
    Amount, BurnOutcome, BurnRequest, Deadline, MintOutcome, MintRequest, PairId, SwapDirection,
    SwapOutcome, SwapRequest, Timestamp, Token, TokenPair,
};
use crate::error::AmmError;
use crate::pools::{quote_swap_output, ConstantProductPool};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A pool shared between callers; the mutex serializes its operations.
pub type SharedPool = Arc<Mutex<ConstantProductPool>>;

/// Registry of pools keyed by canonical [`PairId`].
///
/// Each pool sits behind its own [`Mutex`], so operations on one pool are
/// serialized while distinct pools proceed in parallel. The outer
/// [`RwLock`] is held only to look up or insert entries; it is never held
/// while waiting on a pool, except when inserting a freshly created one.
///
/// Entry points take tokens and amounts in the caller's order and return
/// outcomes in that same order, translating to and from the pool's
/// canonical `(token0, token1)` order internally.
///
/// # Example
///
/// ```rust
/// use bumdex_amm::domain::{
///     Amount, Deadline, Decimals, MintRequest, Timestamp, Token, TokenAddress,
/// };
/// use bumdex_amm::registry::PoolRegistry;
///
/// let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
/// let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
/// let registry = PoolRegistry::default();
///
/// let now = Timestamp::new(1_700_000_000);
/// let deadline = Deadline::after(now, 600);
/// let request = MintRequest::new(Amount::new(2_000_000), Amount::new(1_000_000), deadline);
///
/// // vldemo first: amounts and outcome follow that order.
/// let minted = registry.add_liquidity(vldemo, wvery, &request, now).expect("pool created");
/// assert_eq!(minted.amount0, Amount::new(2_000_000));
///
/// let (reserve_vldemo, reserve_wvery) = registry.reserves(&vldemo, &wvery).expect("pool exists");
/// assert_eq!(reserve_vldemo, Amount::new(2_000_000));
/// assert_eq!(reserve_wvery, Amount::new(1_000_000));
/// ```
#[derive(Debug)]
pub struct PoolRegistry {
    config: EngineConfig,
    pools: RwLock<HashMap<PairId, SharedPool>>,
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            pools: RwLock::new(HashMap::new()),
        }
    }
}

impl PoolRegistry {
    /// Creates an empty registry whose new pools follow `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] errors.
    pub fn new(config: EngineConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            pools: RwLock::new(HashMap::new()),
        })
    }

    /// Defaults applied to newly created pools.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// `true` if no pool has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Keys of every registered pool, sorted.
    #[must_use]
    pub fn pair_ids(&self) -> Vec<PairId> {
        let mut ids: Vec<PairId> = self.pools.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Registers an empty pool for the two tokens.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - [`AmmError::PoolAlreadyExists`] if the pair is already registered.
    pub fn create_pool(&self, token_a: Token, token_b: Token) -> Result<SharedPool, AmmError> {
        let pair = TokenPair::new(token_a, token_b)?;
        let pool = self.build_pool(pair)?;
        match self.pools.write().entry(pair.id()) {
            Entry::Occupied(_) => Err(AmmError::PoolAlreadyExists),
            Entry::Vacant(slot) => {
                let shared = Arc::new(Mutex::new(pool));
                slot.insert(Arc::clone(&shared));
                debug!(pair = %pair.id(), fee = %self.config.fee, "pool created");
                Ok(shared)
            }
        }
    }

    /// The pool for two tokens, in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - [`AmmError::PoolNotFound`] if the pair is not registered.
    pub fn pool(&self, token_a: &Token, token_b: &Token) -> Result<SharedPool, AmmError> {
        let id = PairId::new(token_a.address(), token_b.address())?;
        self.pools
            .read()
            .get(&id)
            .cloned()
            .ok_or(AmmError::PoolNotFound)
    }

    /// Reserves of `(token_a, token_b)` in that order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair is not registered.
    /// - [`AmmError::InvalidToken`] if a token does not match the pool's.
    pub fn reserves(&self, token_a: &Token, token_b: &Token) -> Result<(Amount, Amount), AmmError> {
        let shared = self.pool(token_a, token_b)?;
        let pool = shared.lock();
        pool.reserves_for(token_a)
    }

    /// Deposits into the `(token_a, token_b)` pool, creating it on first use.
    ///
    /// `request` amounts are in `(token_a, token_b)` order and so is the
    /// returned outcome. A pool created here is registered only if the
    /// deposit succeeds.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - Any [`LiquidityPool::quote_and_mint`] error.
    pub fn add_liquidity(
        &self,
        token_a: Token,
        token_b: Token,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<MintOutcome, AmmError> {
        request.deadline.check(now)?;
        let pair = TokenPair::new(token_a, token_b)?;

        let existing = self.pools.read().get(&pair.id()).cloned();
        if let Some(shared) = existing {
            return Self::mint_into(&mut shared.lock(), &token_a, request, now);
        }

        let mut pools = self.pools.write();
        let shared = match pools.entry(pair.id()) {
            // Created by another caller since the read above.
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                let mut pool = self.build_pool(pair)?;
                let outcome = Self::mint_into(&mut pool, &token_a, request, now)?;
                slot.insert(Arc::new(Mutex::new(pool)));
                debug!(pair = %pair.id(), fee = %self.config.fee, "pool created");
                return Ok(outcome);
            }
        };
        drop(pools);
        let mut pool = shared.lock();
        Self::mint_into(&mut pool, &token_a, request, now)
    }

    /// Redeems liquidity from the `(token_a, token_b)` pool.
    ///
    /// `request` floors and the returned amounts are in `(token_a, token_b)`
    /// order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::PoolNotFound`] if the pair is not registered.
    /// - Any [`LiquidityPool::burn`] error.
    pub fn remove_liquidity(
        &self,
        token_a: &Token,
        token_b: &Token,
        request: &BurnRequest,
        now: Timestamp,
    ) -> Result<BurnOutcome, AmmError> {
        request.deadline.check(now)?;
        let shared = self.pool(token_a, token_b)?;
        let mut pool = shared.lock();
        let direction = pool.token_pair().direction_for(token_a)?;

        let (min0, min1) = direction.orient((request.min0, request.min1));
        let canonical = BurnRequest { min0, min1, ..*request };
        let outcome = pool.burn(&canonical, now)?;

        let (amount0, amount1) = direction.orient((outcome.amount0, outcome.amount1));
        Ok(BurnOutcome { amount0, amount1 })
    }

    /// Sells exactly `amount_in` of `path[0]` for `path[1]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past the deadline.
    /// - [`AmmError::InvalidPath`] unless `path` holds exactly two tokens.
    /// - [`AmmError::PoolNotFound`] if the pair is not registered.
    /// - Any [`SwapPool::swap`] error.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        amount_in: Amount,
        min_amount_out: Amount,
        path: &[Token],
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<SwapOutcome, AmmError> {
        deadline.check(now)?;
        let [token_in, token_out] = path else {
            return Err(AmmError::InvalidPath("single-pool swap takes exactly two tokens"));
        };
        let shared = self.pool(token_in, token_out)?;
        let mut pool = shared.lock();
        let request =
            SwapRequest::from_path(pool.token_pair(), path, amount_in, min_amount_out, deadline)?;
        pool.swap(&request, now)
    }

    /// Outputs of chaining exact-input swaps along `path`.
    ///
    /// The result has one entry per token in `path`, starting with
    /// `amount_in`. No pool is modified.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if `path` has fewer than two tokens.
    /// - [`AmmError::PoolNotFound`] if a hop has no pool.
    /// - Any [`quote_swap_output`] error for a hop.
    pub fn quote_amounts_out(
        &self,
        amount_in: Amount,
        path: &[Token],
    ) -> Result<Vec<Amount>, AmmError> {
        if path.len() < 2 {
            return Err(AmmError::InvalidPath("path needs at least two tokens"));
        }
        let mut amounts = Vec::with_capacity(path.len());
        amounts.push(amount_in);
        let mut current = amount_in;
        for hop in path.windows(2) {
            let [token_in, token_out] = hop else {
                return Err(AmmError::InvalidPath("path needs at least two tokens"));
            };
            let shared = self.pool(token_in, token_out)?;
            let (reserve_in, reserve_out, fee) = {
                let pool = shared.lock();
                let (reserve_in, reserve_out) = pool.reserves_for(token_in)?;
                (reserve_in, reserve_out, pool.fee())
            };
            current = quote_swap_output(reserve_in, reserve_out, current, fee)?;
            amounts.push(current);
        }
        Ok(amounts)
    }

    fn build_pool(&self, pair: TokenPair) -> Result<ConstantProductPool, AmmError> {
        ConstantProductPool::from_config(&self.config.pool_config(pair)?)
    }

    fn mint_into(
        pool: &mut ConstantProductPool,
        token_a: &Token,
        request: &MintRequest,
        now: Timestamp,
    ) -> Result<MintOutcome, AmmError> {
        let direction = pool.token_pair().direction_for(token_a)?;
        let outcome = pool.quote_and_mint(&canonical_mint(request, direction), now)?;
        let (amount0, amount1) = direction.orient((outcome.amount0, outcome.amount1));
        Ok(MintOutcome {
            amount0,
            amount1,
            liquidity: outcome.liquidity,
        })
    }
}

/// Reorders a caller-ordered request into the pool's order.
///
/// `direction` is the direction of selling the caller's first token, so
/// `ZeroForOne` means the caller already uses canonical order.
fn canonical_mint(request: &MintRequest, direction: SwapDirection) -> MintRequest {
    let (desired0, desired1) = direction.orient((request.desired0, request.desired1));
    let (min0, min1) = direction.orient((request.min0, request.min1));
    MintRequest {
        desired0,
        desired1,
        min0,
        min1,
        deadline: request.deadline,
    }
}
