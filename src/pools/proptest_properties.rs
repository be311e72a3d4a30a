//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Invariant monotonicity**: `k` strictly grows on every fee-paying swap.
//! 2. **Swap round trip**: A→B→A never returns more than was sold.
//! 3. **Mint/burn round trip**: burning freshly minted shares returns at
//!    most the deposit; deposits clip to the ratio at any reserve ratio.
//! 4. **Reverse quote**: the input quoted for an output buys at least it.
//! 5. **Empty iff zero**: `total_liquidity == 0` exactly when both
//!    reserves are zero, across arbitrary operation sequences.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, BurnRequest, Deadline, Decimals, FeeRate, Liquidity, MintRequest, SwapDirection,
    SwapRequest, Timestamp, Token, TokenAddress, TokenPair,
};
use crate::error::AmmError;
use crate::pools::{quote_swap_input, quote_swap_output, ConstantProductPool, MAX_RESERVE};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pair() -> TokenPair {
    let a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
    let b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
    let Ok(pair) = TokenPair::new(a, b) else {
        panic!("valid pair");
    };
    pair
}

const NOW: Timestamp = Timestamp::new(1_700_000_000);

fn deadline() -> Deadline {
    Deadline::after(NOW, 600)
}

fn make_pool(fee: FeeRate, r0: u128, r1: u128) -> ConstantProductPool {
    let Ok(cfg) = PoolConfig::new(make_pair(), fee, Liquidity::new(1_000)) else {
        panic!("valid config");
    };
    let Ok(mut pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let seed = MintRequest::new(Amount::new(r0), Amount::new(r1), deadline());
    let Ok(_) = pool.quote_and_mint(&seed, NOW) else {
        panic!("seed mint");
    };
    pool
}

fn swap(amount_in: u128, direction: SwapDirection) -> SwapRequest {
    SwapRequest::new(Amount::new(amount_in), Amount::ZERO, direction, deadline())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Values spread over the whole reserve range, from 1 to ~2^111, so pool
/// ratios reach far beyond what `reserve_strategy` covers.
fn wide_reserve_strategy() -> impl Strategy<Value = u128> {
    (0u32..=101, 1u128..=1_023).prop_map(|(shift, mantissa)| mantissa << shift)
}

/// Fee numerators over 1000, from 0.1% to 5%.
fn fee_strategy() -> impl Strategy<Value = FeeRate> {
    (1u32..=50u32).prop_map(|num| FeeRate::new(num, 1_000).unwrap_or(FeeRate::STANDARD))
}

#[derive(Debug, Clone)]
enum Op {
    Mint(u128, u128),
    Burn(u128),
    Swap(u128, bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u128..=1_000_000, 1u128..=1_000_000).prop_map(|(a, b)| Op::Mint(a, b)),
        (1u128..=2_000_000).prop_map(Op::Burn),
        (1u128..=500_000, any::<bool>()).prop_map(|(a, z)| Op::Swap(a, z)),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_strictly_grows_with_fee(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fee in fee_strategy(),
        amounts in prop::collection::vec(1u128..=100_000, 1..8),
    ) {
        let mut pool = make_pool(fee, r0, r1);
        for (i, amount) in amounts.into_iter().enumerate() {
            let direction = if i % 2 == 0 {
                SwapDirection::ZeroForOne
            } else {
                SwapDirection::OneForZero
            };
            let k_before = pool.k();
            if pool.swap(&swap(amount, direction), NOW).is_err() {
                prop_assert_eq!(pool.k(), k_before);
                continue;
            }
            prop_assert!(pool.k() > k_before, "k must grow: {} -> {}", k_before, pool.k());
        }
    }

    #[test]
    fn prop_k_never_shrinks_without_fee(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount in 1u128..=1_000_000,
    ) {
        let mut pool = make_pool(FeeRate::ZERO, r0, r1);
        let k_before = pool.k();
        let _ = pool.swap(&swap(amount, SwapDirection::ZeroForOne), NOW);
        prop_assert!(pool.k() >= k_before);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_unprofitable(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (r0 / 1_000).max(1);
        let mut pool = make_pool(fee, r0, r1);

        let Ok(forward) = pool.swap(&swap(swap_in, SwapDirection::ZeroForOne), NOW) else {
            return Ok(());
        };
        let back_request = swap(forward.amount_out.get(), SwapDirection::OneForZero);
        let Ok(back) = pool.swap(&back_request, NOW) else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out.get() < swap_in,
            "round-trip should lose value: final={} original={}",
            back.amount_out, swap_in
        );
    }

    #[test]
    fn prop_zero_fee_round_trip_never_profits(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        swap_in in 1u128..=1_000_000,
    ) {
        let mut pool = make_pool(FeeRate::ZERO, r0, r1);
        let Ok(forward) = pool.swap(&swap(swap_in, SwapDirection::ZeroForOne), NOW) else {
            return Ok(());
        };
        let back_request = swap(forward.amount_out.get(), SwapDirection::OneForZero);
        let Ok(back) = pool.swap(&back_request, NOW) else {
            return Ok(());
        };
        prop_assert!(back.amount_out.get() <= swap_in);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Mint/burn round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_then_burn_returns_at_most_deposit(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        d0 in 1_000u128..=5_000_000,
        d1 in 1_000u128..=5_000_000,
    ) {
        let mut pool = make_pool(FeeRate::STANDARD, r0, r1);
        let total_before = pool.total_liquidity();

        let request = MintRequest::new(Amount::new(d0), Amount::new(d1), deadline());
        let Ok(minted) = pool.quote_and_mint(&request, NOW) else {
            return Ok(());
        };
        prop_assert!(minted.amount0.get() <= d0 && minted.amount1.get() <= d1);

        let burn = BurnRequest::new(minted.liquidity, minted.liquidity, deadline());
        let Ok(burned) = pool.burn(&burn, NOW) else {
            return Ok(());
        };
        prop_assert!(burned.amount0 <= minted.amount0);
        prop_assert!(burned.amount1 <= minted.amount1);
        prop_assert_eq!(pool.total_liquidity(), total_before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_mint_clips_at_any_ratio(
        r0 in wide_reserve_strategy(),
        r1 in wide_reserve_strategy(),
        d0 in wide_reserve_strategy(),
        d1 in wide_reserve_strategy(),
    ) {
        let Ok(cfg) = PoolConfig::new(make_pair(), FeeRate::STANDARD, Liquidity::new(1_000)) else {
            panic!("valid config");
        };
        let Ok(mut pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("valid pool");
        };
        let seed = MintRequest::new(Amount::new(r0), Amount::new(r1), deadline());
        if pool.quote_and_mint(&seed, NOW).is_err() {
            return Ok(());
        }

        let request = MintRequest::new(Amount::new(d0), Amount::new(d1), deadline());
        let fits = r0.checked_add(d0).is_some_and(|v| v <= MAX_RESERVE.get())
            && r1.checked_add(d1).is_some_and(|v| v <= MAX_RESERVE.get());
        match pool.quote_and_mint(&request, NOW) {
            Ok(minted) => {
                prop_assert!(minted.amount0.get() <= d0 && minted.amount1.get() <= d1);
                prop_assert!(
                    minted.amount0.get() == d0 || minted.amount1.get() == d1,
                    "one side must be taken in full: {:?}", minted
                );
                prop_assert!(!minted.liquidity.is_zero());
            }
            Err(AmmError::InsufficientLiquidityMinted) => {}
            Err(e) => prop_assert!(!fits, "deposit within the reserve cap failed: {}", e),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Reverse quote
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reverse_quote_covers_output(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        fee in fee_strategy(),
        pct in 1u128..=90,
    ) {
        let want = (r_out * pct / 100).max(1);
        let (reserve_in, reserve_out) = (Amount::new(r_in), Amount::new(r_out));
        let Ok(needed) = quote_swap_input(reserve_in, reserve_out, Amount::new(want), fee) else {
            return Ok(());
        };
        let Ok(got) = quote_swap_output(reserve_in, reserve_out, needed, fee) else {
            return Ok(());
        };
        prop_assert!(got.get() >= want, "bought {} wanted {}", got, want);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Empty iff zero reserves
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_iff_zero_reserves(
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let Ok(cfg) = PoolConfig::new(make_pair(), FeeRate::STANDARD, Liquidity::new(1_000)) else {
            panic!("valid config");
        };
        let Ok(mut pool) = ConstantProductPool::from_config(&cfg) else {
            panic!("valid pool");
        };
        for op in ops {
            let before = pool.clone();
            let result = match op {
                Op::Mint(a, b) => pool
                    .quote_and_mint(
                        &MintRequest::new(Amount::new(a), Amount::new(b), deadline()),
                        NOW,
                    )
                    .map(|_| ()),
                Op::Burn(l) => {
                    // The whole supply, as if one holder owned the locked shares too.
                    let owned = pool.total_liquidity();
                    pool.burn(&BurnRequest::new(Liquidity::new(l), owned, deadline()), NOW)
                        .map(|_| ())
                }
                Op::Swap(a, zero_for_one) => {
                    let direction = if zero_for_one {
                        SwapDirection::ZeroForOne
                    } else {
                        SwapDirection::OneForZero
                    };
                    pool.swap(&swap(a, direction), NOW).map(|_| ())
                }
            };
            if result.is_err() {
                prop_assert_eq!(&pool, &before);
            }
            let (r0, r1) = pool.reserves();
            prop_assert_eq!(
                pool.total_liquidity().is_zero(),
                r0.is_zero() && r1.is_zero()
            );
            prop_assert_eq!(pool.total_liquidity().is_zero(), r0.is_zero() || r1.is_zero());
        }
    }
}
