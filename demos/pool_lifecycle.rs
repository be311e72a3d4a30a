//! Pool lifecycle walkthrough through the registry.
//!
//! Seeds a pool, swaps in both directions, quotes a two-hop route, and
//! withdraws. Set `RUST_LOG=bumdex_amm=debug` to see the engine's events.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_lifecycle
//! ```

use bumdex_amm::prelude::*;
use tracing::info;
use tracing_subscriber::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pool_lifecycle=info,bumdex_amm=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 1. Tokens and engine defaults ──────────────────────────────────
    let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
    let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
    let usdt = Token::new(TokenAddress::from_bytes([3u8; 32]), Decimals::SIX);

    let config = EngineConfig::default();
    let slippage = config.default_slippage_bps;
    let registry = PoolRegistry::new(config)?;

    let now = Timestamp::new(1_700_000_000);
    let deadline = registry.config().deadline_from(now);
    info!(fee = %registry.config().fee, %slippage, %deadline, "engine ready");

    // ── 2. Seed two pools (1 wvery = 5 vldemo, 1 vldemo = 2 usdt) ─────
    let seed = MintRequest::new(
        wvery.to_raw_amount(1)?,
        vldemo.to_raw_amount(5)?,
        deadline,
    );
    let minted = registry.add_liquidity(wvery, vldemo, &seed, now)?;
    info!(liquidity = %minted.liquidity, "seeded wvery/vldemo");

    let seed = MintRequest::new(
        vldemo.to_raw_amount(1_000)?,
        usdt.to_raw_amount(2_000)?,
        deadline,
    );
    registry.add_liquidity(vldemo, usdt, &seed, now)?;
    info!(pools = registry.len(), "seeded vldemo/usdt");

    // ── 3. Swap 0.1 wvery for vldemo with a slippage floor ─────────────
    let amount_in = Amount::new(100_000);
    let path = [wvery, vldemo];
    let quoted = registry.quote_amounts_out(amount_in, &path)?;
    let floor = slippage.minimum_out(quoted[1])?;
    let outcome = registry.swap_exact_tokens_for_tokens(amount_in, floor, &path, deadline, now)?;
    info!(%outcome, whole_vldemo = vldemo.from_raw_amount(outcome.amount_out), "swapped");

    // ── 4. Sell it straight back ────────────────────────────────────────
    let back = registry.swap_exact_tokens_for_tokens(
        outcome.amount_out,
        Amount::ZERO,
        &[vldemo, wvery],
        deadline,
        now,
    )?;
    info!(%back, lost = %(amount_in.get() - back.amount_out.get()), "round trip");

    // ── 5. Two-hop quote ───────────────────────────────────────────────
    let route = registry.quote_amounts_out(amount_in, &[wvery, vldemo, usdt])?;
    info!(?route, "quoted wvery -> vldemo -> usdt");

    // ── 6. A stale request is rejected ─────────────────────────────────
    let stale = Timestamp::new(deadline.timestamp().get() + 1);
    let stale_swap =
        registry.swap_exact_tokens_for_tokens(amount_in, Amount::ZERO, &path, deadline, stale);
    if let Err(e) = stale_swap {
        info!(error = %e, retryable = e.is_retryable(), "stale swap rejected");
    }

    // ── 7. Withdraw everything the depositor owns ──────────────────────
    let burn = BurnRequest::new(minted.liquidity, minted.liquidity, deadline);
    let burned = registry.remove_liquidity(&wvery, &vldemo, &burn, now)?;
    let (reserve_wvery, reserve_vldemo) = registry.reserves(&wvery, &vldemo)?;
    info!(
        amount_wvery = %burned.amount0,
        amount_vldemo = %burned.amount1,
        %reserve_wvery,
        %reserve_vldemo,
        "withdrew; locked minimum stays behind"
    );

    Ok(())
}
