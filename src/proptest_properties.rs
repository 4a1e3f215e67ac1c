//! Property-based tests using `proptest` for curve and liquidity invariants.
//!
//! Covers the core invariants of the quoting engine:
//!
//! 1. **Bounded k loss** — after any swap, `k_after + new_reserve_bid > k_before`.
//! 2. **k growth from fees** — whenever a fee unit is retained, `k_after >= k_before`.
//! 3. **Output monotonicity** — larger bid never buys less output.
//! 4. **Tax exclusion** — tax leaves the pool; reserves are identical with tax
//!    routed out or not charged at all.
//! 5. **Inverse-swap sufficiency** — the quoted bid always covers the desired output.
//! 6. **Slippage bounds** — price impact is zero at zero bid and never exceeds
//!    one whole unit of `RATIO_PRECISION`.
//! 7. **Liquidity conservation** — deposit then withdraw returns no more than
//!    was accepted.
//! 8. **Root bracketing** — `isqrt`/`icbrt` results bracket their argument.

use proptest::prelude::*;

use crate::curve;
use crate::domain::{Ratio, RATIO_PRECISION};
use crate::liquidity;
use crate::math::{icbrt, isqrt};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn ratio(value: u64) -> Ratio {
    let Ok(r) = Ratio::new(value) else {
        panic!("ratio below precision");
    };
    r
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values spanning dust pools to deep pools.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000u64
}

/// Fee or tax ratios up to 10% of `RATIO_PRECISION`.
fn ratio_strategy() -> impl Strategy<Value = u64> {
    0u64..=RATIO_PRECISION / 10
}

/// Bid amounts small enough to leave the pool solvent.
fn bid_strategy() -> impl Strategy<Value = u64> {
    1u64..=1_000_000_000u64
}

// ---------------------------------------------------------------------------
// Property 1 + 2: invariant behaviour across swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_k_loss_bounded(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        bid in bid_strategy(),
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let k_before = u128::from(reserve_bid) * u128::from(reserve_ask);
        let Ok(out) = curve::swap(bid, reserve_bid, reserve_ask, ratio(fee), ratio(tax)) else {
            return Ok(());
        };
        let k_after = u128::from(out.new_reserve_bid) * u128::from(out.new_reserve_ask);
        prop_assert!(
            k_after + u128::from(out.new_reserve_bid) > k_before,
            "k loss exceeds one ask unit: before={} after={} new_bid={}",
            k_before, k_after, out.new_reserve_bid
        );
    }

    #[test]
    fn prop_k_non_decreasing_when_fee_retained(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        bid in bid_strategy(),
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let k_before = u128::from(reserve_bid) * u128::from(reserve_ask);
        let Ok(out) = curve::swap(bid, reserve_bid, reserve_ask, ratio(fee), ratio(tax)) else {
            return Ok(());
        };
        // Retained fee = new ask reserve minus the feeless post-trade reserve.
        let temp_ra = u128::from(reserve_bid) * u128::from(reserve_ask)
            / u128::from(out.new_reserve_bid);
        let retained = u128::from(out.new_reserve_ask) - temp_ra;
        if retained >= 1 {
            let k_after = u128::from(out.new_reserve_bid) * u128::from(out.new_reserve_ask);
            prop_assert!(
                k_after >= k_before,
                "retained fee should restore k: before={} after={} retained={}",
                k_before, k_after, retained
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: output monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_larger_bid_never_buys_less(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        bid in bid_strategy(),
        extra in 1u64..=1_000_000u64,
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let fee = ratio(fee);
        let tax = ratio(tax);
        let Ok(small) = curve::swap(bid, reserve_bid, reserve_ask, fee, tax) else {
            return Ok(());
        };
        let Ok(large) = curve::swap(bid + extra, reserve_bid, reserve_ask, fee, tax) else {
            return Ok(());
        };
        prop_assert!(
            large.ask_amount >= small.ask_amount,
            "bid {} buys {} but bid {} buys {}",
            bid + extra, large.ask_amount, bid, small.ask_amount
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: tax exclusion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tax_leaves_the_pool(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        bid in bid_strategy(),
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let fee = ratio(fee);
        let Ok(taxed) = curve::swap(bid, reserve_bid, reserve_ask, fee, ratio(tax)) else {
            return Ok(());
        };
        let Ok(untaxed) = curve::swap(bid, reserve_bid, reserve_ask, fee, Ratio::ZERO) else {
            return Ok(());
        };
        // Tax is carved out of the trader's side, never the reserves.
        prop_assert_eq!(taxed.ask_amount + taxed.tax, untaxed.ask_amount);
        prop_assert_eq!(taxed.new_reserve_ask, untaxed.new_reserve_ask);
        prop_assert_eq!(taxed.new_reserve_bid, untaxed.new_reserve_bid);
    }
}

// ---------------------------------------------------------------------------
// Property 5: inverse-swap sufficiency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_inverse_swap_covers_desired_output(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        desired in 1u64..=1_000_000u64,
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        // Keep the desired output well inside the reserve.
        if u128::from(desired) * 4 >= u128::from(reserve_ask) {
            return Ok(());
        }
        let fee = ratio(fee);
        let tax = ratio(tax);
        let Ok(bid) = curve::inverse_swap(desired, reserve_bid, reserve_ask, fee, tax) else {
            return Ok(());
        };
        let Ok(out) = curve::swap(bid, reserve_bid, reserve_ask, fee, tax) else {
            return Ok(());
        };
        prop_assert!(
            out.ask_amount >= desired,
            "quoted bid {} delivers {} < desired {}",
            bid, out.ask_amount, desired
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: slippage bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_slippage_zero_at_zero_bid(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let Ok(impact) = curve::slippage(0, reserve_bid, reserve_ask, ratio(fee), ratio(tax))
        else {
            return Ok(());
        };
        prop_assert_eq!(impact, 0);
    }

    #[test]
    fn prop_slippage_below_one_whole(
        reserve_bid in reserve_strategy(),
        reserve_ask in reserve_strategy(),
        bid in bid_strategy(),
        fee in ratio_strategy(),
        tax in ratio_strategy(),
    ) {
        let Ok(impact) = curve::slippage(bid, reserve_bid, reserve_ask, ratio(fee), ratio(tax))
        else {
            return Ok(());
        };
        prop_assert!(
            impact <= RATIO_PRECISION,
            "price impact {} exceeds one whole unit",
            impact
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_deposit_withdraw_returns_no_more(
        reserve_a in reserve_strategy(),
        reserve_b in reserve_strategy(),
        delta_a in 1u64..=1_000_000_000u64,
        delta_b in 1u64..=1_000_000_000u64,
    ) {
        let lp_supply = isqrt(u128::from(reserve_a) * u128::from(reserve_b)) as u64;
        let Ok(dep) = liquidity::deposit(delta_a, delta_b, reserve_a, reserve_b, lp_supply)
        else {
            return Ok(());
        };
        let Ok(wd) = liquidity::withdraw(
            dep.minted_lp,
            dep.new_lp_supply,
            dep.new_reserve_a,
            dep.new_reserve_b,
        ) else {
            return Ok(());
        };
        prop_assert!(
            wd.delta_a <= dep.accepted_a,
            "withdraw released {} a but deposit accepted {}",
            wd.delta_a, dep.accepted_a
        );
        prop_assert!(
            wd.delta_b <= dep.accepted_b,
            "withdraw released {} b but deposit accepted {}",
            wd.delta_b, dep.accepted_b
        );
    }

    #[test]
    fn prop_seeding_mints_geometric_mean(
        delta_a in 1u64..=1_000_000_000_000u64,
        delta_b in 1u64..=1_000_000_000_000u64,
    ) {
        let Ok(dep) = liquidity::deposit(delta_a, delta_b, 0, 0, 0) else {
            return Ok(());
        };
        let expected = isqrt(u128::from(delta_a) * u128::from(delta_b));
        prop_assert_eq!(u128::from(dep.minted_lp), expected);
        prop_assert_eq!(dep.accepted_a, delta_a);
        prop_assert_eq!(dep.accepted_b, delta_b);
    }
}

// ---------------------------------------------------------------------------
// Property 8: root bracketing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_isqrt_brackets(n in any::<u128>()) {
        let r = isqrt(n);
        // isqrt of a u128 fits in 64 bits, so r * r cannot overflow.
        prop_assert!(r * r <= n, "isqrt({}) = {} overshoots", n, r);
        let next = r + 1;
        prop_assert!(
            next.checked_mul(next).is_none_or(|sq| sq > n),
            "isqrt({}) = {} is not tight",
            n, r
        );
    }

    #[test]
    fn prop_icbrt_brackets(n in any::<u128>()) {
        let r = icbrt(n);
        let cube = r.checked_mul(r).and_then(|sq| sq.checked_mul(r));
        prop_assert!(cube.is_some_and(|c| c <= n), "icbrt({}) = {} overshoots", n, r);
        let next = r + 1;
        let next_cube = next.checked_mul(next).and_then(|sq| sq.checked_mul(next));
        prop_assert!(
            next_cube.is_none_or(|c| c > n),
            "icbrt({}) = {} is not tight",
            n, r
        );
    }
}
