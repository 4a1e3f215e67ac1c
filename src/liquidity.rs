//! Liquidity accounting against pool reserves and LP-token supply.
//!
//! Three operations, all pure:
//!
//! - [`deposit`] — proportional liquidity add; the first deposit seeds the
//!   pool with `isqrt(delta_a * delta_b)` LP units, subsequent deposits
//!   accept the largest ratio-preserving sub-pair and return the rest.
//! - [`withdraw`] — strictly proportional burn, floors in the pool's favor.
//! - [`sided_deposit`] — accepts any `delta_a : delta_b` mix (including a
//!   single side) by raking the non-proportional remainder through an
//!   implicit swap before a second proportional deposit.
//!
//! LP supply changes only here: deposits mint, withdrawals burn, nothing
//! else touches it.

use crate::curve;
use crate::domain::Ratio;
use crate::error::{OracleError, Result};
use crate::math::isqrt;

/// Result of a (plain or sided) deposit quote.
///
/// `accepted_a` / `accepted_b` are the amounts actually consumed from the
/// caller; any un-accepted remainder of the requested deltas stays with
/// the caller unspent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct DepositOutcome {
    /// Token-A amount consumed from the caller.
    pub accepted_a: u64,
    /// Token-B amount consumed from the caller.
    pub accepted_b: u64,
    /// LP tokens minted to the caller.
    pub minted_lp: u64,
    /// Pool reserve of token A after the deposit.
    pub new_reserve_a: u64,
    /// Pool reserve of token B after the deposit.
    pub new_reserve_b: u64,
    /// Outstanding LP supply after the deposit.
    pub new_lp_supply: u64,
}

/// Result of a withdrawal quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct WithdrawOutcome {
    /// Token-A amount paid out for the burned LP.
    pub delta_a: u64,
    /// Token-B amount paid out for the burned LP.
    pub delta_b: u64,
    /// Pool reserve of token A after the withdrawal.
    pub new_reserve_a: u64,
    /// Pool reserve of token B after the withdrawal.
    pub new_reserve_b: u64,
}

/// Largest pair `(a*, b*)` with `a* <= delta_a`, `b* <= delta_b` that
/// preserves the reserve ratio `reserve_a : reserve_b`.
///
/// If the two candidate cross-products tie, both deltas are already
/// proportional and are accepted unchanged.
fn extract(delta_a: u64, delta_b: u64, reserve_a: u64, reserve_b: u64) -> (u64, u64) {
    let lhs = u128::from(delta_a) * u128::from(reserve_b);
    let rhs = u128::from(delta_b) * u128::from(reserve_a);
    if lhs == rhs {
        (delta_a, delta_b)
    } else if lhs > rhs {
        // A side in excess: B limits the deposit.
        let matched_a = rhs / u128::from(reserve_b);
        // matched_a <= delta_a because rhs < lhs = delta_a * reserve_b.
        (matched_a as u64, delta_b)
    } else {
        let matched_b = lhs / u128::from(reserve_a);
        (delta_a, matched_b as u64)
    }
}

/// Quotes a proportional deposit of `(delta_a, delta_b)`.
///
/// # Errors
///
/// - [`OracleError::ZeroAmount`] if both deltas are zero, or if either is
///   zero on the seeding deposit (the initial price ratio needs both sides).
/// - [`OracleError::InvalidReserves`] if exactly one reserve is zero, or
///   if reserves and `lp_supply` disagree about whether the pool is live.
/// - [`OracleError::Overflow`] if a new reserve or the minted LP amount
///   does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use amm_oracle::liquidity::deposit;
///
/// let out = deposit(100_000, 400_000, 0, 0, 0).expect("seeding deposit");
/// assert_eq!(out.minted_lp, 200_000); // isqrt(100_000 * 400_000)
/// assert_eq!(out.new_reserve_a, 100_000);
/// assert_eq!(out.new_reserve_b, 400_000);
/// ```
pub fn deposit(
    delta_a: u64,
    delta_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
) -> Result<DepositOutcome> {
    if delta_a == 0 && delta_b == 0 {
        return Err(OracleError::ZeroAmount);
    }

    match (reserve_a == 0, reserve_b == 0) {
        (true, true) => {
            if lp_supply != 0 {
                return Err(OracleError::InvalidReserves("LP supply without reserves"));
            }
            if delta_a == 0 || delta_b == 0 {
                return Err(OracleError::ZeroAmount);
            }
            // Seeding: the caller's amounts fix the initial price ratio.
            let minted = isqrt(u128::from(delta_a) * u128::from(delta_b));
            let minted = u64::try_from(minted)
                .map_err(|_| OracleError::Overflow("seeded LP exceeds u64"))?;
            Ok(DepositOutcome {
                accepted_a: delta_a,
                accepted_b: delta_b,
                minted_lp: minted,
                new_reserve_a: delta_a,
                new_reserve_b: delta_b,
                new_lp_supply: minted,
            })
        }
        (true, false) | (false, true) => {
            Err(OracleError::InvalidReserves("exactly one reserve is zero"))
        }
        (false, false) => {
            if lp_supply == 0 {
                return Err(OracleError::InvalidReserves("live reserves without LP supply"));
            }

            let (accepted_a, accepted_b) = extract(delta_a, delta_b, reserve_a, reserve_b);

            let minted =
                u128::from(accepted_a) * u128::from(lp_supply) / u128::from(reserve_a);
            let minted = u64::try_from(minted)
                .map_err(|_| OracleError::Overflow("minted LP exceeds u64"))?;

            let new_reserve_a = reserve_a
                .checked_add(accepted_a)
                .ok_or(OracleError::Overflow("reserve A exceeds u64 after deposit"))?;
            let new_reserve_b = reserve_b
                .checked_add(accepted_b)
                .ok_or(OracleError::Overflow("reserve B exceeds u64 after deposit"))?;
            let new_lp_supply = lp_supply
                .checked_add(minted)
                .ok_or(OracleError::Overflow("LP supply exceeds u64 after deposit"))?;

            Ok(DepositOutcome {
                accepted_a,
                accepted_b,
                minted_lp: minted,
                new_reserve_a,
                new_reserve_b,
                new_lp_supply,
            })
        }
    }
}

/// Quotes a strictly proportional withdrawal of `lpt` LP tokens.
///
/// `delta_x = floor(reserve_x * lpt / lp_supply)` — the floor keeps the
/// rounding loss in the pool.
///
/// # Errors
///
/// - [`OracleError::ZeroAmount`] if `lpt` is zero.
/// - [`OracleError::InvalidReserves`] if `lp_supply` is zero.
/// - [`OracleError::Overdraw`] if `lpt > lp_supply`.
pub fn withdraw(
    lpt: u64,
    lp_supply: u64,
    reserve_a: u64,
    reserve_b: u64,
) -> Result<WithdrawOutcome> {
    if lpt == 0 {
        return Err(OracleError::ZeroAmount);
    }
    if lp_supply == 0 {
        return Err(OracleError::InvalidReserves("withdrawal from zero LP supply"));
    }
    if lpt > lp_supply {
        return Err(OracleError::Overdraw);
    }

    // Products of two u64 values: always representable in u128, and the
    // quotients are bounded by the reserves since lpt <= lp_supply.
    let delta_a = (u128::from(reserve_a) * u128::from(lpt) / u128::from(lp_supply)) as u64;
    let delta_b = (u128::from(reserve_b) * u128::from(lpt) / u128::from(lp_supply)) as u64;

    Ok(WithdrawOutcome {
        delta_a,
        delta_b,
        new_reserve_a: reserve_a - delta_a,
        new_reserve_b: reserve_b - delta_b,
    })
}

/// `true` if, after swapping `bid` of the remainder, the leftover bid side
/// still covers (or exactly matches) its proportional share against the
/// swap proceeds.  Strictly decreasing in `bid`, which is what makes the
/// rake search a plain binary search for the largest `true`.
fn rake_covers(
    bid: u64,
    remainder: u64,
    reserve_bid: u64,
    reserve_ask: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<bool> {
    let out = curve::swap(bid, reserve_bid, reserve_ask, fee_ratio, tax_ratio)?;
    let leftover = remainder - bid;
    Ok(u128::from(leftover) * u128::from(out.new_reserve_ask)
        >= u128::from(out.ask_amount) * u128::from(out.new_reserve_bid))
}

/// Largest `bid <= remainder` whose swap proceeds deposit proportionally
/// alongside the leftover, leaving at most integer-rounding residue.
///
/// The interval `[lo, hi]` halves every step, so `u64::BITS` iterations
/// always suffice regardless of input; the loop is bounded by construction
/// rather than by a data-dependent condition.
fn rake(
    remainder: u64,
    reserve_bid: u64,
    reserve_ask: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<u64> {
    let mut lo = 0u64; // rake_covers(0) is trivially true: nothing swapped
    let mut hi = remainder;
    for _ in 0..u64::BITS {
        if lo >= hi {
            break;
        }
        let mid = lo + (hi - lo).div_ceil(2);
        if rake_covers(mid, remainder, reserve_bid, reserve_ask, fee_ratio, tax_ratio)? {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Ok(lo)
}

/// Quotes a deposit of any `delta_a : delta_b` mix, one side optionally zero.
///
/// The proportional portion is deposited first; the remainder is split by
/// a bounded binary search into an implicit swap plus a second
/// proportional deposit of the proceeds, mirroring the on-chain rake
/// instruction.  Accepted amounts and minted LP are summed across the
/// two passes; reserves and supply reflect both plus the swap.
///
/// # Errors
///
/// Everything [`deposit`] and [`curve::swap`] can produce, for the same
/// reasons.
pub fn sided_deposit(
    delta_a: u64,
    delta_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<DepositOutcome> {
    let first = deposit(delta_a, delta_b, reserve_a, reserve_b, lp_supply)?;

    // extract() exhausts at least one side, so at most one remainder is
    // nonzero.
    let remainder_a = delta_a - first.accepted_a;
    let remainder_b = delta_b - first.accepted_b;
    if remainder_a == 0 && remainder_b == 0 {
        return Ok(first);
    }

    let rake_is_a = remainder_a > 0;
    let (remainder, reserve_bid, reserve_ask) = if rake_is_a {
        (remainder_a, first.new_reserve_a, first.new_reserve_b)
    } else {
        (remainder_b, first.new_reserve_b, first.new_reserve_a)
    };

    let bid = rake(remainder, reserve_bid, reserve_ask, fee_ratio, tax_ratio)?;
    if bid == 0 {
        // Remainder too small for the swap to yield anything depositable.
        return Ok(first);
    }

    let swapped = curve::swap(bid, reserve_bid, reserve_ask, fee_ratio, tax_ratio)?;
    if swapped.ask_amount == 0 {
        // Fee and tax floored the proceeds away; the remainder is dust.
        return Ok(first);
    }
    let leftover = remainder - bid;

    let second = if rake_is_a {
        deposit(
            leftover,
            swapped.ask_amount,
            swapped.new_reserve_bid,
            swapped.new_reserve_ask,
            first.new_lp_supply,
        )?
    } else {
        deposit(
            swapped.ask_amount,
            leftover,
            swapped.new_reserve_ask,
            swapped.new_reserve_bid,
            first.new_lp_supply,
        )?
    };

    // Amounts consumed from the caller: the proportional pass, the raked
    // bid, and the leftover the second pass accepted.  Sums stay within
    // the caller's original deltas, but the LP total is checked anyway.
    let (accepted_a, accepted_b) = if rake_is_a {
        (first.accepted_a + bid + second.accepted_a, first.accepted_b)
    } else {
        (first.accepted_a, first.accepted_b + bid + second.accepted_b)
    };
    let minted_lp = first
        .minted_lp
        .checked_add(second.minted_lp)
        .ok_or(OracleError::Overflow("minted LP exceeds u64"))?;

    Ok(DepositOutcome {
        accepted_a,
        accepted_b,
        minted_lp,
        new_reserve_a: second.new_reserve_a,
        new_reserve_b: second.new_reserve_b,
        new_lp_supply: second.new_lp_supply,
    })
}
