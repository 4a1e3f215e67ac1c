//! Constant-product swap pricing with fee and tax extraction.
//!
//! The curve is `reserve_bid × reserve_ask = k`.  A swap credits the full
//! bid to the bid reserve, prices the ask side off the invariant, then
//! extracts two fractions from the raw output:
//!
//! 1. the **fee** (value-preserving) is credited back to the ask reserve,
//!    so `k` grows with every taxed unit of volume;
//! 2. the **tax** (value-extracting) leaves the pool for the taxman
//!    account and never touches the reserves.
//!
//! All steps floor, matching the on-chain program bit for bit.  Rounding
//! loss therefore always lands in the pool, never with the trader.

use crate::domain::{Ratio, RATIO_PRECISION};
use crate::error::{OracleError, Result};

/// The full result of quoting a swap.
///
/// `new_reserve_bid` / `new_reserve_ask` are the reserves the pool will
/// hold after the program executes this exact trade; callers compare them
/// against a later snapshot to detect a stale quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct SwapOutcome {
    /// Amount paid out to the trader.
    pub ask_amount: u64,
    /// Amount routed to the taxman account, outside the pool.
    pub tax: u64,
    /// Bid-side reserve after the swap (original reserve plus full bid).
    pub new_reserve_bid: u64,
    /// Ask-side reserve after the swap (curve output plus retained fee).
    pub new_reserve_ask: u64,
}

/// Quotes a swap of `bid_amount` against the given reserves.
///
/// # Errors
///
/// - [`OracleError::ZeroAmount`] if `bid_amount` is zero.
/// - [`OracleError::InvalidReserves`] if either reserve is zero.
/// - [`OracleError::Overflow`] if the post-swap bid reserve exceeds `u64`.
///
/// # Examples
///
/// ```
/// use amm_oracle::curve::swap;
/// use amm_oracle::domain::Ratio;
///
/// let out = swap(1_000, 1_000_000, 2_000_000, Ratio::ZERO, Ratio::ZERO)
///     .expect("valid quote");
/// // 2_000_000 - floor(1_000_000 * 2_000_000 / 1_001_000)
/// assert_eq!(out.ask_amount, 1_999);
/// assert_eq!(out.new_reserve_bid, 1_001_000);
/// ```
pub fn swap(
    bid_amount: u64,
    reserve_bid: u64,
    reserve_ask: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<SwapOutcome> {
    if bid_amount == 0 {
        return Err(OracleError::ZeroAmount);
    }
    if reserve_bid == 0 || reserve_ask == 0 {
        return Err(OracleError::InvalidReserves("swap against an empty reserve"));
    }

    let new_reserve_bid = u128::from(reserve_bid) + u128::from(bid_amount);
    let new_reserve_bid = u64::try_from(new_reserve_bid)
        .map_err(|_| OracleError::Overflow("bid reserve exceeds u64 after swap"))?;

    // Constant product: the ask reserve implied by the grown bid reserve.
    let temp_reserve_ask =
        u128::from(reserve_bid) * u128::from(reserve_ask) / u128::from(new_reserve_bid);
    let temp_ask_amount = u128::from(reserve_ask) - temp_reserve_ask;

    let fee = fee_ratio.apply_floor(temp_ask_amount);
    let after_fee = temp_ask_amount - fee;
    let tax = tax_ratio.apply_floor(after_fee);
    let ask_amount = after_fee - tax;

    // Fee stays in the pool; tax leaves it.
    let new_reserve_ask = temp_reserve_ask + fee;

    Ok(SwapOutcome {
        ask_amount: u64::try_from(ask_amount)
            .map_err(|_| OracleError::Overflow("ask amount exceeds u64"))?,
        tax: u64::try_from(tax).map_err(|_| OracleError::Overflow("tax exceeds u64"))?,
        new_reserve_bid,
        new_reserve_ask: u64::try_from(new_reserve_ask)
            .map_err(|_| OracleError::Overflow("ask reserve exceeds u64"))?,
    })
}

/// Recovers the bid required to obtain at least `ask_amount` of output.
///
/// The inversion grosses the desired output back up through the tax and
/// fee fractions with ceiling division, then inverts the constant product
/// with another ceiling — every rounding goes against the caller, so the
/// returned bid always satisfies
/// `swap(bid, …).ask_amount >= ask_amount`.
///
/// # Errors
///
/// - [`OracleError::ZeroAmount`] if `ask_amount` is zero.
/// - [`OracleError::InvalidReserves`] if either reserve is zero.
/// - [`OracleError::InsufficientLiquidity`] if the grossed-up output is
///   not strictly coverable by `reserve_ask`.
/// - [`OracleError::Overflow`] if the required bid exceeds `u64`.
pub fn inverse_swap(
    ask_amount: u64,
    reserve_bid: u64,
    reserve_ask: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<u64> {
    if ask_amount == 0 {
        return Err(OracleError::ZeroAmount);
    }
    if reserve_bid == 0 || reserve_ask == 0 {
        return Err(OracleError::InvalidReserves("swap against an empty reserve"));
    }

    let precision = u128::from(RATIO_PRECISION);

    // Undo tax, then fee.  Complements are nonzero by the Ratio invariant.
    let after_fee =
        (u128::from(ask_amount) * precision).div_ceil(u128::from(tax_ratio.complement()));
    let temp_ask_amount = (after_fee * precision).div_ceil(u128::from(fee_ratio.complement()));

    if temp_ask_amount >= u128::from(reserve_ask) {
        return Err(OracleError::InsufficientLiquidity);
    }
    let new_reserve_ask = u128::from(reserve_ask) - temp_ask_amount;

    // Invert the constant product.
    let new_reserve_bid =
        (u128::from(reserve_bid) * u128::from(reserve_ask)).div_ceil(new_reserve_ask);
    let bid_amount = new_reserve_bid - u128::from(reserve_bid);

    u64::try_from(bid_amount).map_err(|_| OracleError::Overflow("required bid exceeds u64"))
}

/// Price impact of a hypothetical swap, in [`RATIO_PRECISION`] base.
///
/// `price = reserve_ask * RATIO_PRECISION / reserve_bid` before and after
/// the swap; the result is `|next - prev| * RATIO_PRECISION / prev`.
/// Always non-negative, and zero exactly when `bid_amount` is zero.
///
/// # Errors
///
/// - [`OracleError::InvalidReserves`] if either reserve is zero, or the
///   spot price floors to zero in the fixed-point base.
/// - Any error from the underlying [`swap`] quote.
pub fn slippage(
    bid_amount: u64,
    reserve_bid: u64,
    reserve_ask: u64,
    fee_ratio: Ratio,
    tax_ratio: Ratio,
) -> Result<u64> {
    if bid_amount == 0 {
        return Ok(0);
    }
    if reserve_bid == 0 || reserve_ask == 0 {
        return Err(OracleError::InvalidReserves("price against an empty reserve"));
    }

    let precision = u128::from(RATIO_PRECISION);
    let prev_price = u128::from(reserve_ask) * precision / u128::from(reserve_bid);
    if prev_price == 0 {
        return Err(OracleError::InvalidReserves(
            "spot price underflows ratio precision",
        ));
    }

    let outcome = swap(bid_amount, reserve_bid, reserve_ask, fee_ratio, tax_ratio)?;
    let next_price =
        u128::from(outcome.new_reserve_ask) * precision / u128::from(outcome.new_reserve_bid);

    let impact = prev_price.abs_diff(next_price) * precision / prev_price;
    u64::try_from(impact).map_err(|_| OracleError::Overflow("price impact exceeds u64"))
}
