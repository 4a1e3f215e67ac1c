//! Fixed-point fraction in parts per billion.

use core::fmt;

use crate::error::{OracleError, Result};

/// Denominator of the fixed-point base shared with the on-chain program.
///
/// Fee and tax ratios, and the price-impact figure returned by
/// [`slippage`](crate::curve::slippage), are all expressed in this base:
/// a value of `10_000_000` means 1%.
pub const RATIO_PRECISION: u64 = 1_000_000_000;

/// A fraction in `[0, 1)` with [`RATIO_PRECISION`] as denominator.
///
/// Used for the pool's fee ratio (value-preserving, stays in the pool) and
/// tax ratio (value-extracting, routed to the taxman account).  The
/// constructor rejects values at or above the denominator: a 100% fee or
/// tax would make every swap degenerate.
///
/// # Examples
///
/// ```
/// use amm_oracle::domain::Ratio;
///
/// let fee = Ratio::new(2_500_000).expect("0.25%");
/// assert_eq!(fee.apply_floor(1_000_000_000), 2_500_000);
/// assert_eq!(Ratio::ZERO.apply_floor(u128::from(u64::MAX)), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Ratio(u64);

impl Ratio {
    /// The zero fraction.
    pub const ZERO: Self = Self(0);

    /// Creates a ratio from a parts-per-billion value.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::InvalidReserves`] if `parts_per_billion`
    /// is not strictly below [`RATIO_PRECISION`].
    pub const fn new(parts_per_billion: u64) -> Result<Self> {
        if parts_per_billion >= RATIO_PRECISION {
            return Err(OracleError::InvalidReserves(
                "ratio must be strictly below RATIO_PRECISION",
            ));
        }
        Ok(Self(parts_per_billion))
    }

    /// Returns the raw parts-per-billion value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the fraction is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies the fraction to an amount, rounding down.
    ///
    /// `floor(amount * ratio / RATIO_PRECISION)` — the rounding direction
    /// the on-chain program uses for both fee and tax extraction.
    ///
    /// `amount` must stay below `2^128 / RATIO_PRECISION`; every engine
    /// call site passes a `u64`-bounded amount, for which the product fits
    /// in well under 95 bits.
    #[must_use]
    pub const fn apply_floor(&self, amount: u128) -> u128 {
        amount * self.0 as u128 / RATIO_PRECISION as u128
    }

    /// Returns `RATIO_PRECISION - self`, the fraction that survives
    /// extraction.  Always nonzero by the constructor invariant.
    #[must_use]
    pub const fn complement(&self) -> u64 {
        RATIO_PRECISION - self.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, RATIO_PRECISION)
    }
}
