//! Exact integer square and cube roots.
//!
//! Both roots return the floor of the real root and satisfy the bracketing
//! inequality `r^k <= n < (r+1)^k`.  They are total over `u128` — no input
//! can make them fail or panic.

/// Integer square root via Newton's method.
///
/// Returns the largest `r` such that `r * r <= n`.
///
/// The iteration starts above the root (`n.div_ceil(2)` dominates `√n` for
/// every `n > 1`) and decreases monotonically, so the first non-decreasing
/// step is exactly the floor.
///
/// # Examples
///
/// ```
/// use amm_oracle::math::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(1), 1);
/// assert_eq!(isqrt(40_000_000_000), 200_000);
/// assert_eq!(isqrt(2), 1);
/// ```
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Integer cube root via bounded binary search.
///
/// Returns the largest `r` such that `r * r * r <= n`.
///
/// The search interval is `[1, 2^ceil(bits/3)]`, which brackets the root
/// for every `n >= 8`, and halves each step — at most 43 iterations for a
/// full-width `u128`.  Candidate cubes are computed with checked
/// multiplication; a cube that overflows `u128` is by definition greater
/// than `n`.
///
/// # Examples
///
/// ```
/// use amm_oracle::math::icbrt;
///
/// assert_eq!(icbrt(0), 0);
/// assert_eq!(icbrt(7), 1);
/// assert_eq!(icbrt(8), 2);
/// assert_eq!(icbrt(1_000_000_000), 1_000);
/// ```
#[must_use]
pub fn icbrt(n: u128) -> u128 {
    if n < 8 {
        return u128::from(n != 0);
    }
    let bits = 128 - n.leading_zeros();
    let mut lo = 1u128;
    let mut hi = 1u128 << bits.div_ceil(3);
    // Invariant: lo^3 <= n < hi^3.
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        match mid.checked_mul(mid).and_then(|sq| sq.checked_mul(mid)) {
            Some(cube) if cube <= n => lo = mid,
            _ => hi = mid,
        }
    }
    lo
}
