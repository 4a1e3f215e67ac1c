//! Unified error type for the oracle engine.
//!
//! Every fallible operation in the crate returns [`OracleError`] through the
//! [`Result`] alias.  The engine is a pure function library: an error never
//! leaves partial state behind, it simply means no quote was produced.
//!
//! Variants carry a `&'static str` naming the computation that failed so a
//! caller surfacing the error can tell *which* intermediate step rejected
//! the inputs without the engine needing any logging of its own.

use thiserror::Error;

/// Errors produced by the pricing, liquidity, and identity routines.
///
/// # Examples
///
/// ```
/// use amm_oracle::curve;
/// use amm_oracle::domain::Ratio;
/// use amm_oracle::error::OracleError;
///
/// let err = curve::swap(0, 1_000, 1_000, Ratio::ZERO, Ratio::ZERO).unwrap_err();
/// assert_eq!(err, OracleError::ZeroAmount);
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OracleError {
    /// An amount that must be strictly positive was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// Reserves or LP supply are in a state the curve cannot price against
    /// (asymmetrically zero reserves, zero supply with live reserves, …).
    #[error("invalid reserves: {0}")]
    InvalidReserves(&'static str),

    /// A requested LP burn exceeds the outstanding supply.
    #[error("requested liquidity exceeds outstanding supply")]
    Overdraw,

    /// A requested output cannot be covered by the ask-side reserve.
    #[error("insufficient liquidity for the requested output")]
    InsufficientLiquidity,

    /// An intermediate value does not fit the integer width the on-chain
    /// program uses.  Detected explicitly; the engine never wraps silently.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A quote was requested against a pool whose state forbids it.
    #[error("invalid pool state: {0}")]
    InvalidState(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, OracleError>;
