//! # AMM Oracle
//!
//! Deterministic pricing and liquidity oracle for a constant-product swap
//! program on Solana.
//!
//! Given a point-in-time [`Pool`](domain::Pool) snapshot, this crate answers —
//! with integer-exact, replayable arithmetic — the questions a client asks
//! before submitting a transaction:
//!
//! - **Swap quoting** — output, fee, and tax for a given input
//!   ([`curve::swap`]), the input required for a desired output
//!   ([`curve::inverse_swap`]), and price impact ([`curve::slippage`])
//! - **Liquidity accounting** — LP tokens minted by a proportional or
//!   arbitrary-ratio deposit ([`liquidity::deposit`],
//!   [`liquidity::sided_deposit`]) and reserves released by a burn
//!   ([`liquidity::withdraw`])
//! - **Identity derivation** — the treasurer PDA, XOR proof address, and the
//!   reverse lookup from an LP mint back to its pool ([`identity`])
//!
//! Every function is pure: no RPC, no clocks, no interior mutability.  All
//! amounts are `u64` at the API boundary with `u128` intermediates, so results
//! match the on-chain program bit for bit.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! amm-oracle = "0.1"
//! ```
//!
//! ## Quote a swap against a pool snapshot
//!
//! ```rust
//! use amm_oracle::prelude::*;
//!
//! let pool = Pool {
//!     reserve_a: 100_000_000_000,
//!     reserve_b: 500_000_000_000,
//!     lp_supply: 223_606_797_749,
//!     fee_ratio: Ratio::new(2_500_000).expect("0.25%"),
//!     tax_ratio: Ratio::new(500_000).expect("0.05%"),
//!     state: PoolState::Initialized,
//!     ..Pool::default()
//! };
//!
//! // Sell 1 A for B.
//! let quote = pool.quote_swap(SwapDirection::AtoB, 1_000_000_000).expect("quote");
//! assert_eq!(quote.ask_amount, 4_935_649_754);
//! assert_eq!(quote.tax, 2_469_059);
//!
//! // How much A buys exactly that much B back out?
//! let bid = pool
//!     .quote_inverse_swap(SwapDirection::AtoB, quote.ask_amount)
//!     .expect("quote");
//! assert!(bid >= 1_000_000_000);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  decodes the account, builds a Pool snapshot
//! └──────┬───────┘
//!        │ quote_* methods (state-checked)
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Pool, PoolState, SwapDirection, Ratio
//! └──────┬───────┘
//!        │ free functions on raw reserves
//!        ▼
//! ┌──────────────┬──────────────┬──────────────┐
//! │    Curve      │  Liquidity   │   Identity   │
//! │ swap/inverse/ │ deposit/     │ treasurer/   │
//! │ slippage      │ withdraw/    │ proof/derive │
//! │               │ sided        │              │
//! └──────┬───────┴──────┬───────┴──────────────┘
//!        ▼              ▼
//! ┌──────────────────────────────┐
//! │     Math — isqrt, icbrt       │
//! └──────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | [`Pool`](domain::Pool) snapshot, [`Ratio`](domain::Ratio) fixed-point fraction, state and direction enums |
//! | [`curve`]  | Constant-product swap, inverse swap, and slippage quoting |
//! | [`liquidity`] | Deposit, withdraw, and sided-deposit LP accounting |
//! | [`identity`] | Treasurer PDA, proof address, and pool reverse lookup |
//! | [`math`]   | Integer square and cube roots over `u128` |
//! | [`error`]  | [`OracleError`](error::OracleError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod curve;
pub mod domain;
pub mod error;
pub mod identity;
pub mod liquidity;
pub mod math;
pub mod prelude;

#[cfg(test)]
mod proptest_properties;
