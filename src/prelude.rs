//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use amm_oracle::prelude::*;
//! ```
//!
//! This re-exports the pool snapshot types, quote outcome structs, error
//! types, and the free quoting functions so that consumers don't need to
//! import from individual submodules.

// Pool snapshot and value types
pub use crate::domain::{Pool, PoolState, Ratio, SwapDirection, RATIO_PRECISION};

// Quote outcomes
pub use crate::curve::SwapOutcome;
pub use crate::liquidity::{DepositOutcome, WithdrawOutcome};

// Free quoting functions on raw reserves
pub use crate::curve::{inverse_swap, slippage, swap};
pub use crate::liquidity::{deposit, sided_deposit, withdraw};

// Identity derivation
pub use crate::identity::{derive_pool_address, proof_address, treasurer};

// Error types
pub use crate::error::{OracleError, Result};
