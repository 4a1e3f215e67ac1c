//! Domain value types consumed and produced by the engine.
//!
//! The engine speaks the on-chain program's vocabulary: `u64` token
//! amounts, parts-per-billion [`Ratio`] fractions, and a caller-supplied
//! [`Pool`] reserve snapshot.  All types use validated constructors where an
//! invariant exists and plain public fields where the type is a record.

mod pool;
mod ratio;

pub use pool::{Pool, PoolState, SwapDirection};
pub use ratio::{Ratio, RATIO_PRECISION};
