//! Integer arithmetic primitives for the pricing engine.
//!
//! Everything above this module builds on exact, rounding-deterministic
//! integer roots.  No floating point is used anywhere: the on-chain program
//! relies on exact integer floors, and a float approximation could disagree
//! with it by one unit — which is the difference between a quote that
//! matches the chain and one that does not.

mod roots;

pub use roots::{icbrt, isqrt};
