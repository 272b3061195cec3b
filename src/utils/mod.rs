//! Utilities: caller-contract assertions and tolerance-based float comparison.

#[macro_use]
pub mod bounds;
pub mod float_cmp;

pub use float_cmp::FloatCmp;
