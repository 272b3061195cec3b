//! Arbitrary-precision scalar backed by MPFR (through `rug`).

pub mod consts;
pub mod field;
pub mod ladder;
pub mod limits;
pub mod math;

pub use consts::MathematicalConstants;
pub use field::{GmpField, MAX_PRECISION};
pub use ladder::{max_precision, PRECISION_LADDER};
pub use limits::{bits_to_digits10, NumericLimits};
