//! Core type-level machinery: field traits, promotion, and faer interop.

pub mod promotion;
pub mod traits;
pub mod wrappers;

pub use promotion::{promote, promotion_is_symmetric, Promote, PromoteFrom, Promoted};
pub use traits::{FieldOf, FieldTraits, MatVec, RealOf, RealScalar, Scalar};
pub use wrappers::FaerVector;
