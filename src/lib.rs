//! densevec: dense vector algebra over abstract fields
//!
//! This crate provides a generic dense-vector algorithm layer that is specialized at compile time
//! over concrete storage (fixed-size arrays, heap vectors, faer columns), a compile-time field and
//! promotion trait system, and an MPFR-backed arbitrary-precision scalar that plugs into it.

#[macro_use]
pub mod utils;

pub mod config;
pub mod core;
pub mod error;
pub mod gmp;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use gmp::*;
pub use vector::*;
pub use utils::*;

// Re-export the caller-contract switch at the crate root for convenience
pub use utils::bounds::bounds_checking_enabled;
