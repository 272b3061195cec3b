//! API options for tolerance-based comparison of field values.
//!
//! This module provides the `FloatCmpOptions` struct, which is used to specify
//! how two floating-point (or arbitrary-precision) values are compared: the
//! tolerance and whether it is applied absolutely or relative to the operands.

/// How the tolerance of a comparison is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmpStyle {
    /// |a - b| <= eps
    #[default]
    Absolute,
    /// |a - b| <= eps * max(|a|, |b|)
    RelativeWeak,
    /// |a - b| <= eps * min(|a|, |b|)
    RelativeStrong,
}

/// Comparison tolerance & style.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatCmpOptions<T> {
    /// Tolerance
    pub epsilon: T,

    /// Scaling of the tolerance
    pub style: CmpStyle,
}

impl<T> FloatCmpOptions<T> {
    pub fn absolute(epsilon: T) -> Self {
        Self { epsilon, style: CmpStyle::Absolute }
    }

    pub fn relative(epsilon: T) -> Self {
        Self { epsilon, style: CmpStyle::RelativeWeak }
    }
}
