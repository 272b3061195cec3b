//! Tolerance-based comparison of real field values.
//!
//! `FloatCmp` applies one [`FloatCmpOptions`] to every comparison it makes. The absolute and
//! weak-relative styles are `approx`'s `abs_diff_eq` and `relative_eq`; the strong style scales
//! the tolerance by the smaller operand. The default tolerance is eight machine epsilons of the
//! value type, applied relative to the larger operand. NaN compares unequal to everything,
//! including itself.

use crate::config::{CmpStyle, FloatCmpOptions};
use crate::core::traits::{RealScalar, Scalar};
use crate::gmp::NumericLimits;
use crate::vector::DenseVector;
use approx::RelativeEq;
use std::ops::{Mul, Sub};

/// Comparator for real values under a fixed tolerance.
#[derive(Debug, Clone)]
pub struct FloatCmp<T> {
    options: FloatCmpOptions<T>,
}

impl<T> FloatCmp<T>
where
    T: RealScalar + Scalar<Real = T> + Sub<Output = T> + RelativeEq<Epsilon = T>,
{
    pub fn new(options: FloatCmpOptions<T>) -> Self {
        Self { options }
    }

    pub fn absolute(epsilon: T) -> Self {
        Self::new(FloatCmpOptions::absolute(epsilon))
    }

    pub fn relative(epsilon: T) -> Self {
        Self::new(FloatCmpOptions::relative(epsilon))
    }

    pub fn options(&self) -> &FloatCmpOptions<T> {
        &self.options
    }

    /// `a` and `b` are equal within the tolerance.
    pub fn eq(&self, a: &T, b: &T) -> bool {
        let eps = self.options.epsilon.clone();
        match self.options.style {
            CmpStyle::Absolute => a.abs_diff_eq(b, eps),
            CmpStyle::RelativeWeak => a.relative_eq(b, T::zero(), eps),
            CmpStyle::RelativeStrong => {
                let (x, y) = (a.abs(), b.abs());
                let smaller = if x < y { x } else { y };
                (a.clone() - b.clone()).abs() <= eps * smaller
            }
        }
    }

    pub fn ne(&self, a: &T, b: &T) -> bool {
        !self.eq(a, b)
    }

    /// `a` is smaller than `b` by more than the tolerance.
    pub fn lt(&self, a: &T, b: &T) -> bool {
        a < b && self.ne(a, b)
    }

    pub fn gt(&self, a: &T, b: &T) -> bool {
        a > b && self.ne(a, b)
    }

    pub fn le(&self, a: &T, b: &T) -> bool {
        a < b || self.eq(a, b)
    }

    pub fn ge(&self, a: &T, b: &T) -> bool {
        a > b || self.eq(a, b)
    }

    /// Component-wise equality of two real vectors of equal size.
    pub fn vec_eq<V, W>(&self, x: &V, y: &W) -> bool
    where
        V: DenseVector<Value = T>,
        W: DenseVector<Value = T>,
    {
        x.size() == y.size() && (0..x.size()).all(|i| self.eq(x.at(i), y.at(i)))
    }
}

impl<T> Default for FloatCmp<T>
where
    T: RealScalar
        + Scalar<Real = T>
        + Sub<Output = T>
        + RelativeEq<Epsilon = T>
        + NumericLimits
        + Mul<Output = T>
        + From<u8>,
{
    fn default() -> Self {
        Self::relative(T::from(8u8) * T::epsilon())
    }
}
