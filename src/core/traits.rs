//! Core field traits for densevec.
//!
//! Every element type of a dense vector carries two type-level facts: the *field* its
//! components are drawn from and the *real* type produced by magnitudes and norms. For real
//! scalars both are the type itself; for `Complex<T>` the real type is `T`. A type without a
//! [`FieldTraits`] impl cannot be stored in a dense vector; the compiler rejects it.

use num_complex::Complex;
use num_traits::{Num, One, Zero};
use std::ops::{Add, Div, Mul, Neg};

/// Type-level association of a scalar with its field and its real type.
pub trait FieldTraits {
    /// The scalar field the value lives in.
    type Field;
    /// The non-complex type produced by `abs` and the norms.
    type Real: RealScalar;
}

/// Field type of `K`.
pub type FieldOf<K> = <K as FieldTraits>::Field;
/// Real type of `K`.
pub type RealOf<K> = <K as FieldTraits>::Real;

/// Result type of magnitude and norm computations.
pub trait RealScalar:
    Clone + PartialOrd + Zero + One + Add<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Whether the type can represent NaN. Selects the NaN-tainting infinity norm.
    const HAS_NAN: bool;

    /// Square root. Integer types go through `f64` and truncate.
    fn sqrt_real(self) -> Self;

    fn is_nan_value(&self) -> bool {
        false
    }
}

/// Element-level operations the dense algebra needs from a scalar.
pub trait Scalar: FieldTraits + Clone {
    /// Modulus |k|.
    fn abs(&self) -> Self::Real;
    /// Manhattan magnitude |re| + |im|; equal to `abs` for real types.
    fn abs_real(&self) -> Self::Real;
    /// Squared modulus.
    fn abs2(&self) -> Self::Real;
    /// Complex conjugate; identity for real types.
    fn conjugate(&self) -> Self;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl FieldTraits for $t {
            type Field = $t;
            type Real = $t;
        }

        impl RealScalar for $t {
            const HAS_NAN: bool = true;

            #[inline]
            fn sqrt_real(self) -> Self {
                self.sqrt()
            }

            #[inline]
            fn is_nan_value(&self) -> bool {
                self.is_nan()
            }
        }

        impl Scalar for $t {
            #[inline]
            fn abs(&self) -> $t {
                <$t>::abs(*self)
            }
            #[inline]
            fn abs_real(&self) -> $t {
                <$t>::abs(*self)
            }
            #[inline]
            fn abs2(&self) -> $t {
                *self * *self
            }
            #[inline]
            fn conjugate(&self) -> $t {
                *self
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    (|$v:ident| $abs:expr; $($t:ty),*) => {$(
        impl FieldTraits for $t {
            type Field = $t;
            type Real = $t;
        }

        impl RealScalar for $t {
            const HAS_NAN: bool = false;

            #[inline]
            fn sqrt_real(self) -> Self {
                (self as f64).sqrt() as $t
            }
        }

        impl Scalar for $t {
            #[inline]
            fn abs(&self) -> $t {
                let $v = *self;
                $abs
            }
            #[inline]
            fn abs_real(&self) -> $t {
                let $v = *self;
                $abs
            }
            #[inline]
            fn abs2(&self) -> $t {
                *self * *self
            }
            #[inline]
            fn conjugate(&self) -> $t {
                *self
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
// `MIN` has no positive counterpart and maps to itself.
impl_int_scalar!(|v| v.wrapping_abs(); i8, i16, i32, i64, i128, isize);
impl_int_scalar!(|v| v; u8, u16, u32, u64, u128, usize);

impl<T: RealScalar> FieldTraits for Complex<T> {
    type Field = Complex<T>;
    type Real = T;
}

impl<T> Scalar for Complex<T>
where
    T: Scalar<Real = T> + RealScalar + Num + Neg<Output = T>,
{
    fn abs(&self) -> T {
        self.norm_sqr().sqrt_real()
    }

    fn abs_real(&self) -> T {
        self.re.abs() + self.im.abs()
    }

    fn abs2(&self) -> T {
        self.norm_sqr()
    }

    fn conjugate(&self) -> Self {
        self.conj()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_scalars_are_their_own_field() {
        assert_eq!((-3.0f64).abs(), 3.0);
        assert_eq!(Scalar::abs2(&-3i32), 9);
        assert_eq!(Scalar::abs(&7u8), 7);
        assert_eq!(Scalar::conjugate(&2.5f32), 2.5);
    }

    #[test]
    fn signed_min_magnitude_does_not_overflow() {
        assert_eq!(Scalar::abs(&i32::MIN), i32::MIN);
        assert_eq!(Scalar::abs_real(&i8::MIN), i8::MIN);
        assert_eq!(Scalar::abs(&-5i64), 5);
    }

    #[test]
    fn complex_magnitudes() {
        let z = Complex::new(3.0f64, -4.0);
        assert_eq!(Scalar::abs(&z), 5.0);
        assert_eq!(z.abs_real(), 7.0);
        assert_eq!(z.abs2(), 25.0);
        assert_eq!(z.conjugate(), Complex::new(3.0, 4.0));
    }

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(10i64.sqrt_real(), 3);
        assert!(!<i64 as RealScalar>::HAS_NAN);
        assert!(<f32 as RealScalar>::HAS_NAN);
        assert!(f64::NAN.is_nan_value());
    }
}
