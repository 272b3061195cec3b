//! Elementary functions on `GmpField`, evaluated at the value's own precision.

use super::field::GmpField;
use num_traits::Zero;
use rug::ops::Pow;

macro_rules! forward_unary {
    ($($(#[$doc:meta])* $name:ident => $engine:ident),* $(,)?) => {
        impl<const PREC: u32> GmpField<PREC> {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(&self) -> Self {
                    Self::wrap(self.raw().clone().$engine())
                }
            )*
        }
    };
}

forward_unary! {
    abs => abs,
    sqrt => sqrt,
    cbrt => cbrt,
    exp => exp,
    exp2 => exp2,
    /// e^x - 1, accurate near zero.
    exp_m1 => exp_m1,
    /// Natural logarithm.
    ln => ln,
    log2 => log2,
    log10 => log10,
    /// ln(1 + x), accurate near zero.
    ln_1p => ln_1p,
    sin => sin,
    cos => cos,
    tan => tan,
    asin => asin,
    acos => acos,
    atan => atan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    asinh => asinh,
    acosh => acosh,
    atanh => atanh,
    erf => erf,
    erfc => erfc,
    /// Gamma function.
    tgamma => gamma,
    /// Round toward +∞.
    ceil => ceil,
    /// Round toward -∞.
    floor => floor,
    /// Round to nearest, ties away from zero.
    round => round,
    /// Round to nearest, ties to even.
    rint => round_even,
    /// Round toward zero.
    trunc => trunc,
    recip => recip,
}

impl<const PREC: u32> GmpField<PREC> {
    /// `self` raised to a real power.
    pub fn pow(&self, exponent: &Self) -> Self {
        Self::wrap(self.raw().clone().pow(exponent.raw()))
    }

    pub fn powi(&self, exponent: i32) -> Self {
        Self::wrap(self.raw().clone().pow(exponent))
    }

    /// Angle of the point `(x, self)`.
    pub fn atan2(&self, x: &Self) -> Self {
        Self::wrap(self.raw().clone().atan2(x.raw()))
    }

    pub fn hypot(&self, other: &Self) -> Self {
        Self::wrap(self.raw().clone().hypot(other.raw()))
    }

    /// `self * a + b` with a single rounding.
    pub fn mul_add(&self, a: &Self, b: &Self) -> Self {
        Self::wrap(self.raw().clone().mul_add(a.raw(), b.raw()))
    }

    /// Larger operand; a NaN operand loses against a number.
    pub fn fmax(&self, other: &Self) -> Self {
        Self::wrap(self.raw().clone().max(other.raw()))
    }

    /// Smaller operand; a NaN operand loses against a number.
    pub fn fmin(&self, other: &Self) -> Self {
        Self::wrap(self.raw().clone().min(other.raw()))
    }

    /// Positive difference `max(self - other, 0)`.
    pub fn fdim(&self, other: &Self) -> Self {
        Self::wrap(self.raw().clone().positive_diff(other.raw()))
    }

    /// IEEE remainder: `self - n * divisor` with `n` the nearest integer to the quotient.
    pub fn remainder(&self, divisor: &Self) -> Self {
        Self::wrap(self.raw().clone().remainder(divisor.raw()))
    }

    /// Truncated remainder: `self - trunc(self / divisor) * divisor`, computed exactly.
    pub fn fmod(&self, divisor: &Self) -> Self {
        Self::wrap(self.raw().clone() % divisor.raw())
    }

    /// ln |Γ(x)|, finite for negative non-integers as well.
    pub fn lgamma(&self) -> Self {
        Self::wrap(self.raw().clone().ln_abs_gamma().0)
    }

    /// Nearest integer, ties away from zero; `None` when out of `i64` range or not finite.
    pub fn lround(&self) -> Option<i64> {
        self.round().raw().to_integer().and_then(|i| i.to_i64())
    }

    /// Fractional part, with the sign of `self`.
    pub fn fract(&self) -> Self {
        Self::wrap(self.raw().clone().fract())
    }

    pub fn is_nan(&self) -> bool {
        self.raw().is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.raw().is_finite()
    }

    pub fn is_infinite(&self) -> bool {
        self.raw().is_infinite()
    }

    /// Whether the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.raw().is_integer()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.raw().is_sign_negative()
    }

    /// Sign bit copied from `sign`, magnitude from `self`.
    pub fn copysign(&self, sign: &Self) -> Self {
        let magnitude = self.abs();
        if sign.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Whether the value is zero, of either sign.
    pub fn is_zero_value(&self) -> bool {
        Zero::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gmp::MathematicalConstants;

    type G = GmpField<96>;

    #[test]
    fn rint_ties_to_even() {
        assert_eq!(G::from(2.5).rint(), G::from(2));
        assert_eq!(G::from(3.5).rint(), G::from(4));
        assert_eq!(G::from(-1.5).rint(), G::from(-2));
        assert_eq!(G::from(-2.5).rint(), G::from(-2));
        assert_eq!(G::from(2.4).rint(), G::from(2));
        assert_eq!(G::from(-7).rint(), G::from(-7));
    }

    #[test]
    fn rounding_family() {
        let x = G::from(-2.5);
        assert_eq!(x.round(), G::from(-3));
        assert_eq!(x.trunc(), G::from(-2));
        assert_eq!(x.floor(), G::from(-3));
        assert_eq!(x.ceil(), G::from(-2));
        assert_eq!(x.lround(), Some(-3));
        assert_eq!(x.fract(), G::from(-0.5));
    }

    #[test]
    fn remainders() {
        assert_eq!(G::from(7).fmod(&G::from(4)), G::from(3));
        assert_eq!(G::from(-7).fmod(&G::from(4)), G::from(-3));
        assert_eq!(G::from(7).remainder(&G::from(4)), G::from(-1));
    }

    #[test]
    fn fmod_is_exact_for_large_quotients() {
        let big = GmpField::<128>::from(10).powi(40);
        let three = GmpField::<128>::from(3);
        assert_eq!(big.fmod(&three), GmpField::<128>::from(1));
        assert_eq!(big % &three, GmpField::<128>::from(1));

        let x = GmpField::<53>::from(10).powi(17);
        assert_eq!(x.fmod(&GmpField::<53>::from(3)), GmpField::<53>::from(1));
    }

    #[test]
    fn lgamma_of_negative_argument() {
        // |Γ(-1/2)| = 2·sqrt(pi)
        let expected = (G::from(2) * G::pi().sqrt()).ln();
        let got = G::from(-0.5).lgamma();
        assert!(!got.is_nan());
        assert!((got - expected).abs() < G::from(1e-25));
        assert_eq!(G::from(3).lgamma(), G::from(2).ln());
    }

    #[test]
    fn binary_functions() {
        assert_eq!(G::from(3).hypot(&G::from(4)), G::from(5));
        assert_eq!(G::from(2).powi(10), G::from(1024));
        assert_eq!(G::from(4).pow(&G::from(0.5)), G::from(2));
        assert_eq!(G::from(2).mul_add(&G::from(3), &G::from(1)), G::from(7));
        assert_eq!(G::from(1).fdim(&G::from(3)), G::from(0));
        assert_eq!(G::from(-1).fmax(&G::from(3)), G::from(3));
        assert_eq!(G::from(5).copysign(&G::from(-0.0)), G::from(-5));
    }

    #[test]
    fn classification() {
        let nan = G::from(f64::NAN);
        assert!(nan.is_nan());
        assert!(!nan.is_finite());
        assert!(G::from(f64::INFINITY).is_infinite());
        assert_eq!(nan.lround(), None);
        assert!(G::from(0).is_zero_value());
    }
}
