//! Precision-parameterized arbitrary-precision scalar.
//!
//! `GmpField<PREC>` holds an MPFR number (through `rug::Float`) with `PREC` significant bits.
//! Different precisions are different types. Arithmetic between two values of the same type
//! stays at `PREC`; mixing with a native number promotes through the
//! [`Promote`](crate::core::promotion::Promote) table so that the working precision never drops
//! below the wider operand.
//!
//! Decimal strings are the only way to enter values that no native float can hold exactly:
//! `"0.1".parse::<GmpField<256>>()` is exact to 256 bits, `GmpField::<256>::from(0.1)` is not.

use crate::core::promotion::{promote, Promote, PromoteFrom, Promoted};
use crate::core::traits::{FieldTraits, RealScalar, Scalar};
use crate::error::DenseError;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Bounded, FromPrimitive, Num, One, Signed, ToPrimitive, Zero};
use rug::Float;
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

/// Largest precision accepted for `GmpField`.
pub const MAX_PRECISION: u32 = i32::MAX as u32 - 256;

/// Arbitrary-precision real number with `PREC` bits of mantissa.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct GmpField<const PREC: u32>(Float);

impl<const PREC: u32> GmpField<PREC> {
    const VALID_PRECISION: () = assert!(
        PREC >= 1 && PREC <= MAX_PRECISION,
        "GmpField precision must lie in 1..=MAX_PRECISION"
    );

    /// Number of significant bits.
    pub const PRECISION: u32 = PREC;

    /// Zero at `PREC` bits.
    pub fn new() -> Self {
        let () = Self::VALID_PRECISION;
        Self(Float::new(PREC))
    }

    /// Wrap an engine value, rounding it to `PREC` bits.
    pub fn from_raw(value: Float) -> Self {
        let () = Self::VALID_PRECISION;
        if value.prec() == PREC {
            Self(value)
        } else {
            Self(Float::with_val(PREC, value))
        }
    }

    /// Parse a base-10 literal at full precision.
    pub fn from_decimal(literal: &str) -> Result<Self, DenseError> {
        literal.parse()
    }

    pub fn as_raw(&self) -> &Float {
        &self.0
    }

    pub fn into_raw(self) -> Float {
        self.0
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        PREC
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Nearest `f32`.
    pub fn to_f32(&self) -> f32 {
        self.0.to_f32()
    }

    /// Engine result of an operation on `PREC`-bit operands; already at `PREC`.
    #[inline]
    pub(crate) fn wrap(value: Float) -> Self {
        debug_assert_eq!(value.prec(), PREC);
        Self(value)
    }

    #[inline]
    pub(crate) fn raw(&self) -> &Float {
        &self.0
    }
}

impl<const PREC: u32> Default for GmpField<PREC> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const PREC: u32> FromStr for GmpField<PREC> {
    type Err = DenseError;

    fn from_str(s: &str) -> Result<Self, DenseError> {
        let () = Self::VALID_PRECISION;
        match Float::parse(s) {
            Ok(parsed) => Ok(Self(Float::with_val(PREC, parsed))),
            Err(err) => {
                tracing::debug!(input = s, precision = PREC, %err, "rejected decimal literal");
                Err(DenseError::Parse {
                    input: s.to_owned(),
                    reason: err.to_string(),
                })
            }
        }
    }
}

impl<const PREC: u32> fmt::Display for GmpField<PREC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! convert_native {
    ($($t:ty),*) => {$(
        impl<const PREC: u32> From<$t> for GmpField<PREC> {
            #[inline]
            fn from(value: $t) -> Self {
                let () = Self::VALID_PRECISION;
                Self(Float::with_val(PREC, value))
            }
        }

        impl<const PREC: u32> PromoteFrom<$t> for GmpField<PREC> {
            #[inline]
            fn promote_from(value: $t) -> Self {
                Self::from(value)
            }
        }
    )*};
}

convert_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<const A: u32, const B: u32> PromoteFrom<GmpField<A>> for GmpField<B> {
    #[inline]
    fn promote_from(value: GmpField<A>) -> Self {
        Self::from_raw(value.0)
    }
}

impl<const PREC: u32> From<GmpField<PREC>> for f64 {
    fn from(value: GmpField<PREC>) -> f64 {
        value.to_f64()
    }
}

impl<const PREC: u32> From<&GmpField<PREC>> for f64 {
    fn from(value: &GmpField<PREC>) -> f64 {
        value.to_f64()
    }
}

impl<const PREC: u32> From<GmpField<PREC>> for f32 {
    fn from(value: GmpField<PREC>) -> f32 {
        value.to_f32()
    }
}

//===== same-precision arithmetic

macro_rules! forward_binop {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident),*) => {$(
        impl<const PREC: u32> $Op for GmpField<PREC> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self($Op::$op(self.0, rhs.0))
            }
        }

        impl<const PREC: u32> $Op<&GmpField<PREC>> for GmpField<PREC> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: &Self) -> Self {
                Self($Op::$op(self.0, &rhs.0))
            }
        }

        impl<const PREC: u32> $Op<&GmpField<PREC>> for &GmpField<PREC> {
            type Output = GmpField<PREC>;

            #[inline]
            fn $op(self, rhs: &GmpField<PREC>) -> GmpField<PREC> {
                GmpField($Op::$op(self.0.clone(), &rhs.0))
            }
        }

        impl<const PREC: u32> $Op<GmpField<PREC>> for &GmpField<PREC> {
            type Output = GmpField<PREC>;

            #[inline]
            fn $op(self, rhs: GmpField<PREC>) -> GmpField<PREC> {
                GmpField($Op::$op(self.0.clone(), &rhs.0))
            }
        }

        impl<const PREC: u32> $OpAssign for GmpField<PREC> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                $OpAssign::$op_assign(&mut self.0, rhs.0);
            }
        }

        impl<const PREC: u32> $OpAssign<&GmpField<PREC>> for GmpField<PREC> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Self) {
                $OpAssign::$op_assign(&mut self.0, &rhs.0);
            }
        }
    )*};
}

forward_binop!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign
);

// Truncated remainder (C fmod).
impl<const PREC: u32> Rem for GmpField<PREC> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.fmod(&rhs)
    }
}

impl<const PREC: u32> Rem<&GmpField<PREC>> for GmpField<PREC> {
    type Output = Self;

    fn rem(self, rhs: &Self) -> Self {
        self.fmod(rhs)
    }
}

impl<const PREC: u32> RemAssign for GmpField<PREC> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.fmod(&rhs);
    }
}

impl<const PREC: u32> RemAssign<&GmpField<PREC>> for GmpField<PREC> {
    fn rem_assign(&mut self, rhs: &Self) {
        *self = self.fmod(rhs);
    }
}

impl<const PREC: u32> Neg for GmpField<PREC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const PREC: u32> Neg for &GmpField<PREC> {
    type Output = GmpField<PREC>;

    #[inline]
    fn neg(self) -> GmpField<PREC> {
        GmpField(-self.0.clone())
    }
}

impl<const PREC: u32> Sum for GmpField<PREC> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, x| acc + x)
    }
}

impl<'a, const PREC: u32> Sum<&'a GmpField<PREC>> for GmpField<PREC> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, x| acc + x)
    }
}

impl<const PREC: u32> Product for GmpField<PREC> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

//===== mixed arithmetic with native numbers

macro_rules! mixed_binop {
    ($t:ty; $($Op:ident $op:ident),*) => {$(
        impl<const PREC: u32> $Op<$t> for GmpField<PREC>
        where
            GmpField<PREC>: Promote<$t>,
            Promoted<GmpField<PREC>, $t>: PromoteFrom<GmpField<PREC>>
                + PromoteFrom<$t>
                + $Op<Output = Promoted<GmpField<PREC>, $t>>,
        {
            type Output = Promoted<GmpField<PREC>, $t>;

            fn $op(self, rhs: $t) -> Self::Output {
                let lhs = promote::<GmpField<PREC>, $t>(self);
                $Op::$op(lhs, <Self::Output as PromoteFrom<$t>>::promote_from(rhs))
            }
        }

        impl<const PREC: u32> $Op<GmpField<PREC>> for $t
        where
            $t: Promote<GmpField<PREC>>,
            Promoted<$t, GmpField<PREC>>: PromoteFrom<GmpField<PREC>>
                + PromoteFrom<$t>
                + $Op<Output = Promoted<$t, GmpField<PREC>>>,
        {
            type Output = Promoted<$t, GmpField<PREC>>;

            fn $op(self, rhs: GmpField<PREC>) -> Self::Output {
                let lhs = promote::<$t, GmpField<PREC>>(self);
                $Op::$op(lhs, <Self::Output as PromoteFrom<GmpField<PREC>>>::promote_from(rhs))
            }
        }
    )*};
}

macro_rules! mixed_native {
    ($($t:ty),*) => {$(
        mixed_binop!($t; Add add, Sub sub, Mul mul, Div div);

        impl<const PREC: u32> PartialEq<$t> for GmpField<PREC> {
            fn eq(&self, other: &$t) -> bool {
                self.0 == *other
            }
        }

        impl<const PREC: u32> PartialEq<GmpField<PREC>> for $t {
            fn eq(&self, other: &GmpField<PREC>) -> bool {
                other.0 == *self
            }
        }

        impl<const PREC: u32> PartialOrd<$t> for GmpField<PREC> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl<const PREC: u32> PartialOrd<GmpField<PREC>> for $t {
            fn partial_cmp(&self, other: &GmpField<PREC>) -> Option<Ordering> {
                other.0.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

mixed_native!(i32, i64, u32, u64, f32, f64);

//===== num-traits

impl<const PREC: u32> Zero for GmpField<PREC> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const PREC: u32> One for GmpField<PREC> {
    fn one() -> Self {
        Self::from(1u32)
    }
}

impl<const PREC: u32> Num for GmpField<PREC> {
    type FromStrRadixErr = DenseError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, DenseError> {
        let () = Self::VALID_PRECISION;
        if !(2..=36).contains(&radix) {
            return Err(DenseError::Unsupported("radix outside 2..=36"));
        }
        Float::parse_radix(s, radix as i32)
            .map(|parsed| Self(Float::with_val(PREC, parsed)))
            .map_err(|err| DenseError::Parse {
                input: s.to_owned(),
                reason: err.to_string(),
            })
    }
}

impl<const PREC: u32> Signed for GmpField<PREC> {
    fn abs(&self) -> Self {
        GmpField::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        self.fdim(other)
    }

    fn signum(&self) -> Self {
        Self::wrap(self.0.clone().signum())
    }

    fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_nan()
    }

    fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_nan()
    }
}

impl<const PREC: u32> Bounded for GmpField<PREC> {
    fn min_value() -> Self {
        <Self as crate::gmp::limits::NumericLimits>::lowest()
    }

    fn max_value() -> Self {
        <Self as crate::gmp::limits::NumericLimits>::max_value()
    }
}

// Same decision order as approx's float impls, evaluated at full precision.
impl<const PREC: u32> AbsDiffEq for GmpField<PREC> {
    type Epsilon = Self;

    fn default_epsilon() -> Self {
        <Self as crate::gmp::limits::NumericLimits>::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}

impl<const PREC: u32> RelativeEq for GmpField<PREC> {
    fn default_max_relative() -> Self {
        <Self as crate::gmp::limits::NumericLimits>::epsilon()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self, max_relative: Self) -> bool {
        if self == other {
            return true;
        }
        if self.0.is_infinite() || other.0.is_infinite() {
            return false;
        }
        let diff = (self - other).abs();
        if diff <= epsilon {
            return true;
        }
        let largest = self.abs().fmax(&other.abs());
        diff <= largest * max_relative
    }
}

impl<const PREC: u32> ToPrimitive for GmpField<PREC> {
    fn to_i64(&self) -> Option<i64> {
        self.0.clone().trunc().to_integer().and_then(|i| i.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.clone().trunc().to_integer().and_then(|i| i.to_u64())
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.0.to_f32())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl<const PREC: u32> FromPrimitive for GmpField<PREC> {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::from(n))
    }
}

//===== field traits

impl<const PREC: u32> FieldTraits for GmpField<PREC> {
    type Field = GmpField<PREC>;
    type Real = GmpField<PREC>;
}

impl<const PREC: u32> RealScalar for GmpField<PREC> {
    const HAS_NAN: bool = true;

    fn sqrt_real(self) -> Self {
        Self::wrap(self.0.sqrt())
    }

    fn is_nan_value(&self) -> bool {
        self.0.is_nan()
    }
}

impl<const PREC: u32> Scalar for GmpField<PREC> {
    fn abs(&self) -> Self {
        GmpField::abs(self)
    }

    fn abs_real(&self) -> Self {
        GmpField::abs(self)
    }

    fn abs2(&self) -> Self {
        self * self
    }

    fn conjugate(&self) -> Self {
        self.clone()
    }
}
