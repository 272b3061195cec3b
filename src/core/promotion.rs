//! Promotion rules: the result type of a binary operation between two scalar types.
//!
//! `Promote<B> for A` names the type an `A` and a `B` combine into. A pair without an impl has
//! no common type and fails to compile; nothing converts silently. `PromoteFrom` carries the
//! value conversion into the promoted type.
//!
//! Native rules follow the usual arithmetic conversions: same type stays put, `f32 × f64`
//! gives `f64`, an integer with a float gives that float, and integers of the same signedness
//! widen to the larger. Mixed signed/unsigned integers have no common type here.
//! `Complex<A> × Complex<B>` promotes component-wise; a real float with a complex float gives
//! the complex of the promoted real.

use num_complex::Complex;
use num_traits::Zero;
use std::any::TypeId;

/// Type-level promotion of `Self` with `Rhs`.
pub trait Promote<Rhs = Self> {
    type Output;
}

/// The promoted type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Value conversion into a promoted type.
pub trait PromoteFrom<T> {
    fn promote_from(value: T) -> Self;
}

/// Convert `value` into the type it promotes to when combined with a `B`.
pub fn promote<A, B>(value: A) -> Promoted<A, B>
where
    A: Promote<B>,
    Promoted<A, B>: PromoteFrom<A>,
{
    <Promoted<A, B> as PromoteFrom<A>>::promote_from(value)
}

/// Whether `Promoted<A, B>` and `Promoted<B, A>` are the same type.
///
/// The table is specified per ordered pair; every new pair should be checked with this.
pub fn promotion_is_symmetric<A, B>() -> bool
where
    A: Promote<B> + 'static,
    B: Promote<A> + 'static,
    Promoted<A, B>: 'static,
    Promoted<B, A>: 'static,
{
    TypeId::of::<Promoted<A, B>>() == TypeId::of::<Promoted<B, A>>()
}

macro_rules! promote_self {
    ($($t:ty),*) => {$(
        impl Promote for $t {
            type Output = $t;
        }

        impl PromoteFrom<$t> for $t {
            #[inline]
            fn promote_from(value: $t) -> $t {
                value
            }
        }
    )*};
}

/// `$a × $b → $out` in both operand orders, with `as` conversions from the narrower side.
macro_rules! promote_pair {
    ($narrow:ty => $wide:ty) => {
        impl Promote<$wide> for $narrow {
            type Output = $wide;
        }

        impl Promote<$narrow> for $wide {
            type Output = $wide;
        }

        impl PromoteFrom<$narrow> for $wide {
            #[inline]
            fn promote_from(value: $narrow) -> $wide {
                value as $wide
            }
        }
    };
}

macro_rules! promote_widening {
    () => {};
    ($small:ty $(, $large:ty)*) => {
        $( promote_pair!($small => $large); )*
        promote_widening!($($large),*);
    };
}

macro_rules! promote_into_float {
    ($float:ty; $($int:ty),*) => {$(
        promote_pair!($int => $float);
    )*};
}

macro_rules! promote_real_complex {
    ($($real:ty, $cplx:ty => $out:ty);* $(;)?) => {$(
        impl Promote<Complex<$cplx>> for $real {
            type Output = Complex<$out>;
        }

        impl Promote<$real> for Complex<$cplx> {
            type Output = Complex<$out>;
        }
    )*};
}

macro_rules! promote_from_real {
    ($($real:ty => $out:ty),*) => {$(
        impl PromoteFrom<$real> for Complex<$out> {
            #[inline]
            fn promote_from(value: $real) -> Complex<$out> {
                Complex::new(value as $out, <$out>::zero())
            }
        }
    )*};
}

promote_self!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
promote_widening!(i8, i16, i32, i64, i128);
promote_widening!(u8, u16, u32, u64, u128);
promote_pair!(f32 => f64);
promote_into_float!(f32; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
promote_into_float!(f64; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A, B> Promote<Complex<B>> for Complex<A>
where
    A: Promote<B>,
{
    type Output = Complex<Promoted<A, B>>;
}

impl<A, B> PromoteFrom<Complex<A>> for Complex<B>
where
    B: PromoteFrom<A>,
{
    #[inline]
    fn promote_from(value: Complex<A>) -> Complex<B> {
        Complex::new(B::promote_from(value.re), B::promote_from(value.im))
    }
}

promote_real_complex! {
    f32, f32 => f32;
    f32, f64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}
promote_from_real!(f32 => f32, f32 => f64, f64 => f64);
