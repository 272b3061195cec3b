//! Numeric limits of the scalar types, in the shape of C++'s `std::numeric_limits`.
//!
//! For `GmpField<PREC>` the limits are derived from the precision: `epsilon` is `2^(1 - PREC)`,
//! and `DIGITS10` is the number of decimal digits that survive a round trip through `PREC` bits.

use super::field::GmpField;
use rug::float::Special;
use rug::ops::Pow;
use rug::Float;

/// Limits of a numeric type.
pub trait NumericLimits: Sized {
    const IS_SPECIALIZED: bool = true;
    /// Mantissa bits.
    const DIGITS: u32;
    /// Decimal digits representable without change.
    const DIGITS10: u32;
    /// Decimal digits needed to tell any two values apart.
    const MAX_DIGITS10: u32;

    /// Smallest positive value.
    fn min_positive() -> Self;
    /// Largest finite value.
    fn max_value() -> Self;
    /// Most negative finite value.
    fn lowest() -> Self;
    /// Difference between 1 and the next representable value.
    fn epsilon() -> Self;
    /// Largest rounding error in units of the last place.
    fn round_error() -> Self;
    fn infinity() -> Self;
    fn quiet_nan() -> Self;
}

/// `floor(bits * log10(2))`.
pub const fn bits_to_digits10(bits: u32) -> u32 {
    // log10(2) to 15 places
    ((bits as u128 * 301_029_995_663_981) / 1_000_000_000_000_000) as u32
}

macro_rules! native_limits {
    ($t:ident, $digits10:expr, $max_digits10:expr) => {
        impl NumericLimits for $t {
            const DIGITS: u32 = $t::MANTISSA_DIGITS;
            const DIGITS10: u32 = $digits10;
            const MAX_DIGITS10: u32 = $max_digits10;

            fn min_positive() -> $t {
                $t::MIN_POSITIVE
            }
            fn max_value() -> $t {
                $t::MAX
            }
            fn lowest() -> $t {
                $t::MIN
            }
            fn epsilon() -> $t {
                $t::EPSILON
            }
            fn round_error() -> $t {
                0.5
            }
            fn infinity() -> $t {
                $t::INFINITY
            }
            fn quiet_nan() -> $t {
                $t::NAN
            }
        }
    };
}

native_limits!(f32, 6, 9);
native_limits!(f64, 15, 17);

impl<const PREC: u32> NumericLimits for GmpField<PREC> {
    const DIGITS: u32 = PREC;
    const DIGITS10: u32 = bits_to_digits10(PREC);
    const MAX_DIGITS10: u32 = bits_to_digits10(PREC);

    fn min_positive() -> Self {
        let mut tiny = Float::with_val(PREC, Special::Zero);
        tiny.next_up();
        Self::from_raw(tiny)
    }

    fn max_value() -> Self {
        let mut huge = Float::with_val(PREC, Special::Infinity);
        huge.next_down();
        Self::from_raw(huge)
    }

    fn lowest() -> Self {
        -<Self as NumericLimits>::max_value()
    }

    fn epsilon() -> Self {
        Self::from_raw(Float::with_val(PREC, 2u32).pow(1 - PREC as i32))
    }

    fn round_error() -> Self {
        Self::from(0.5f64)
    }

    fn infinity() -> Self {
        Self::from_raw(Float::with_val(PREC, Special::Infinity))
    }

    fn quiet_nan() -> Self {
        Self::from_raw(Float::with_val(PREC, Special::Nan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_is_the_gap_above_one() {
        type G = GmpField<113>;
        let mut above_one = Float::with_val(113, 1u32);
        above_one.next_up();
        let gap = GmpField::<113>::from_raw(above_one) - G::from(1u32);
        assert_eq!(gap, <G as NumericLimits>::epsilon());
        assert_eq!(<G as NumericLimits>::epsilon().to_f64(), 2f64.powi(-112));
    }

    #[test]
    fn digits_follow_precision() {
        assert_eq!(<GmpField<53> as NumericLimits>::DIGITS, 53);
        assert_eq!(<GmpField<53> as NumericLimits>::DIGITS10, 15);
        assert_eq!(<GmpField<256> as NumericLimits>::DIGITS10, 77);
        assert_eq!(<GmpField<1024> as NumericLimits>::MAX_DIGITS10, 308);
        assert_eq!(<f64 as NumericLimits>::DIGITS, 53);
        assert_eq!(<f32 as NumericLimits>::DIGITS, 24);
    }

    #[test]
    fn extreme_values() {
        type G = GmpField<64>;
        let max = <G as NumericLimits>::max_value();
        assert!(max.is_finite());
        assert!(<G as NumericLimits>::lowest() < 0.0f64);
        assert!(<G as NumericLimits>::min_positive() > 0.0f64);
        assert!(<G as NumericLimits>::infinity().is_infinite());
        assert!(<G as NumericLimits>::quiet_nan().is_nan());
        assert_eq!(<G as NumericLimits>::round_error(), 0.5f64);
    }
}
