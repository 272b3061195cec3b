//! Promotion table for `GmpField`.
//!
//! A `GmpField<P>` combined with anything promotes to a `GmpField` whose precision is the
//! larger of `P` and the other operand's: another `GmpField`'s `PREC`, or the bit width of a
//! native number. Two equal precisions stay put for every `P`.
//!
//! Rust cannot compute `max(A, B)` in the type of a generic impl, so pairs of distinct
//! precisions and native operands are listed over a fixed ladder of precisions. A precision
//! that is not on the ladder still works on its own and with itself; combining it with anything
//! else fails to compile, like any pair missing from the table.

use super::field::GmpField;
use crate::core::promotion::Promote;

/// Precisions with cross-type promotion rules.
pub const PRECISION_LADDER: [u32; 22] = [
    16, 24, 32, 53, 64, 96, 113, 128, 160, 192, 224, 256, 320, 384, 448, 512, 640, 768, 896,
    1024, 2048, 4096,
];

/// Larger of two precisions.
pub const fn max_precision(a: u32, b: u32) -> u32 {
    if a > b { a } else { b }
}

impl<const PREC: u32> Promote for GmpField<PREC> {
    type Output = GmpField<PREC>;
}

macro_rules! promote_precision_pairs {
    () => {};
    ($p:literal $(, $rest:literal)*) => {
        $(
            impl Promote<GmpField<$rest>> for GmpField<$p> {
                type Output = GmpField<{ max_precision($p, $rest) }>;
            }

            impl Promote<GmpField<$p>> for GmpField<$rest> {
                type Output = GmpField<{ max_precision($p, $rest) }>;
            }
        )*
        promote_precision_pairs!($($rest),*);
    };
}

macro_rules! promote_native {
    ([$($p:literal),*] $natives:tt) => {
        $( promote_native!(@at $p $natives); )*
    };
    (@at $p:literal [$($t:ty),*]) => {$(
        impl Promote<$t> for GmpField<$p> {
            type Output = GmpField<{ max_precision(8 * ::std::mem::size_of::<$t>() as u32, $p) }>;
        }

        impl Promote<GmpField<$p>> for $t {
            type Output = GmpField<{ max_precision(8 * ::std::mem::size_of::<$t>() as u32, $p) }>;
        }
    )*};
}

promote_precision_pairs!(
    16, 24, 32, 53, 64, 96, 113, 128, 160, 192, 224, 256, 320, 384, 448, 512, 640, 768, 896,
    1024, 2048, 4096
);

promote_native!(
    [16, 24, 32, 53, 64, 96, 113, 128, 160, 192, 224, 256, 320, 384, 448, 512, 640, 768, 896,
     1024, 2048, 4096]
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::promotion::{promote, promotion_is_symmetric, Promoted};
    use std::any::TypeId;

    #[test]
    fn wider_precision_wins() {
        assert_eq!(
            TypeId::of::<Promoted<GmpField<64>, GmpField<256>>>(),
            TypeId::of::<GmpField<256>>()
        );
        assert_eq!(
            TypeId::of::<Promoted<GmpField<512>, GmpField<128>>>(),
            TypeId::of::<GmpField<512>>()
        );
        assert_eq!(
            TypeId::of::<Promoted<GmpField<77>, GmpField<77>>>(),
            TypeId::of::<GmpField<77>>()
        );
    }

    #[test]
    fn native_width_sets_a_floor() {
        assert_eq!(TypeId::of::<Promoted<GmpField<32>, f64>>(), TypeId::of::<GmpField<64>>());
        assert_eq!(TypeId::of::<Promoted<u8, GmpField<16>>>(), TypeId::of::<GmpField<16>>());
        assert_eq!(TypeId::of::<Promoted<GmpField<96>, i128>>(), TypeId::of::<GmpField<128>>());
        assert_eq!(TypeId::of::<Promoted<f32, GmpField<256>>>(), TypeId::of::<GmpField<256>>());
    }

    #[test]
    fn ladder_is_symmetric() {
        assert!(promotion_is_symmetric::<GmpField<24>, GmpField<4096>>());
        assert!(promotion_is_symmetric::<GmpField<113>, f64>());
        assert!(promotion_is_symmetric::<i64, GmpField<53>>());
    }

    #[test]
    fn promoted_values_keep_their_value() {
        let narrow = GmpField::<64>::from(0.75f64);
        let wide: GmpField<256> = promote::<GmpField<64>, GmpField<256>>(narrow);
        assert_eq!(wide.precision(), 256);
        assert_eq!(wide, 0.75f64);
    }

    #[test]
    fn ladder_constant_matches_generated_pairs() {
        assert_eq!(PRECISION_LADDER.len(), 22);
        assert!(PRECISION_LADDER.windows(2).all(|w| w[0] < w[1]));
    }
}
