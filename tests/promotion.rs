//! Property tests for promotion and the algebraic laws of the dense operations.

use densevec::{
    promotion_is_symmetric, DenseVector, DynamicVector, FieldVector, FloatCmp, GmpField,
    Promoted,
};
use num_complex::Complex;
use proptest::prelude::*;
use std::any::TypeId;

fn components() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, 0..32)
}

proptest! {
    #[test]
    fn tdot_is_symmetric_for_reals(a in components()) {
        let x = DynamicVector::from(a.clone());
        let y: DynamicVector<f64> = a.iter().rev().copied().collect();
        let cmp = FloatCmp::absolute(1e-6);
        prop_assert!(cmp.eq(&x.tdot(&y), &y.tdot(&x)));
    }

    #[test]
    fn norms_are_ordered(a in components()) {
        let x = DynamicVector::from(a);
        let tol = 1e-9 * (1.0 + x.one_norm());
        prop_assert!(x.infinity_norm() <= x.two_norm() + tol);
        prop_assert!(x.two_norm() <= x.one_norm() + tol);
        prop_assert!((x.two_norm() * x.two_norm() - x.two_norm2()).abs() <= tol * x.two_norm().max(1.0));
    }

    #[test]
    fn add_then_subtract_is_identity(pairs in prop::collection::vec((-1_000_000i64..1_000_000, -1_000_000i64..1_000_000), 0..32)) {
        let x: DynamicVector<i64> = pairs.iter().map(|p| p.0).collect();
        let y: DynamicVector<i64> = pairs.iter().map(|p| p.1).collect();
        let back = &(&x + &y) - &y;
        prop_assert!(back == x);
        prop_assert_eq!(x.size(), pairs.len());
        prop_assert_eq!(x.is_empty(), pairs.is_empty());
        prop_assert_eq!(x.dim(), x.n());
        if !x.is_empty() {
            prop_assert!(x.one_norm() >= x.infinity_norm());
        }
    }

    #[test]
    fn negation_flips_every_component(a in components()) {
        let x = DynamicVector::from(a);
        let y = -&x;
        prop_assert_eq!(y.size(), x.size());
        for i in 0..x.size() {
            prop_assert_eq!(y[i], -x[i]);
        }
        let mut z = y.clone();
        z += &x;
        prop_assert!(z.iter().all(|c| *c == 0.0));
    }

    #[test]
    fn triangle_inequality(a in prop::array::uniform4(-1.0e3..1.0e3f64),
                           b in prop::array::uniform4(-1.0e3..1.0e3f64)) {
        let x = FieldVector::new(a);
        let y = FieldVector::new(b);
        let s = &x + &y;
        prop_assert!(s.two_norm() <= x.two_norm() + y.two_norm() + 1e-9);
    }

    #[test]
    fn decimal_strings_round_trip_through_f64(v in -1.0e6..1.0e6f64) {
        let g: GmpField<128> = v.to_string().parse().unwrap();
        prop_assert_eq!(g.to_f64(), v);
    }
}

/// Every promotion rule gives the same result type in both operand orders.
#[test]
fn promotion_table_is_symmetric() {
    assert!(promotion_is_symmetric::<i8, i32>());
    assert!(promotion_is_symmetric::<u16, f32>());
    assert!(promotion_is_symmetric::<f32, f64>());
    assert!(promotion_is_symmetric::<Complex<f64>, f32>());
    assert!(promotion_is_symmetric::<GmpField<64>, GmpField<1024>>());
    assert!(promotion_is_symmetric::<GmpField<160>, u128>());
}

/// The promoted precision is the larger precision, never less.
#[test]
fn promoted_precision_is_the_maximum() {
    assert_eq!(
        TypeId::of::<Promoted<GmpField<53>, GmpField<113>>>(),
        TypeId::of::<GmpField<113>>()
    );
    assert_eq!(
        TypeId::of::<Promoted<GmpField<16>, u64>>(),
        TypeId::of::<GmpField<64>>()
    );
    assert_eq!(
        TypeId::of::<Promoted<Complex<GmpField<96>>, Complex<GmpField<32>>>>(),
        TypeId::of::<Complex<GmpField<96>>>()
    );
}
