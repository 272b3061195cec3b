//! Mathematical constants at the precision of the requesting type.

use super::field::GmpField;
use rug::float::Constant;
use rug::Float;

pub trait MathematicalConstants: Sized {
    /// Euler's number.
    fn e() -> Self;
    fn pi() -> Self;
}

impl MathematicalConstants for f32 {
    fn e() -> f32 {
        std::f32::consts::E
    }
    fn pi() -> f32 {
        std::f32::consts::PI
    }
}

impl MathematicalConstants for f64 {
    fn e() -> f64 {
        std::f64::consts::E
    }
    fn pi() -> f64 {
        std::f64::consts::PI
    }
}

impl<const PREC: u32> MathematicalConstants for GmpField<PREC> {
    fn e() -> Self {
        Self::from_raw(Float::with_val(PREC, 1u32).exp())
    }

    fn pi() -> Self {
        Self::from_raw(Float::with_val(PREC, Constant::Pi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_carry_full_precision() {
        type G = GmpField<256>;
        let pi: G = "3.14159265358979323846264338327950288419716939937510582097494459230781640628620899"
            .parse()
            .unwrap();
        let err = (G::pi() - pi).abs();
        assert!(err < 1e-75f64);
        assert!((G::e().ln() - G::from(1u32)).abs() < 1e-75f64);
        assert_eq!(GmpField::<53>::pi().to_f64(), f64::pi());
    }
}
