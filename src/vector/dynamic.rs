//! Heap-allocated vector whose size is chosen at run time.

use crate::gmp::GmpField;
use crate::vector::dense::{impl_dense_ops, impl_scalar_ops, DenseVector};
use num_complex::Complex;
use num_traits::Zero;

/// Resizable dense vector backed by a `Vec<K>`.
#[derive(Debug, Clone, Default, Hash)]
pub struct DynamicVector<K> {
    data: Vec<K>,
}

impl<K> DynamicVector<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// `n` copies of `value`.
    pub fn with_size(n: usize, value: K) -> Self
    where
        K: Clone,
    {
        Self {
            data: vec![value; n],
        }
    }

    pub fn zeros(n: usize) -> Self
    where
        K: Zero + Clone,
    {
        Self::with_size(n, K::zero())
    }

    /// Change the number of components, filling new slots with `value`.
    pub fn resize(&mut self, n: usize, value: K)
    where
        K: Clone,
    {
        self.data.resize(n, value);
    }

    pub fn push(&mut self, value: K) {
        self.data.push(value);
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [K] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<K> {
        self.data
    }
}

impl<K> From<Vec<K>> for DynamicVector<K> {
    fn from(data: Vec<K>) -> Self {
        Self { data }
    }
}

impl<K: Clone> From<&[K]> for DynamicVector<K> {
    fn from(data: &[K]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<K> FromIterator<K> for DynamicVector<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K> DenseVector for DynamicVector<K> {
    type Value = K;

    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, i: usize) -> &K {
        assert_bounds!(
            i < self.data.len(),
            "index {} out of range for a vector of size {}",
            i,
            self.data.len()
        );
        &self.data[i]
    }

    #[inline]
    fn at_mut(&mut self, i: usize) -> &mut K {
        assert_bounds!(
            i < self.data.len(),
            "index {} out of range for a vector of size {}",
            i,
            self.data.len()
        );
        &mut self.data[i]
    }
}

impl_dense_ops!([K] DynamicVector<K>, K);

macro_rules! dynamic_vector_scalar_ops {
    ($($k:ty),*) => {$(
        impl_scalar_ops!([] DynamicVector<$k> => $k);
    )*};
}

dynamic_vector_scalar_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    Complex<f32>, Complex<f64>
);
impl_scalar_ops!([] DynamicVector<Complex<f32>> => f32);
impl_scalar_ops!([] DynamicVector<Complex<f64>> => f64);
impl_scalar_ops!([const P: u32] DynamicVector<GmpField<P>> => GmpField<P>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::FieldVector;

    #[test]
    fn resize_keeps_prefix() {
        let mut v = DynamicVector::from(vec![1.0, 2.0]);
        v.resize(4, 0.5);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 0.5, 0.5]);
        v.resize(1, 0.0);
        assert_eq!(v.size(), 1);
        assert_eq!(*v.back(), 1.0);
    }

    #[test]
    fn mixes_with_fixed_storage() {
        let mut dynamic = DynamicVector::with_size(3, 1.0f64);
        let fixed = FieldVector::new([1.0, 2.0, 3.0]);
        dynamic += &fixed;
        assert_eq!(dynamic.as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(&dynamic * &fixed, 20.0);
        assert_eq!(dynamic, FieldVector::new([2.0, 3.0, 4.0]));

        let mut copy = FieldVector::<f64, 3>::zeros();
        copy.assign(&dynamic);
        assert_eq!(copy.into_array(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn try_assign_reports_size_mismatch() {
        let mut short: DynamicVector<f64> = DynamicVector::zeros(2);
        let long = DynamicVector::from(vec![1.0, 2.0, 3.0]);
        let err = short.try_assign(&long).unwrap_err();
        assert_eq!(
            err,
            crate::error::DenseError::SizeMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn find_clamps_to_end() {
        let v: DynamicVector<i32> = (0..4).collect();
        assert_eq!(*v.find(2).get(), 2);
        assert_eq!(v.find(9), v.end());
        assert_eq!(v.find(4), v.end());
    }

    #[test]
    fn hermitian_dot_conjugates_first_operand() {
        let a = DynamicVector::from(vec![Complex::new(0.0, 1.0), Complex::new(2.0, 0.0)]);
        let b = DynamicVector::from(vec![Complex::new(0.0, 1.0), Complex::new(1.0, 1.0)]);
        // conj(i) * i + 2 * (1 + i)
        assert_eq!(a.dot(&b), Complex::new(3.0, 2.0));
        // i * i + 2 * (1 + i)
        assert_eq!(a.tdot(&b), Complex::new(1.0, 2.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_panics_in_debug() {
        let v = DynamicVector::from(vec![1, 2]);
        let _x = v[2];
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bounds check failed")]
    fn add_assign_of_mismatched_sizes_panics_in_debug() {
        let mut v = DynamicVector::from(vec![1.0, 2.0]);
        v += &DynamicVector::from(vec![1.0, 2.0, 3.0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bounds check failed")]
    fn tdot_of_mismatched_sizes_panics_in_debug() {
        let a = DynamicVector::from(vec![1.0, 2.0]);
        let b = DynamicVector::from(vec![1.0, 2.0, 3.0]);
        let _ = a.tdot(&b);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "bounds check failed")]
    fn equality_of_mismatched_sizes_panics_in_debug() {
        let a = DynamicVector::from(vec![1, 2]);
        let b = FieldVector::new([1, 2, 3]);
        let _ = a == b;
    }
}
