//! Fixed-size vector with its components stored inline.

use crate::gmp::GmpField;
use crate::vector::dense::{impl_dense_ops, impl_scalar_ops, DenseVector};
use num_complex::Complex;
use num_traits::Zero;

/// Vector of `N` components of type `K`, stored in a `[K; N]`.
#[derive(Debug, Clone, Copy, Hash)]
pub struct FieldVector<K, const N: usize> {
    data: [K; N],
}

impl<K, const N: usize> FieldVector<K, N> {
    pub const fn new(data: [K; N]) -> Self {
        Self { data }
    }

    /// All components equal to `k`.
    pub fn splat(k: K) -> Self
    where
        K: Clone,
    {
        Self {
            data: std::array::from_fn(|_| k.clone()),
        }
    }

    pub fn zeros() -> Self
    where
        K: Zero,
    {
        Self {
            data: std::array::from_fn(|_| K::zero()),
        }
    }

    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [K] {
        &mut self.data
    }

    pub fn into_array(self) -> [K; N] {
        self.data
    }
}

impl<K: Default, const N: usize> Default for FieldVector<K, N> {
    fn default() -> Self {
        Self {
            data: std::array::from_fn(|_| K::default()),
        }
    }
}

impl<K, const N: usize> From<[K; N]> for FieldVector<K, N> {
    fn from(data: [K; N]) -> Self {
        Self { data }
    }
}

impl<K, const N: usize> DenseVector for FieldVector<K, N> {
    type Value = K;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, i: usize) -> &K {
        assert_bounds!(i < N, "index {} out of range for a vector of size {}", i, N);
        &self.data[i]
    }

    #[inline]
    fn at_mut(&mut self, i: usize) -> &mut K {
        assert_bounds!(i < N, "index {} out of range for a vector of size {}", i, N);
        &mut self.data[i]
    }
}

impl_dense_ops!([K, const N: usize] FieldVector<K, N>, K);

macro_rules! field_vector_scalar_ops {
    ($($k:ty),*) => {$(
        impl_scalar_ops!([const N: usize] FieldVector<$k, N> => $k);
    )*};
}

field_vector_scalar_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    Complex<f32>, Complex<f64>
);
impl_scalar_ops!([const N: usize] FieldVector<Complex<f32>, N> => f32);
impl_scalar_ops!([const N: usize] FieldVector<Complex<f64>, N> => f64);
impl_scalar_ops!([const P: u32, const N: usize] FieldVector<GmpField<P>, N> => GmpField<P>);
