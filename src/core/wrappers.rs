//! faer-backed storage for dense vectors, and dense matrix-vector products.
//!
//! A [`FaerVector`] is a single `faer::Mat` column, so vectors produced by faer routines can be
//! used with the dense-vector algebra without copying. `faer::Mat` and `faer::MatRef` also
//! implement [`MatVec`] for any dense-vector storage over the same scalar.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::MatVec;
use crate::error::DenseError;
use crate::gmp::GmpField;
use crate::vector::dense::{impl_dense_ops, impl_scalar_ops, DenseVector};
use faer::{Mat, MatRef};
use num_complex::Complex;
use num_traits::Zero;
use std::ops::{AddAssign, Mul};

/// Dense vector stored as an `n × 1` faer matrix.
#[derive(Debug, Clone)]
pub struct FaerVector<T> {
    mat: Mat<T>,
}

impl<T> FaerVector<T> {
    /// Vector of length `n` with component `i` equal to `f(i)`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize) -> T) -> Self {
        Self {
            mat: Mat::from_fn(n, 1, |i, _| f(i)),
        }
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_fn(values.len(), |i| values[i].clone())
    }

    pub fn zeros(n: usize) -> Self
    where
        T: Zero,
    {
        Self::from_fn(n, |_| T::zero())
    }

    /// Adopt a faer matrix; it must have exactly one column.
    pub fn try_from_mat(mat: Mat<T>) -> Result<Self, DenseError> {
        if mat.ncols() != 1 {
            tracing::warn!(ncols = mat.ncols(), "rejected matrix as vector storage");
            return Err(DenseError::NotAColumn { ncols: mat.ncols() });
        }
        Ok(Self { mat })
    }

    pub fn as_mat(&self) -> &Mat<T> {
        &self.mat
    }

    pub fn into_mat(self) -> Mat<T> {
        self.mat
    }
}

impl<T> DenseVector for FaerVector<T> {
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.mat.nrows()
    }

    #[inline]
    fn at(&self, i: usize) -> &T {
        assert_bounds!(
            i < self.mat.nrows(),
            "index {} out of range for a vector of size {}",
            i,
            self.mat.nrows()
        );
        &self.mat[(i, 0)]
    }

    #[inline]
    fn at_mut(&mut self, i: usize) -> &mut T {
        assert_bounds!(
            i < self.mat.nrows(),
            "index {} out of range for a vector of size {}",
            i,
            self.mat.nrows()
        );
        &mut self.mat[(i, 0)]
    }
}

impl_dense_ops!([T] FaerVector<T>, T);

impl_scalar_ops!([] FaerVector<f32> => f32);
impl_scalar_ops!([] FaerVector<f64> => f64);
impl_scalar_ops!([] FaerVector<Complex<f32>> => Complex<f32>);
impl_scalar_ops!([] FaerVector<Complex<f64>> => Complex<f64>);
impl_scalar_ops!([const P: u32] FaerVector<GmpField<P>> => GmpField<P>);

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are dense vectors of any storage.
impl<T, V> MatVec<V> for Mat<T>
where
    V: DenseVector<Value = T>,
    T: Clone + Zero + AddAssign,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    fn matvec(&self, x: &V, y: &mut V) {
        assert_eq!(self.nrows(), y.size(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.size(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc += &self[(i, j)] * x.at(j);
            }
            *y.at_mut(i) = acc;
        }
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'m, T, V> MatVec<V> for MatRef<'m, T>
where
    V: DenseVector<Value = T>,
    T: Clone + Zero + AddAssign,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    fn matvec(&self, x: &V, y: &mut V) {
        assert_eq!(self.nrows(), y.size(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.size(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc += &self[(i, j)] * x.at(j);
            }
            *y.at_mut(i) = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{DynamicVector, FieldVector};

    #[test]
    fn faer_column_behaves_like_any_dense_vector() {
        let v = FaerVector::from_slice(&[1.0, 2.0, 3.0]);
        let w = FieldVector::new([2.0, 3.0, 4.0]);
        assert_eq!(v.size(), 3);
        assert_eq!(v[2], 3.0);
        assert_eq!(&v * &w, 20.0);
        assert_eq!(v.one_norm(), 6.0);
        assert_eq!(v.infinity_norm(), 3.0);
        let sum = &v + &w;
        assert_eq!(sum.as_mat()[(1, 0)], 5.0);
    }

    #[test]
    fn only_single_columns_are_adopted() {
        let wide = Mat::from_fn(2, 2, |i, j| (i + j) as f64);
        let err = FaerVector::try_from_mat(wide).unwrap_err();
        assert_eq!(err, DenseError::NotAColumn { ncols: 2 });

        let column = Mat::from_fn(2, 1, |i, _| i as f64);
        let v = FaerVector::try_from_mat(column).unwrap();
        assert_eq!(v.into_mat().nrows(), 2);
    }

    #[test]
    fn matvec_over_any_storage() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let x = DynamicVector::from(vec![1.0, 1.0, 1.0]);
        let mut y = DynamicVector::zeros(2);
        a.matvec(&x, &mut y);
        assert_eq!(y.as_slice(), &[3.0, 12.0]);

        let xs = FaerVector::from_slice(&[1.0, 0.0, -1.0]);
        let mut ys = FaerVector::zeros(2);
        a.as_ref().matvec(&xs, &mut ys);
        assert_eq!(ys[0], -2.0);
        assert_eq!(ys[1], -2.0);
    }
}
