//! Dense-vector interface with exchangeable storage.
//!
//! [`DenseVector`] is the algorithm layer: a storage type supplies `size`, `at` and `at_mut`,
//! and receives the whole vector-space algebra, dot products, norms and cursors as provided
//! methods. Everything is resolved by monomorphization; there is no dynamic dispatch, and the
//! layer never allocates or decides how storage is sized.
//!
//! Operands of binary operations must have equal sizes. That is a caller contract, checked by
//! `assert_bounds!` in debug builds or with the `bounds-checking` feature.

use crate::core::promotion::{Promote, PromoteFrom, Promoted};
use crate::core::traits::{FieldOf, FieldTraits, RealOf, RealScalar, Scalar};
use crate::error::DenseError;
use crate::vector::iter::{ConstIter, DenseIterator, MutIter};
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{AddAssign, DivAssign, Mul, MulAssign, Neg, SubAssign};

/// Result type of a dot product between `V` and `W`.
pub type PromotedField<V, W> =
    Promoted<FieldOf<<V as DenseVector>::Value>, FieldOf<<W as DenseVector>::Value>>;

/// Interface for dense vectors over a field.
pub trait DenseVector: Sized {
    /// Component type.
    type Value;

    //===== storage contract

    /// Number of components.
    fn size(&self) -> usize;
    /// Component `i`, `i < size()`.
    fn at(&self, i: usize) -> &Self::Value;
    /// Mutable component `i`, `i < size()`.
    fn at_mut(&mut self, i: usize) -> &mut Self::Value;

    //===== access to components

    /// First component. The vector must not be empty.
    fn front(&self) -> &Self::Value {
        assert_bounds!(!self.is_empty(), "front() of an empty vector");
        self.at(0)
    }

    fn front_mut(&mut self) -> &mut Self::Value {
        assert_bounds!(!self.is_empty(), "front_mut() of an empty vector");
        self.at_mut(0)
    }

    /// Last component. The vector must not be empty.
    fn back(&self) -> &Self::Value {
        assert_bounds!(!self.is_empty(), "back() of an empty vector");
        self.at(self.size() - 1)
    }

    fn back_mut(&mut self) -> &mut Self::Value {
        assert_bounds!(!self.is_empty(), "back_mut() of an empty vector");
        let last = self.size() - 1;
        self.at_mut(last)
    }

    //===== sizes

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of blocks; each block is a single component here.
    fn n(&self) -> usize {
        self.size()
    }

    /// Dimension of the vector space.
    fn dim(&self) -> usize {
        self.size()
    }

    //===== assignment

    /// Set every component to `k`.
    fn fill(&mut self, k: Self::Value) -> &mut Self
    where
        Self::Value: Clone,
    {
        for i in 0..self.size() {
            *self.at_mut(i) = k.clone();
        }
        self
    }

    /// Copy `other` component-wise, converting each element. Sizes must already match.
    fn assign<W>(&mut self, other: &W) -> &mut Self
    where
        W: DenseVector,
        W::Value: Clone + Into<Self::Value>,
    {
        assert_bounds!(
            other.size() == self.size(),
            "assign: size mismatch ({} vs {})",
            other.size(),
            self.size()
        );
        for i in 0..self.size() {
            *self.at_mut(i) = other.at(i).clone().into();
        }
        self
    }

    /// Like [`assign`](DenseVector::assign), reporting a size mismatch instead of panicking.
    fn try_assign<W>(&mut self, other: &W) -> Result<&mut Self, DenseError>
    where
        W: DenseVector,
        W::Value: Clone + Into<Self::Value>,
    {
        if other.size() != self.size() {
            return Err(DenseError::SizeMismatch {
                expected: self.size(),
                found: other.size(),
            });
        }
        Ok(self.assign(other))
    }

    //===== vector space arithmetic

    /// self += x
    fn add_assign_vec<W>(&mut self, x: &W) -> &mut Self
    where
        W: DenseVector,
        Self::Value: for<'a> AddAssign<&'a W::Value>,
    {
        assert_bounds!(x.size() == self.size());
        for i in 0..self.size() {
            *self.at_mut(i) += x.at(i);
        }
        self
    }

    /// self -= x
    fn sub_assign_vec<W>(&mut self, x: &W) -> &mut Self
    where
        W: DenseVector,
        Self::Value: for<'a> SubAssign<&'a W::Value>,
    {
        assert_bounds!(x.size() == self.size());
        for i in 0..self.size() {
            *self.at_mut(i) -= x.at(i);
        }
        self
    }

    /// self += a x
    fn axpy<W>(&mut self, a: &FieldOf<Self::Value>, x: &W) -> &mut Self
    where
        W: DenseVector,
        Self::Value: FieldTraits + AddAssign,
        for<'a> &'a FieldOf<Self::Value>: Mul<&'a W::Value, Output = Self::Value>,
    {
        assert_bounds!(x.size() == self.size());
        for i in 0..self.size() {
            *self.at_mut(i) += a * x.at(i);
        }
        self
    }

    /// self + b, as a new vector of the same storage type.
    fn added<W>(&self, b: &W) -> Self
    where
        Self: Clone,
        W: DenseVector,
        Self::Value: for<'a> AddAssign<&'a W::Value>,
    {
        let mut z = self.clone();
        z.add_assign_vec(b);
        z
    }

    /// self - b, as a new vector of the same storage type.
    fn subtracted<W>(&self, b: &W) -> Self
    where
        Self: Clone,
        W: DenseVector,
        Self::Value: for<'a> SubAssign<&'a W::Value>,
    {
        let mut z = self.clone();
        z.sub_assign_vec(b);
        z
    }

    /// Component-wise negation.
    fn negated(&self) -> Self
    where
        Self: Clone,
        Self::Value: Clone + Neg<Output = Self::Value>,
    {
        let mut result = self.clone();
        for i in 0..self.size() {
            *result.at_mut(i) = -self.at(i).clone();
        }
        result
    }

    //===== scalar broadcast

    /// Add `k` to every component.
    fn add_scalar<S>(&mut self, k: S) -> &mut Self
    where
        S: Into<Self::Value>,
        Self::Value: for<'a> AddAssign<&'a Self::Value>,
    {
        let k = k.into();
        for i in 0..self.size() {
            *self.at_mut(i) += &k;
        }
        self
    }

    /// Subtract `k` from every component.
    fn sub_scalar<S>(&mut self, k: S) -> &mut Self
    where
        S: Into<Self::Value>,
        Self::Value: for<'a> SubAssign<&'a Self::Value>,
    {
        let k = k.into();
        for i in 0..self.size() {
            *self.at_mut(i) -= &k;
        }
        self
    }

    /// Multiply every component by the field element `k`.
    fn scale<S>(&mut self, k: S) -> &mut Self
    where
        Self::Value: FieldTraits + for<'a> MulAssign<&'a FieldOf<Self::Value>>,
        S: Into<FieldOf<Self::Value>>,
    {
        let k = k.into();
        for i in 0..self.size() {
            *self.at_mut(i) *= &k;
        }
        self
    }

    /// Divide every component by the field element `k`.
    fn div_scalar<S>(&mut self, k: S) -> &mut Self
    where
        Self::Value: FieldTraits + for<'a> DivAssign<&'a FieldOf<Self::Value>>,
        S: Into<FieldOf<Self::Value>>,
    {
        let k = k.into();
        for i in 0..self.size() {
            *self.at_mut(i) /= &k;
        }
        self
    }

    //===== comparison

    fn vec_eq<W>(&self, x: &W) -> bool
    where
        W: DenseVector,
        Self::Value: PartialEq<W::Value>,
    {
        assert_bounds!(x.size() == self.size());
        (0..self.size()).all(|i| self.at(i) == x.at(i))
    }

    fn vec_ne<W>(&self, x: &W) -> bool
    where
        W: DenseVector,
        Self::Value: PartialEq<W::Value>,
    {
        !self.vec_eq(x)
    }

    //===== dot products

    /// Indefinite dot product x^T y (no conjugation), PETSc's VecTDot.
    fn tdot<W>(&self, x: &W) -> PromotedField<Self, W>
    where
        W: DenseVector,
        Self::Value: FieldTraits + Clone,
        W::Value: FieldTraits + Clone,
        FieldOf<Self::Value>: Promote<FieldOf<W::Value>>,
        PromotedField<Self, W>: Num + PromoteFrom<Self::Value> + PromoteFrom<W::Value>,
    {
        assert_bounds!(x.size() == self.size());
        let mut result = <PromotedField<Self, W> as Zero>::zero();
        for i in 0..self.size() {
            let a = <PromotedField<Self, W> as PromoteFrom<Self::Value>>::promote_from(self.at(i).clone());
            let b = <PromotedField<Self, W> as PromoteFrom<W::Value>>::promote_from(x.at(i).clone());
            result = result + a * b;
        }
        result
    }

    /// Hermitian dot product x^H y (conjugates `self`), PETSc's VecDot.
    fn dot<W>(&self, x: &W) -> PromotedField<Self, W>
    where
        W: DenseVector,
        Self::Value: Scalar,
        W::Value: FieldTraits + Clone,
        FieldOf<Self::Value>: Promote<FieldOf<W::Value>>,
        PromotedField<Self, W>: Num + PromoteFrom<Self::Value> + PromoteFrom<W::Value>,
    {
        assert_bounds!(x.size() == self.size());
        let mut result = <PromotedField<Self, W> as Zero>::zero();
        for i in 0..self.size() {
            let a = <PromotedField<Self, W> as PromoteFrom<Self::Value>>::promote_from(self.at(i).conjugate());
            let b = <PromotedField<Self, W> as PromoteFrom<W::Value>>::promote_from(x.at(i).clone());
            result = result + a * b;
        }
        result
    }

    //===== norms

    /// One norm: sum of the moduli.
    fn one_norm(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        self.iter()
            .fold(<RealOf<Self::Value> as Zero>::zero(), |acc, x| acc + x.abs())
    }

    /// Simplified one norm, Manhattan magnitude for complex components.
    fn one_norm_real(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        self.iter()
            .fold(<RealOf<Self::Value> as Zero>::zero(), |acc, x| acc + x.abs_real())
    }

    /// Two norm: square root of the sum of squared moduli.
    fn two_norm(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        self.two_norm2().sqrt_real()
    }

    /// Square of the two norm, for block recursion.
    fn two_norm2(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        self.iter()
            .fold(<RealOf<Self::Value> as Zero>::zero(), |acc, x| acc + x.abs2())
    }

    /// Infinity norm: largest modulus. NaN if any component is NaN.
    fn infinity_norm(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        max_magnitude(self, <Self::Value as Scalar>::abs)
    }

    /// Simplified infinity norm, Manhattan magnitude for complex components.
    fn infinity_norm_real(&self) -> RealOf<Self::Value>
    where
        Self::Value: Scalar,
    {
        max_magnitude(self, <Self::Value as Scalar>::abs_real)
    }

    //===== cursors

    fn begin(&self) -> ConstIter<'_, Self> {
        DenseIterator::new(self, 0)
    }

    fn end(&self) -> ConstIter<'_, Self> {
        DenseIterator::new(self, self.size() as isize)
    }

    /// Cursor at the last component.
    fn before_end(&self) -> ConstIter<'_, Self> {
        DenseIterator::new(self, self.size() as isize - 1)
    }

    /// Cursor one before the first component.
    fn before_begin(&self) -> ConstIter<'_, Self> {
        DenseIterator::new(self, -1)
    }

    /// Cursor at component `i`, or `end()` if `i >= size()`.
    fn find(&self, i: usize) -> ConstIter<'_, Self> {
        DenseIterator::new(self, i.min(self.size()) as isize)
    }

    fn iter(&self) -> ConstIter<'_, Self> {
        self.begin()
    }

    fn begin_mut(&mut self) -> MutIter<'_, Self> {
        DenseIterator::new(self, 0)
    }

    fn end_mut(&mut self) -> MutIter<'_, Self> {
        let n = self.size() as isize;
        DenseIterator::new(self, n)
    }

    fn before_end_mut(&mut self) -> MutIter<'_, Self> {
        let last = self.size() as isize - 1;
        DenseIterator::new(self, last)
    }

    fn before_begin_mut(&mut self) -> MutIter<'_, Self> {
        DenseIterator::new(self, -1)
    }

    fn find_mut(&mut self, i: usize) -> MutIter<'_, Self> {
        let pos = i.min(self.size()) as isize;
        DenseIterator::new(self, pos)
    }

    //===== output

    /// Write the components space-separated in index order.
    fn write_components(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self::Value: fmt::Display,
    {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        Ok(())
    }
}

/// Running maximum of `magnitude` over the components.
///
/// Plain `max` skips NaN, so a NaN magnitude is kept aside and returned instead of the
/// maximum. An infinite component still yields an infinite norm.
fn max_magnitude<V, F>(v: &V, magnitude: F) -> RealOf<V::Value>
where
    V: DenseVector,
    V::Value: Scalar,
    F: Fn(&V::Value) -> RealOf<V::Value>,
{
    let mut norm = <RealOf<V::Value> as Zero>::zero();
    let mut nan_taint: Option<RealOf<V::Value>> = None;
    for x in v.iter() {
        let a = magnitude(x);
        if <RealOf<V::Value> as RealScalar>::HAS_NAN && a.is_nan_value() {
            if nan_taint.is_none() {
                nan_taint = Some(a);
            }
            continue;
        }
        if a > norm {
            norm = a;
        }
    }
    nan_taint.unwrap_or(norm)
}

/// Operator surface shared by every concrete storage: indexing, vector-vector arithmetic,
/// negation, the indefinite dot product as `*`, equality, display and iteration.
///
/// Scalar broadcast operators live in [`impl_scalar_ops`], one impl per scalar type, because a
/// generic scalar parameter would overlap with the generic vector operand.
macro_rules! impl_dense_ops {
    ([$($gen:tt)*] $ty:ty, $k:ty) => {
        impl<$($gen)*> ::std::ops::Index<usize> for $ty {
            type Output = $k;

            #[inline]
            fn index(&self, i: usize) -> &$k {
                $crate::vector::dense::DenseVector::at(self, i)
            }
        }

        impl<$($gen)*> ::std::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut $k {
                $crate::vector::dense::DenseVector::at_mut(self, i)
            }
        }

        impl<$($gen)*, W> ::std::ops::AddAssign<&W> for $ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::AddAssign<&'x W::Value>,
        {
            fn add_assign(&mut self, x: &W) {
                $crate::vector::dense::DenseVector::add_assign_vec(self, x);
            }
        }

        impl<$($gen)*, W> ::std::ops::SubAssign<&W> for $ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::SubAssign<&'x W::Value>,
        {
            fn sub_assign(&mut self, x: &W) {
                $crate::vector::dense::DenseVector::sub_assign_vec(self, x);
            }
        }

        impl<$($gen)*, W> ::std::ops::Add<&W> for $ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::AddAssign<&'x W::Value>,
        {
            type Output = $ty;

            fn add(mut self, x: &W) -> $ty {
                $crate::vector::dense::DenseVector::add_assign_vec(&mut self, x);
                self
            }
        }

        impl<$($gen)*, W> ::std::ops::Add<&W> for &$ty
        where
            $ty: Clone,
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::AddAssign<&'x W::Value>,
        {
            type Output = $ty;

            fn add(self, x: &W) -> $ty {
                $crate::vector::dense::DenseVector::added(self, x)
            }
        }

        impl<$($gen)*, W> ::std::ops::Sub<&W> for $ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::SubAssign<&'x W::Value>,
        {
            type Output = $ty;

            fn sub(mut self, x: &W) -> $ty {
                $crate::vector::dense::DenseVector::sub_assign_vec(&mut self, x);
                self
            }
        }

        impl<$($gen)*, W> ::std::ops::Sub<&W> for &$ty
        where
            $ty: Clone,
            W: $crate::vector::dense::DenseVector,
            $k: for<'x> ::std::ops::SubAssign<&'x W::Value>,
        {
            type Output = $ty;

            fn sub(self, x: &W) -> $ty {
                $crate::vector::dense::DenseVector::subtracted(self, x)
            }
        }

        impl<$($gen)*> ::std::ops::Neg for &$ty
        where
            $ty: Clone,
            $k: Clone + ::std::ops::Neg<Output = $k>,
        {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::vector::dense::DenseVector::negated(self)
            }
        }

        impl<$($gen)*> ::std::ops::Neg for $ty
        where
            $ty: Clone,
            $k: Clone + ::std::ops::Neg<Output = $k>,
        {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::vector::dense::DenseVector::negated(&self)
            }
        }

        impl<$($gen)*, W> ::std::ops::Mul<&W> for &$ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: $crate::core::traits::FieldTraits + Clone,
            W::Value: $crate::core::traits::FieldTraits + Clone,
            $crate::core::traits::FieldOf<$k>:
                $crate::core::promotion::Promote<$crate::core::traits::FieldOf<W::Value>>,
            $crate::core::promotion::Promoted<
                $crate::core::traits::FieldOf<$k>,
                $crate::core::traits::FieldOf<W::Value>,
            >: ::num_traits::Num
                + $crate::core::promotion::PromoteFrom<$k>
                + $crate::core::promotion::PromoteFrom<W::Value>,
        {
            type Output = $crate::core::promotion::Promoted<
                $crate::core::traits::FieldOf<$k>,
                $crate::core::traits::FieldOf<W::Value>,
            >;

            fn mul(self, x: &W) -> Self::Output {
                $crate::vector::dense::DenseVector::tdot(self, x)
            }
        }

        impl<$($gen)*, W> PartialEq<W> for $ty
        where
            W: $crate::vector::dense::DenseVector,
            $k: PartialEq<W::Value>,
        {
            fn eq(&self, x: &W) -> bool {
                $crate::vector::dense::DenseVector::vec_eq(self, x)
            }
        }

        impl<$($gen)*> ::std::fmt::Display for $ty
        where
            $k: ::std::fmt::Display,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::vector::dense::DenseVector::write_components(self, f)
            }
        }

        impl<'it, $($gen)*> IntoIterator for &'it $ty {
            type Item = &'it $k;
            type IntoIter = $crate::vector::iter::ConstIter<'it, $ty>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::vector::dense::DenseVector::begin(self)
            }
        }
    };
}

/// Scalar broadcast operators `+= -= *= /=` for one concrete scalar type.
macro_rules! impl_scalar_ops {
    ([$($gen:tt)*] $ty:ty => $k:ty) => {
        impl<$($gen)*> ::std::ops::AddAssign<$k> for $ty {
            fn add_assign(&mut self, k: $k) {
                $crate::vector::dense::DenseVector::add_scalar(self, k);
            }
        }

        impl<$($gen)*> ::std::ops::SubAssign<$k> for $ty {
            fn sub_assign(&mut self, k: $k) {
                $crate::vector::dense::DenseVector::sub_scalar(self, k);
            }
        }

        impl<$($gen)*> ::std::ops::MulAssign<$k> for $ty {
            fn mul_assign(&mut self, k: $k) {
                $crate::vector::dense::DenseVector::scale(self, k);
            }
        }

        impl<$($gen)*> ::std::ops::DivAssign<$k> for $ty {
            fn div_assign(&mut self, k: $k) {
                $crate::vector::dense::DenseVector::div_scalar(self, k);
            }
        }
    };
}

pub(crate) use impl_dense_ops;
pub(crate) use impl_scalar_ops;
