//! Random-access cursor over a dense vector.
//!
//! A [`DenseIterator`] is a (container, position) pair. The same type serves both views of a
//! container: `DenseIterator<&V>` ([`ConstIter`]) reads, `DenseIterator<&mut V>` ([`MutIter`])
//! also writes. A mutable cursor converts into a constant one, never the reverse, and cursors of
//! either kind compare equal when they point at the same position of the same container.
//!
//! Positions are signed so that the sentinel one before the first element (`-1`) is
//! representable next to the one-past-the-end sentinel (`size()`). Moving a cursor is never
//! clamped; dereferencing a sentinel is a caller error.

use crate::vector::dense::DenseVector;
use std::ptr;

/// Access to the container behind a cursor, shared by `&V` and `&mut V`.
pub trait ContainerRef {
    type Target: DenseVector;

    fn target(&self) -> &Self::Target;
}

impl<V: DenseVector> ContainerRef for &V {
    type Target = V;

    #[inline]
    fn target(&self) -> &V {
        self
    }
}

impl<V: DenseVector> ContainerRef for &mut V {
    type Target = V;

    #[inline]
    fn target(&self) -> &V {
        self
    }
}

/// Cursor over the elements of a dense vector.
#[derive(Debug, Clone, Copy)]
pub struct DenseIterator<R> {
    container: R,
    position: isize,
}

/// Read-only cursor.
pub type ConstIter<'a, V> = DenseIterator<&'a V>;
/// Read-write cursor.
pub type MutIter<'a, V> = DenseIterator<&'a mut V>;

type ValueOf<R> = <<R as ContainerRef>::Target as DenseVector>::Value;

impl<R: ContainerRef> DenseIterator<R> {
    pub fn new(container: R, position: isize) -> Self {
        Self { container, position }
    }

    /// Current position; `-1` before the first element, `size()` at the end.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Current position as an index. Only meaningful on a dereferenceable cursor.
    #[inline]
    pub fn index(&self) -> usize {
        assert_bounds!(self.position >= 0, "index() on the before-begin sentinel");
        self.position as usize
    }

    /// The container this cursor walks.
    #[inline]
    pub fn container(&self) -> &R::Target {
        self.container.target()
    }

    #[inline]
    pub fn increment(&mut self) {
        self.position += 1;
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.position -= 1;
    }

    #[inline]
    pub fn advance(&mut self, n: isize) {
        self.position += n;
    }

    /// Whether the cursor points at an element rather than a sentinel.
    pub fn is_dereferenceable(&self) -> bool {
        self.position >= 0 && (self.position as usize) < self.container().size()
    }

    /// Element under the cursor.
    #[inline]
    pub fn get(&self) -> &ValueOf<R> {
        self.element_at(0)
    }

    /// Element `i` steps from the cursor; the cursor does not move.
    pub fn element_at(&self, i: isize) -> &ValueOf<R> {
        let pos = self.position + i;
        let size = self.container().size();
        assert_bounds!(
            pos >= 0 && (pos as usize) < size,
            "dereferencing position {} of a container of size {}",
            pos,
            size
        );
        self.container().at(pos as usize)
    }

    /// Whether both cursors walk the very same container.
    pub fn same_container<S>(&self, other: &DenseIterator<S>) -> bool
    where
        S: ContainerRef<Target = R::Target>,
    {
        ptr::eq(self.container(), other.container())
    }

    /// Signed number of steps from `self` to `other`. Both must walk the same container.
    pub fn distance_to<S>(&self, other: &DenseIterator<S>) -> isize
    where
        S: ContainerRef<Target = R::Target>,
    {
        assert_bounds!(
            self.same_container(other),
            "distance between cursors of different containers"
        );
        other.position - self.position
    }
}

impl<'a, V: DenseVector> DenseIterator<&'a mut V> {
    /// Mutable element under the cursor.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V::Value {
        self.element_at_mut(0)
    }

    /// Mutable element `i` steps from the cursor; the cursor does not move.
    pub fn element_at_mut(&mut self, i: isize) -> &mut V::Value {
        let pos = self.position + i;
        let size = self.container.size();
        assert_bounds!(
            pos >= 0 && (pos as usize) < size,
            "dereferencing position {} of a container of size {}",
            pos,
            size
        );
        self.container.at_mut(pos as usize)
    }

    /// Read-only cursor at the same position, borrowing this one.
    pub fn as_const(&self) -> ConstIter<'_, V> {
        DenseIterator {
            container: &*self.container,
            position: self.position,
        }
    }
}

impl<'a, V: DenseVector> From<MutIter<'a, V>> for ConstIter<'a, V> {
    fn from(it: MutIter<'a, V>) -> Self {
        DenseIterator {
            container: it.container,
            position: it.position,
        }
    }
}

impl<R, S> PartialEq<DenseIterator<S>> for DenseIterator<R>
where
    R: ContainerRef,
    S: ContainerRef<Target = R::Target>,
{
    fn eq(&self, other: &DenseIterator<S>) -> bool {
        self.position == other.position && self.same_container(other)
    }
}

impl<'a, V: DenseVector> Iterator for DenseIterator<&'a V> {
    type Item = &'a V::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let container: &'a V = self.container;
        if self.position < 0 || self.position as usize >= container.size() {
            return None;
        }
        let item = container.at(self.position as usize);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.position < 0 {
            0
        } else {
            self.container.size().saturating_sub(self.position as usize)
        };
        (remaining, Some(remaining))
    }
}

impl<'a, V: DenseVector> ExactSizeIterator for DenseIterator<&'a V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::DynamicVector;

    #[test]
    fn walks_in_index_order() {
        let v = DynamicVector::from(vec![10, 20, 30]);
        let seen: Vec<i32> = v.begin().copied().collect();
        assert_eq!(seen, vec![10, 20, 30]);
        assert_eq!(v.begin().len(), 3);
    }

    #[test]
    fn sentinels() {
        let v = DynamicVector::from(vec![1.0, 2.0]);
        let mut it = v.before_begin();
        assert_eq!(it.position(), -1);
        assert!(!it.is_dereferenceable());
        it.increment();
        assert_eq!(it, v.begin());

        let mut last = v.before_end();
        assert_eq!(*last.get(), 2.0);
        last.increment();
        assert_eq!(last, v.end());
        assert_eq!(v.before_begin().next(), None);
    }

    #[test]
    fn random_access() {
        let v = DynamicVector::from(vec![5, 6, 7, 8]);
        let mut it = v.begin();
        it.advance(2);
        assert_eq!(*it.get(), 7);
        assert_eq!(*it.element_at(1), 8);
        assert_eq!(*it.element_at(-2), 5);
        assert_eq!(it.position(), 2);
        assert_eq!(v.begin().distance_to(&it), 2);
        assert_eq!(it.distance_to(&v.begin()), -2);
        it.decrement();
        assert_eq!(it.index(), 1);
    }

    #[test]
    fn mutable_cursor_writes_and_downgrades() {
        let mut v = DynamicVector::from(vec![1, 2, 3]);
        {
            let mut it = v.begin_mut();
            *it.get_mut() = 10;
            *it.element_at_mut(2) = 30;
            it.increment();
            assert!(it == it.as_const());
            assert_eq!(it.as_const().distance_to(&it), 0);
            let read: ConstIter<'_, _> = it.into();
            assert_eq!(*read.get(), 2);
        }
        assert_eq!(v.as_slice(), &[10, 2, 30]);
    }

    #[test]
    fn different_containers_never_compare_equal() {
        let a = DynamicVector::from(vec![1, 2]);
        let mut b = DynamicVector::from(vec![1, 2]);
        assert!(a.begin() != b.begin());
        assert!(!a.begin().same_container(&b.begin_mut()));
        assert!(a.begin() != b.begin_mut());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different containers")]
    fn distance_across_containers_panics() {
        let a = DynamicVector::from(vec![1, 2]);
        let b = DynamicVector::from(vec![1, 2]);
        let _ = a.begin().distance_to(&b.end());
    }
}
