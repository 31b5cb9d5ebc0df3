//! Deduplicating, insertion-indexed set backing the edge and vertex collections.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};

use super::keyed::{Keyed, Probe};
use super::traits::Equivalence;

/// A set of unique `T` values, compared as `U` under the strategy `Q`.
///
/// Each value keeps the position it was first inserted at. Positions are the
/// instance-local handles behind [`VertexId`](super::VertexId) and
/// [`EdgeId`](super::EdgeId); a graph never removes from its sets, so they
/// stay valid for the graph's lifetime.
///
/// Iteration order is an implementation detail and must not be relied upon.
pub struct UniqueSet<T, U: ?Sized, Q> {
    inner: IndexSet<Keyed<T, U, Q>, FxBuildHasher>,
}

/// The edge collection of a graph with edges `E` and edge strategy `Q`.
pub type EdgeSet<E, Q> = UniqueSet<E, E, Q>;

/// The vertex collection of a graph: stored vertices `V`, underlying value `U`.
pub type VertexSet<V, U, Q> = UniqueSet<V, U, Q>;

impl<T, U: ?Sized, Q> UniqueSet<T, U, Q> {
    /// Returns the number of unique values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the stored values.
    pub fn iter(&self) -> Iter<'_, T, U, Q> {
        self.into_iter()
    }

    #[inline]
    pub(crate) fn get_index(&self, position: usize) -> Option<&T> {
        self.inner.get_index(position).map(Keyed::get)
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = T> {
        self.inner.into_iter().map(Keyed::into_inner)
    }
}

impl<T, U, Q> UniqueSet<T, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
    /// Reserves room for at least `additional` more values.
    ///
    /// Fails instead of panicking or aborting when the request cannot be met.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.inner.try_reserve(additional).map_err(|err| {
            tracing::error!(requested = additional, error = %err, "cannot reserve set capacity");
            Error::Capacity {
                requested: additional,
            }
        })
    }

    /// Inserts `value` unless an equivalent one is already stored.
    ///
    /// Returns the position of the stored value and whether it was newly added.
    pub(crate) fn insert(&mut self, value: T) -> (usize, bool) {
        self.inner.insert_full(Keyed::new(value))
    }

    /// Returns the stored value equivalent to `value`, if any.
    #[must_use]
    pub fn find(&self, value: &U) -> Option<&T> {
        self.inner.get(&Probe::<U, Q>::new(value)).map(Keyed::get)
    }

    /// Returns true if a value equivalent to `value` is stored.
    #[must_use]
    pub fn contains(&self, value: &U) -> bool {
        self.inner.contains(&Probe::<U, Q>::new(value))
    }

    #[inline]
    pub(crate) fn position_of(&self, value: &U) -> Option<usize> {
        self.inner.get_index_of(&Probe::<U, Q>::new(value))
    }
}

impl<T, U, Q> Default for UniqueSet<T, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
    fn default() -> Self {
        Self {
            inner: IndexSet::with_hasher(FxBuildHasher),
        }
    }
}

impl<T: Clone, U: ?Sized, Q> Clone for UniqueSet<T, U, Q> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, U: ?Sized, Q> fmt::Debug for UniqueSet<T, U, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, U: ?Sized, Q> IntoIterator for &'a UniqueSet<T, U, Q> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, U, Q>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.inner.iter(),
        }
    }
}

/// Iterator over the values of a [`UniqueSet`].
pub struct Iter<'a, T, U: ?Sized, Q> {
    inner: indexmap::set::Iter<'a, Keyed<T, U, Q>>,
}

impl<'a, T, U: ?Sized, Q> Iterator for Iter<'a, T, U, Q> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(Keyed::get)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, U: ?Sized, Q> ExactSizeIterator for Iter<'_, T, U, Q> {}
