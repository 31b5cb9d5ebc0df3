//! Set keys that hash and compare through an [`Equivalence`] strategy.
//!
//! [`Keyed`] is what a [`UniqueSet`](super::UniqueSet) stores; [`Probe`] is a
//! borrowed lookup key so a set can be searched with `&U` without building an
//! owned `T`. Both hash `U` through the same strategy, so their hashes agree.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use indexmap::Equivalent;

use super::traits::Equivalence;

/// A stored value `T`, hashed and compared as `U` under strategy `Q`.
pub(crate) struct Keyed<T, U: ?Sized, Q> {
    value: T,
    _strategy: PhantomData<fn(&U) -> Q>,
}

impl<T, U: ?Sized, Q> Keyed<T, U, Q> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            _strategy: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T {
        self.value
    }
}

impl<T, U, Q> Hash for Keyed<T, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        Q::hash(self.value.borrow(), state);
    }
}

impl<T, U, Q> PartialEq for Keyed<T, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
    fn eq(&self, other: &Self) -> bool {
        Q::equivalent(self.value.borrow(), other.value.borrow())
    }
}

impl<T, U, Q> Eq for Keyed<T, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
}

impl<T: Clone, U: ?Sized, Q> Clone for Keyed<T, U, Q> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: fmt::Debug, U: ?Sized, Q> fmt::Debug for Keyed<T, U, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Borrowed lookup key for a set of `Keyed<T, U, Q>`.
///
/// Deliberately not `Eq`: it only compares against stored keys.
pub(crate) struct Probe<'a, U: ?Sized, Q> {
    value: &'a U,
    _strategy: PhantomData<fn() -> Q>,
}

impl<'a, U: ?Sized, Q> Probe<'a, U, Q> {
    #[inline]
    pub(crate) fn new(value: &'a U) -> Self {
        Self {
            value,
            _strategy: PhantomData,
        }
    }
}

impl<U, Q> Hash for Probe<'_, U, Q>
where
    U: ?Sized,
    Q: Equivalence<U>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        Q::hash(self.value, state);
    }
}

impl<T, U, Q> Equivalent<Keyed<T, U, Q>> for Probe<'_, U, Q>
where
    T: Borrow<U>,
    U: ?Sized,
    Q: Equivalence<U>,
{
    fn equivalent(&self, key: &Keyed<T, U, Q>) -> bool {
        Q::equivalent(self.value, key.value.borrow())
    }
}
