//! Customization points of a [`Digraph`](super::Digraph).
//!
//! A graph is parameterized by three strategies, all resolved at compile time:
//!
//! - an **endpoint accessor** ([`Endpoints`]) extracting the ordered
//!   `(from, to)` vertex pair of an edge,
//! - an **edge equivalence** ([`Equivalence`] over the edge type),
//! - a **vertex equivalence** ([`Equivalence`] over the underlying vertex value).
//!
//! Defaults are [`FromEdge`] (the edge type's own [`Edge`] impl) and
//! [`Natural`] (the type's own `Hash + Eq`).
//!
//! # Value vs. reference vertices
//!
//! [`Endpoints::Vertex`] is what the graph stores, [`Endpoints::Value`] is what
//! gets hashed and compared. `Vertex = Value` stores an owned copy;
//! `Vertex = &'a Value` stores a non-owning reference to caller data, and the
//! borrow checker enforces that the data outlives the graph. Both go through
//! `Borrow<Value>`, so hashing and equality are identical either way.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Hash and equality strategy for values of type `T`.
///
/// Implementations must be consistent: `equivalent(a, b)` implies that `hash`
/// feeds the same data to the hasher for `a` and `b`. A strategy that breaks
/// this makes graph construction fail with
/// [`Error::DanglingEndpoint`](crate::Error::DanglingEndpoint).
pub trait Equivalence<T: ?Sized> {
    /// Feeds `value` into `state`.
    fn hash<H: Hasher>(value: &T, state: &mut H);

    /// Returns true if `lhs` and `rhs` are interchangeable.
    fn equivalent(lhs: &T, rhs: &T) -> bool;
}

/// Default strategy: the type's own `Hash` and `Eq` implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: ?Sized + Hash + Eq> Equivalence<T> for Natural {
    #[inline]
    fn hash<H: Hasher>(value: &T, state: &mut H) {
        value.hash(state);
    }

    #[inline]
    fn equivalent(lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

/// An edge type that knows its own endpoints.
///
/// This is the accessor used by default ([`FromEdge`]).
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::Edge;
///
/// struct Road {
///     from: String,
///     to: String,
///     km: u32,
/// }
///
/// impl Edge for Road {
///     type Value = String;
///     type Vertex = String;
///
///     fn endpoints(&self) -> (String, String) {
///         (self.from.clone(), self.to.clone())
///     }
/// }
/// ```
pub trait Edge {
    /// Underlying vertex value, used for hashing and equality.
    type Value: ?Sized;
    /// Stored vertex representation: `Value` itself or a reference to it.
    type Vertex: Borrow<Self::Value>;

    /// Returns the ordered `(from, to)` pair.
    fn endpoints(&self) -> (Self::Vertex, Self::Vertex);
}

/// A pair `(from, to)` is the simplest edge; vertices are stored by value.
impl<V: Clone> Edge for (V, V) {
    type Value = V;
    type Vertex = V;

    fn endpoints(&self) -> (V, V) {
        (self.0.clone(), self.1.clone())
    }
}

/// Endpoint accessor for edges of type `E`.
///
/// Implement this on a marker type to extract endpoints from an edge type you
/// do not control, or to store vertices by reference.
///
/// # Example
///
/// ```rust
/// use digraph_core::graph::Endpoints;
///
/// struct Flight<'a> {
///     origin: &'a str,
///     destination: &'a str,
/// }
///
/// /// Stores airports as `&str` borrowed from the caller.
/// struct Airports;
///
/// impl<'a> Endpoints<Flight<'a>> for Airports {
///     type Value = str;
///     type Vertex = &'a str;
///
///     fn endpoints(edge: &Flight<'a>) -> (&'a str, &'a str) {
///         (edge.origin, edge.destination)
///     }
/// }
/// ```
pub trait Endpoints<E: ?Sized> {
    /// Underlying vertex value, used for hashing and equality.
    type Value: ?Sized;
    /// Stored vertex representation: `Value` itself or a reference to it.
    type Vertex: Borrow<Self::Value>;

    /// Returns the ordered `(from, to)` pair of `edge`.
    fn endpoints(edge: &E) -> (Self::Vertex, Self::Vertex);
}

/// Default accessor: delegates to the edge type's [`Edge`] impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FromEdge;

impl<E: Edge> Endpoints<E> for FromEdge {
    type Value = E::Value;
    type Vertex = E::Vertex;

    #[inline]
    fn endpoints(edge: &E) -> (E::Vertex, E::Vertex) {
        edge.endpoints()
    }
}
