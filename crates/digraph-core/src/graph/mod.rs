//! Immutable-topology directed graph.
//!
//! A [`Digraph`] is built once from a collection of edges. Construction
//! deduplicates edges and vertices, then indexes every edge under its ordered
//! `(from, to)` vertex pair for O(1) expected lookup.
//!
//! # Example
//!
//! ```rust
//! use digraph_core::graph::{Digraph, Edge};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Link {
//!     from: String,
//!     to: String,
//! }
//!
//! impl Edge for Link {
//!     type Value = String;
//!     type Vertex = String;
//!
//!     fn endpoints(&self) -> (String, String) {
//!         (self.from.clone(), self.to.clone())
//!     }
//! }
//!
//! let link = |from: &str, to: &str| Link {
//!     from: from.into(),
//!     to: to.into(),
//! };
//! let g: Digraph<Link> = [link("A", "B"), link("B", "C"), link("A", "B")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.vertex_count(), 3);
//! assert_eq!(g.find_edge(&"B".to_string(), &"C".to_string()).map(|l| l.to.as_str()), Some("C"));
//! assert_eq!(g.clone(), g);
//! ```

mod digraph;
mod equality;
mod index;
mod keyed;
mod set;
mod traits;

#[cfg(test)]
mod equality_tests;

pub use digraph::Digraph;
pub use index::{EdgeId, VertexId};
pub use set::{EdgeSet, Iter, UniqueSet, VertexSet};
pub use traits::{Edge, Endpoints, Equivalence, FromEdge, Natural};
