//! # digraph-core
//!
//! Generic, immutable-topology directed graph container.
//!
//! Given a collection of edges, a [`Digraph`] derives the distinct vertex
//! set the edges reference, deduplicates both vertices and edges, and builds
//! an adjacency index answering "which edge connects A to B" and "which stored
//! vertex equals this value" in O(1) expected time.
//!
//! The caller chooses how endpoints are extracted from an edge, how edges and
//! vertices are hashed and compared, and whether vertices are stored by value
//! or as references to caller-owned data. See [`graph::Endpoints`] and
//! [`graph::Equivalence`].
//!
//! ## Quick Start
//!
//! ```rust
//! use digraph_core::Digraph;
//!
//! let g: Digraph<(&str, &str)> = Digraph::from([("A", "B"), ("B", "C"), ("C", "A"), ("B", "A")]);
//!
//! assert_eq!(g.vertex_count(), 3);
//! assert_eq!(g.find_edge(&"A", &"B"), Some(&("A", "B")));
//! assert!(g.find_vertex(&"D").is_none());
//!
//! // Structural equality is independent of storage order.
//! let h: Digraph<(&str, &str)> = Digraph::from([("B", "A"), ("C", "A"), ("B", "C"), ("A", "B")]);
//! assert_eq!(g, h);
//! ```
//!
//! ## Thread safety
//!
//! A graph has no interior mutability: once built it can be shared read-only
//! across threads whenever its edge and vertex types allow it. Vertices stored
//! by reference are tied to the lifetime of the data they borrow.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::similar_names))]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{CapacityConfig, GraphConfig, IndexConfig, ShadowedEdgeLog};
pub use error::{Error, Result};
pub use graph::{Digraph, EdgeId, VertexId};
