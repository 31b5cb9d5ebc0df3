//! The [`Digraph`] container.

use std::fmt;

use crate::config::{GraphConfig, ShadowedEdgeLog};
use crate::error::Result;

use super::index::{AdjacencyIndex, EdgeId, VertexId};
use super::set::{EdgeSet, VertexSet};
use super::traits::{Endpoints, Equivalence, FromEdge, Natural};

/// An immutable-topology directed graph built from a collection of edges.
///
/// Construction deduplicates the edges, collects the distinct vertices they
/// reference and indexes every edge under its ordered `(from, to)` pair, so
/// both [`find_vertex`](Self::find_vertex) and [`find_edge`](Self::find_edge)
/// are O(1) expected.
///
/// Type parameters:
///
/// - `E`: the edge type.
/// - `A`: endpoint accessor ([`Endpoints`]), defaulting to the edge's own
///   [`Edge`](super::Edge) impl.
/// - `EQ`: edge hash/equality, defaulting to `E: Hash + Eq`.
/// - `VQ`: vertex hash/equality over `A::Value`, defaulting to its `Hash + Eq`.
///
/// There is no insertion API: build a new graph (e.g. from
/// [`into_edges`](Self::into_edges)) to change the topology.
///
/// # Example
///
/// ```rust
/// use digraph_core::Digraph;
///
/// let g: Digraph<(char, char)> = Digraph::from([('A', 'B'), ('B', 'C'), ('C', 'A'), ('B', 'A')]);
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 4);
/// assert_eq!(g.find_edge(&'A', &'B'), Some(&('A', 'B')));
/// assert!(g.find_edge(&'A', &'D').is_none());
/// assert!(g.find_vertex(&'D').is_none());
/// ```
pub struct Digraph<E, A = FromEdge, EQ = Natural, VQ = Natural>
where
    A: Endpoints<E>,
{
    edges: EdgeSet<E, EQ>,
    vertices: VertexSet<A::Vertex, A::Value, VQ>,
    index: AdjacencyIndex,
    shadowed_log: ShadowedEdgeLog,
}

impl<E, A, EQ, VQ> Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: EdgeSet::default(),
            vertices: VertexSet::default(),
            index: AdjacencyIndex::default(),
            shadowed_log: ShadowedEdgeLog::default(),
        }
    }

    /// Builds a graph from `edges` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::DanglingEndpoint` if the vertex hash and vertex
    /// equality are inconsistent with each other.
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::try_with_config(edges, &GraphConfig::default())
    }

    /// Builds a graph from `edges` using `config`.
    ///
    /// Duplicate edges collapse to the first occurrence; both endpoints of
    /// every retained edge are collected into the vertex set, then the
    /// adjacency index is built.
    ///
    /// # Errors
    ///
    /// Returns `Error::Capacity` if a capacity hint cannot be reserved, and
    /// `Error::DanglingEndpoint` if the vertex hash and vertex equality are
    /// inconsistent with each other.
    pub fn try_with_config<I>(edges: I, config: &GraphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut edge_set: EdgeSet<E, EQ> = EdgeSet::default();
        edge_set.try_reserve(config.capacity.edges)?;
        for edge in edges {
            edge_set.insert(edge);
        }

        let vertex_capacity = if config.capacity.vertices > 0 {
            config.capacity.vertices
        } else {
            edge_set.len()
        };
        let mut vertex_set: VertexSet<A::Vertex, A::Value, VQ> = VertexSet::default();
        vertex_set.try_reserve(vertex_capacity)?;
        for edge in edge_set.iter() {
            let (from, to) = A::endpoints(edge);
            vertex_set.insert(from);
            vertex_set.insert(to);
        }

        let shadowed_log = config.index.shadowed_edges;
        let index = AdjacencyIndex::build::<E, A, EQ, VQ>(&edge_set, &vertex_set, shadowed_log)?;
        Ok(Self {
            edges: edge_set,
            vertices: vertex_set,
            index,
            shadowed_log,
        })
    }

    /// Builds a graph from `edges` with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the vertex hash and vertex equality are inconsistent with
    /// each other. Use [`try_from_edges`](Self::try_from_edges) to get an
    /// error instead.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        match Self::try_from_edges(edges) {
            Ok(graph) => graph,
            Err(err) => panic!("cannot build digraph: {err}"),
        }
    }

    /// Rebuilds the adjacency index from the current edge and vertex sets.
    ///
    /// The result is identical to the index built at construction.
    pub fn rebuild_index(&mut self) -> Result<()> {
        self.index =
            AdjacencyIndex::build::<E, A, EQ, VQ>(&self.edges, &self.vertices, self.shadowed_log)?;
        Ok(())
    }

    /// Returns the stored vertex equal to `value`.
    #[must_use]
    pub fn find_vertex(&self, value: &A::Value) -> Option<&A::Vertex> {
        self.vertices.find(value)
    }

    /// Returns the edge indexed under `(from, to)`.
    ///
    /// `None` when either vertex is absent or no edge connects them in that
    /// direction. If several distinct edges share the pair, the one indexed
    /// last is returned.
    #[must_use]
    pub fn find_edge(&self, from: &A::Value, to: &A::Value) -> Option<&E> {
        let id = self.edge_id(from, to)?;
        self.edges.get_index(id.0)
    }

    /// Returns the handle of the stored vertex equal to `value`.
    #[must_use]
    pub fn vertex_id(&self, value: &A::Value) -> Option<VertexId> {
        self.vertices.position_of(value).map(VertexId)
    }

    /// Returns the handle of the edge indexed under `(from, to)`.
    #[must_use]
    pub fn edge_id(&self, from: &A::Value, to: &A::Value) -> Option<EdgeId> {
        let from = self.vertex_id(from)?;
        let to = self.vertex_id(to)?;
        self.index.get(from, to)
    }

    /// Returns true if a vertex equal to `value` is stored.
    #[must_use]
    pub fn contains_vertex(&self, value: &A::Value) -> bool {
        self.vertices.contains(value)
    }

    /// Returns true if an edge connects `from` to `to`.
    #[must_use]
    pub fn contains_edge(&self, from: &A::Value, to: &A::Value) -> bool {
        self.edge_id(from, to).is_some()
    }

    /// Iterates over the indexed successors of `from` as `(to, edge)` pairs.
    ///
    /// Empty when `from` is absent or has no outgoing edges.
    pub fn successors<'g>(
        &'g self,
        from: &A::Value,
    ) -> impl Iterator<Item = (&'g A::Vertex, &'g E)> + 'g {
        self.vertex_id(from)
            .and_then(|id| self.index.targets(id))
            .into_iter()
            .flat_map(|targets| targets.iter())
            .filter_map(move |(to, edge)| Some((self.vertex(*to)?, self.edge(*edge)?)))
    }

    /// Returns the number of indexed successors of `from`.
    #[must_use]
    pub fn out_degree(&self, from: &A::Value) -> usize {
        self.vertex_id(from).map_or(0, |id| self.index.fan_out(id))
    }
}

impl<E, A, EQ, VQ> Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
{
    /// The deduplicated edge collection.
    #[must_use]
    pub fn edges(&self) -> &EdgeSet<E, EQ> {
        &self.edges
    }

    /// The deduplicated vertex collection.
    #[must_use]
    pub fn vertices(&self) -> &VertexSet<A::Vertex, A::Value, VQ> {
        &self.vertices
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no edges (and therefore no vertices).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of ordered vertex pairs reachable through the index.
    ///
    /// Smaller than [`edge_count`](Self::edge_count) exactly when some edges
    /// are shadowed by parallel edges.
    #[must_use]
    pub fn indexed_pairs(&self) -> usize {
        self.index.len()
    }

    /// Resolves a vertex handle produced by this graph.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&A::Vertex> {
        self.vertices.get_index(id.0)
    }

    /// Resolves an edge handle produced by this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get_index(id.0)
    }

    /// Exchanges the contents of two graphs, indexes included.
    ///
    /// Neither index is rebuilt.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Consumes the graph, returning its deduplicated edges.
    pub fn into_edges(self) -> impl Iterator<Item = E> {
        self.edges.into_values()
    }

    pub(crate) fn index(&self) -> &AdjacencyIndex {
        &self.index
    }
}

impl<E, A, EQ, VQ> Default for Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: both sets are cloned and the index is rebuilt against the copies.
impl<E, A, EQ, VQ> Clone for Digraph<E, A, EQ, VQ>
where
    E: Clone,
    A: Endpoints<E>,
    A::Vertex: Clone,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    fn clone(&self) -> Self {
        let edges = self.edges.clone();
        let vertices = self.vertices.clone();
        let shadowed_log = self.shadowed_log;
        let index = match AdjacencyIndex::build::<E, A, EQ, VQ>(&edges, &vertices, shadowed_log) {
            Ok(index) => index,
            Err(err) => panic!("cannot re-index cloned digraph: {err}"),
        };
        Self {
            edges,
            vertices,
            index,
            shadowed_log,
        }
    }
}

impl<E, A, EQ, VQ> FromIterator<E> for Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<E, A, EQ, VQ, const N: usize> From<[E; N]> for Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    fn from(edges: [E; N]) -> Self {
        Self::from_edges(edges)
    }
}

impl<E, A, EQ, VQ> fmt::Debug for Digraph<E, A, EQ, VQ>
where
    E: fmt::Debug,
    A: Endpoints<E>,
    A::Vertex: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digraph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .field("indexed_pairs", &self.index.len())
            .finish()
    }
}
