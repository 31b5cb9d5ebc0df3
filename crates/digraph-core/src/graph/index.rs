//! Two-level adjacency index: `from` vertex → `to` vertex → edge.
//!
//! The index never owns vertices or edges. It records positional handles into
//! the graph's [`UniqueSet`]s and is rebuilt from scratch whenever those sets
//! are replaced (clone, explicit rebuild). Moves and swaps carry it along
//! untouched since the positions move with the sets.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;

use crate::config::ShadowedEdgeLog;
use crate::error::{Error, Result};

use super::set::{EdgeSet, VertexSet};
use super::traits::{Endpoints, Equivalence};

/// Instance-local handle to a stored vertex.
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// Instance-local handle to a stored edge.
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl VertexId {
    /// Returns the raw position of this vertex in its graph's vertex set.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    /// Returns the raw position of this edge in its graph's edge set.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Targets reachable from one source vertex.
pub(crate) type Targets = FxHashMap<VertexId, EdgeId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AdjacencyIndex {
    forward: FxHashMap<VertexId, Targets>,
    /// Number of `(from, to)` entries across all sources.
    pairs: usize,
}

impl AdjacencyIndex {
    /// Builds the index for `edges`, resolving endpoints in `vertices`.
    ///
    /// Edges are indexed in set order. When two edges share an ordered
    /// `(from, to)` pair the later one wins the slot; the earlier one stays in
    /// the edge set but is no longer reachable through the index.
    pub(crate) fn build<E, A, EQ, VQ>(
        edges: &EdgeSet<E, EQ>,
        vertices: &VertexSet<A::Vertex, A::Value, VQ>,
        shadowed_log: ShadowedEdgeLog,
    ) -> Result<Self>
    where
        A: Endpoints<E>,
        VQ: Equivalence<A::Value>,
    {
        let mut index = Self {
            forward: FxHashMap::with_capacity_and_hasher(vertices.len(), Default::default()),
            pairs: 0,
        };
        let mut shadowed = 0usize;

        for (position, edge) in edges.iter().enumerate() {
            let (from, to) = A::endpoints(edge);
            let (Some(from), Some(to)) = (
                vertices.position_of(Borrow::<A::Value>::borrow(&from)),
                vertices.position_of(Borrow::<A::Value>::borrow(&to)),
            ) else {
                tracing::error!(
                    edge = position,
                    "edge endpoint missing from vertex set; vertex hash and equality disagree"
                );
                return Err(Error::DanglingEndpoint { edge: position });
            };

            if let Some(previous) = index.insert(VertexId(from), VertexId(to), EdgeId(position)) {
                shadowed += 1;
                match shadowed_log {
                    ShadowedEdgeLog::Silent => {}
                    ShadowedEdgeLog::Debug => tracing::debug!(
                        shadowed = previous.0,
                        by = position,
                        "edge shadowed in adjacency index by a parallel edge"
                    ),
                    ShadowedEdgeLog::Warn => tracing::warn!(
                        shadowed = previous.0,
                        by = position,
                        "edge shadowed in adjacency index by a parallel edge"
                    ),
                }
            }
        }

        tracing::debug!(
            edges = edges.len(),
            vertices = vertices.len(),
            pairs = index.pairs,
            shadowed,
            "adjacency index built"
        );
        Ok(index)
    }

    /// Records `edge` under `(from, to)`, returning the edge it replaced.
    pub(crate) fn insert(&mut self, from: VertexId, to: VertexId, edge: EdgeId) -> Option<EdgeId> {
        let previous = self.forward.entry(from).or_default().insert(to, edge);
        if previous.is_none() {
            self.pairs += 1;
        }
        previous
    }

    #[inline]
    pub(crate) fn get(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.forward.get(&from)?.get(&to).copied()
    }

    #[inline]
    pub(crate) fn targets(&self, from: VertexId) -> Option<&Targets> {
        self.forward.get(&from)
    }

    /// Number of distinct targets indexed for `from`.
    pub(crate) fn fan_out(&self, from: VertexId) -> usize {
        self.forward.get(&from).map_or(0, FxHashMap::len)
    }

    pub(crate) fn sources(&self) -> impl Iterator<Item = (VertexId, &Targets)> + '_ {
        self.forward.iter().map(|(&from, targets)| (from, targets))
    }

    pub(crate) fn source_count(&self) -> usize {
        self.forward.len()
    }

    /// Total number of indexed `(from, to)` pairs.
    pub(crate) fn len(&self) -> usize {
        self.pairs
    }
}
