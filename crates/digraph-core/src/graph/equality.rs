//! Structural equality between two graphs.
//!
//! Handles are instance-local, so nothing here compares a [`VertexId`] or
//! [`EdgeId`] of one graph with one of another. Every cross-graph step goes
//! through [`translate`]: dereference the handle in its own graph, then look
//! the value up in the other graph.
//!
//! The two graphs may use different endpoint accessors as long as they agree
//! on the edge type, the underlying vertex value and both strategies. This is
//! what lets a graph storing vertices by value be compared with one storing
//! them by reference.

use std::borrow::Borrow;

use super::digraph::Digraph;
use super::index::{EdgeId, VertexId};
use super::traits::{Endpoints, Equivalence};

/// Maps a vertex handle of `source` to the handle of the equal vertex in `target`.
pub(crate) fn translate<E, A, B, EQ, VQ>(
    id: VertexId,
    source: &Digraph<E, A, EQ, VQ>,
    target: &Digraph<E, B, EQ, VQ>,
) -> Option<VertexId>
where
    A: Endpoints<E>,
    B: Endpoints<E, Value = A::Value>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    let vertex = source.vertex(id)?;
    target.vertex_id(Borrow::<A::Value>::borrow(vertex))
}

fn edges_equivalent<E, A, B, EQ, VQ>(
    lhs: &Digraph<E, A, EQ, VQ>,
    lhs_edge: EdgeId,
    rhs: &Digraph<E, B, EQ, VQ>,
    rhs_edge: EdgeId,
) -> bool
where
    A: Endpoints<E>,
    B: Endpoints<E>,
    EQ: Equivalence<E>,
{
    match (lhs.edge(lhs_edge), rhs.edge(rhs_edge)) {
        (Some(l), Some(r)) => EQ::equivalent(l, r),
        _ => false,
    }
}

/// Returns true if both graphs hold equal vertex and edge sets connected the
/// same way, regardless of storage order.
pub(crate) fn structurally_equal<E, A, B, EQ, VQ>(
    lhs: &Digraph<E, A, EQ, VQ>,
    rhs: &Digraph<E, B, EQ, VQ>,
) -> bool
where
    A: Endpoints<E>,
    B: Endpoints<E, Value = A::Value>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    if lhs.vertex_count() != rhs.vertex_count()
        || lhs.edge_count() != rhs.edge_count()
        || lhs.index().len() != rhs.index().len()
        || lhs.index().source_count() != rhs.index().source_count()
    {
        return false;
    }

    // Equal cardinality plus injection lhs -> rhs makes the sets equal.
    let vertices_match = lhs
        .vertices()
        .iter()
        .all(|v| rhs.contains_vertex(Borrow::<A::Value>::borrow(v)));
    if !vertices_match {
        return false;
    }
    if !lhs.edges().iter().all(|e| rhs.edges().contains(e)) {
        return false;
    }

    lhs.index().sources().all(|(from, targets)| {
        let Some(rhs_from) = translate(from, lhs, rhs) else {
            return false;
        };
        let Some(rhs_targets) = rhs.index().targets(rhs_from) else {
            return false;
        };
        if rhs_targets.len() != targets.len() {
            return false;
        }
        targets.iter().all(|(&to, &edge)| {
            translate(to, lhs, rhs)
                .and_then(|rhs_to| rhs_targets.get(&rhs_to))
                .is_some_and(|&rhs_edge| edges_equivalent(lhs, edge, rhs, rhs_edge))
        })
    })
}

impl<E, A, B, EQ, VQ> PartialEq<Digraph<E, B, EQ, VQ>> for Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    B: Endpoints<E, Value = A::Value>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
    fn eq(&self, other: &Digraph<E, B, EQ, VQ>) -> bool {
        structurally_equal(self, other)
    }
}

impl<E, A, EQ, VQ> Eq for Digraph<E, A, EQ, VQ>
where
    A: Endpoints<E>,
    EQ: Equivalence<E>,
    VQ: Equivalence<A::Value>,
{
}
