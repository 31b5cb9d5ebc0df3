//! Fuzz target for digraph construction and lookups.
//!
//! Builds graphs from arbitrary edge lists, some with parallel edges under a
//! coarse endpoint accessor, and checks that:
//! - construction never fails with consistent strategies
//! - every stored edge is reachable from its own endpoints unless shadowed
//! - a clone is structurally equal to the original
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_digraph_build
//! ```

#![no_main]

use arbitrary::Arbitrary;
use digraph_core::graph::Endpoints;
use digraph_core::Digraph;
use libfuzzer_sys::fuzz_target;

/// Fuzzing input: labeled edges over a small vertex domain.
#[derive(Arbitrary, Debug)]
struct BuildInput {
    edges: Vec<(u8, u8, u16)>,
    probes: Vec<(u8, u8)>,
}

/// Ignores the label, so edges differing only by label become parallel.
struct Unlabeled;

impl Endpoints<(u8, u8, u16)> for Unlabeled {
    type Value = u8;
    type Vertex = u8;

    fn endpoints(edge: &(u8, u8, u16)) -> (u8, u8) {
        (edge.0, edge.1)
    }
}

fuzz_target!(|input: BuildInput| {
    // Limit edge count to keep iterations fast
    let edges: Vec<_> = input.edges.into_iter().take(4096).collect();

    let pairs: Digraph<(u8, u8)> = edges.iter().map(|&(a, b, _)| (a, b)).collect();
    for &(from, to) in pairs.edges() {
        assert_eq!(pairs.find_edge(&from, &to), Some(&(from, to)));
    }
    assert_eq!(pairs.indexed_pairs(), pairs.edge_count());

    let labeled = Digraph::<(u8, u8, u16), Unlabeled>::try_from_edges(edges)
        .expect("consistent strategies never dangle");
    assert!(labeled.indexed_pairs() <= labeled.edge_count());
    for edge in labeled.edges() {
        let found = labeled.find_edge(&edge.0, &edge.1).expect("pair is indexed");
        assert_eq!((found.0, found.1), (edge.0, edge.1));
    }

    for (from, to) in input.probes {
        let found = labeled.find_edge(&from, &to);
        assert_eq!(found.is_some(), labeled.contains_edge(&from, &to));
        if found.is_some() {
            assert!(labeled.contains_vertex(&from));
            assert!(labeled.contains_vertex(&to));
        }
    }

    assert!(labeled.clone() == labeled);
});
