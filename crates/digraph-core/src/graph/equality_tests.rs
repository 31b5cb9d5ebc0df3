//! Tests for structural equality.

use std::hash::{Hash, Hasher};

use super::digraph::Digraph;
use super::equality::translate;
use super::traits::{Endpoints, Equivalence, FromEdge, Natural};

type Pairs = Digraph<(char, char)>;

fn sample() -> Pairs {
    Digraph::from([('A', 'B'), ('B', 'C'), ('C', 'A'), ('B', 'A')])
}

#[test]
fn test_equal_to_itself_and_copy() {
    let g = sample();
    assert!(g == g);
    assert!(g.clone() == g);
    assert!(!(g.clone() != g));
}

#[test]
fn test_insertion_order_does_not_matter() {
    let g = sample();
    let reversed: Pairs = Digraph::from([('B', 'A'), ('C', 'A'), ('B', 'C'), ('A', 'B')]);
    assert!(g == reversed);
    assert!(reversed == g);
}

#[test]
fn test_dropping_an_edge_breaks_equality() {
    let g = sample();
    let fewer: Pairs = Digraph::from([('A', 'B'), ('B', 'C'), ('C', 'A')]);
    assert!(g != fewer);
    assert!(fewer != g);
}

#[test]
fn test_reversed_edge_breaks_equality() {
    let g: Pairs = Digraph::from([('A', 'B'), ('B', 'C')]);
    let h: Pairs = Digraph::from([('A', 'B'), ('C', 'B')]);
    assert_eq!(g.vertex_count(), h.vertex_count());
    assert_eq!(g.edge_count(), h.edge_count());
    assert!(g != h);
}

#[test]
fn test_different_vertices_same_shape() {
    let g: Pairs = Digraph::from([('A', 'B')]);
    let h: Pairs = Digraph::from([('A', 'C')]);
    assert!(g != h);
}

#[test]
fn test_empty_graphs_are_equal() {
    assert!(Pairs::new() == Pairs::default());
    assert!(Pairs::new() != sample());
}

#[test]
fn test_translate_maps_by_value() {
    let g = sample();
    let h: Pairs = Digraph::from([('C', 'A'), ('A', 'B'), ('B', 'A'), ('B', 'C')]);

    for vertex in g.vertices() {
        let id = g.vertex_id(vertex).unwrap();
        let mapped = translate(id, &g, &h).unwrap();
        assert_eq!(h.vertex(mapped), Some(vertex));
    }

    let other: Pairs = Digraph::from([('X', 'Y')]);
    let a = g.vertex_id(&'A').unwrap();
    assert!(translate(a, &g, &other).is_none());
}

/// Edge equality on endpoints only, ignoring the label.
struct Unlabeled;

impl Equivalence<(char, char, &'static str)> for Unlabeled {
    fn hash<H: Hasher>(value: &(char, char, &'static str), state: &mut H) {
        (value.0, value.1).hash(state);
    }

    fn equivalent(lhs: &(char, char, &'static str), rhs: &(char, char, &'static str)) -> bool {
        (lhs.0, lhs.1) == (rhs.0, rhs.1)
    }
}

struct Labeled;

impl Endpoints<(char, char, &'static str)> for Labeled {
    type Value = char;
    type Vertex = char;

    fn endpoints(edge: &(char, char, &'static str)) -> (char, char) {
        (edge.0, edge.1)
    }
}

#[test]
fn test_custom_edge_equality_is_used() {
    let g: Digraph<_, Labeled, Unlabeled> = Digraph::from([('a', 'b', "x"), ('b', 'c', "y")]);
    let h: Digraph<_, Labeled, Unlabeled> = Digraph::from([('b', 'c', "other"), ('a', 'b', "z")]);
    assert!(g == h);

    let natural: Digraph<_, Labeled, Natural> = Digraph::from([('a', 'b', "x")]);
    let relabeled: Digraph<_, Labeled, Natural> = Digraph::from([('a', 'b', "z")]);
    assert!(natural != relabeled);
}

/// Vertices compare case-insensitively.
struct IgnoreCase;

impl Equivalence<char> for IgnoreCase {
    fn hash<H: Hasher>(value: &char, state: &mut H) {
        value.to_ascii_lowercase().hash(state);
    }

    fn equivalent(lhs: &char, rhs: &char) -> bool {
        lhs.eq_ignore_ascii_case(rhs)
    }
}

#[test]
fn test_custom_vertex_equality_is_used() {
    type Folded = Digraph<(char, char), FromEdge, Natural, IgnoreCase>;
    let g: Folded = Digraph::from([('a', 'B')]);

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.find_vertex(&'b'), Some(&'B'));
    assert_eq!(g.find_edge(&'A', &'b'), Some(&('a', 'B')));

    // The edge sets differ under natural tuple equality.
    let h: Folded = Digraph::from([('A', 'b')]);
    assert!(g != h);
}

#[test]
fn test_shadowed_pair_breaks_equality() {
    let g: Digraph<_, Labeled> = Digraph::from([('a', 'b', "1"), ('a', 'b', "2"), ('b', 'a', "3")]);
    let h: Digraph<_, Labeled> = Digraph::from([('a', 'b', "1"), ('a', 'b', "2"), ('b', 'a', "3")]);
    assert!(g == h);

    let shadowed_other_way: Digraph<_, Labeled> =
        Digraph::from([('a', 'b', "2"), ('a', 'b', "1"), ('b', 'a', "3")]);
    // Same edge set, but a different edge is reachable under (a, b).
    assert_eq!(g.edge_count(), shadowed_other_way.edge_count());
    assert!(g != shadowed_other_way);
}

#[test]
fn test_fan_out_mismatch() {
    // Same vertex, pair and source counts; only the wiring differs.
    let g: Pairs = Digraph::from([('a', 'b'), ('a', 'c'), ('b', 'c')]);
    let h: Pairs = Digraph::from([('a', 'b'), ('b', 'a'), ('b', 'c')]);
    assert_eq!(g.vertex_count(), h.vertex_count());
    assert_eq!(g.indexed_pairs(), h.indexed_pairs());
    assert!(g != h);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Flight<'a> {
    origin: &'a str,
    destination: &'a str,
}

fn flight<'a>(origin: &'a str, destination: &'a str) -> Flight<'a> {
    Flight {
        origin,
        destination,
    }
}

/// Stores airports as `&str` borrowed from the caller.
struct Borrowed;

impl<'a> Endpoints<Flight<'a>> for Borrowed {
    type Value = str;
    type Vertex = &'a str;

    fn endpoints(edge: &Flight<'a>) -> (&'a str, &'a str) {
        (edge.origin, edge.destination)
    }
}

/// Stores owned copies of the airport codes.
struct Owned;

impl<'a> Endpoints<Flight<'a>> for Owned {
    type Value = str;
    type Vertex = String;

    fn endpoints(edge: &Flight<'a>) -> (String, String) {
        (edge.origin.to_string(), edge.destination.to_string())
    }
}

#[test]
fn test_value_and_reference_vertices_are_equivalent() {
    let codes = ["CDG".to_string(), "JFK".to_string(), "NRT".to_string()];
    let flights = [
        flight(&codes[0], &codes[1]),
        flight(&codes[1], &codes[2]),
        flight(&codes[2], &codes[0]),
    ];

    let by_ref: Digraph<Flight<'_>, Borrowed> = flights.iter().cloned().collect();
    let by_value: Digraph<Flight<'_>, Owned> = flights.iter().cloned().collect();

    assert!(by_ref == by_value);
    assert!(by_value == by_ref);
    for from in &codes {
        let owned = by_value.find_vertex(from).map(String::as_str);
        assert_eq!(by_ref.find_vertex(from).copied(), owned);
        for to in &codes {
            assert_eq!(by_ref.find_edge(from, to), by_value.find_edge(from, to));
        }
    }
    assert!(by_ref.find_vertex("LHR").is_none());

    let fewer: Digraph<Flight<'_>, Owned> = flights[..2].iter().cloned().collect();
    assert!(by_ref != fewer);
}
