//! Graphs whose vertices borrow caller-owned data.
//!
//! Scenario: a flight network where airports live in a catalog owned by the
//! caller and the graph only stores `&Airport` references.

use std::hash::{Hash, Hasher};

use digraph_core::graph::{Endpoints, Equivalence};
use digraph_core::{Digraph, GraphConfig, ShadowedEdgeLog};

#[derive(Debug, PartialEq, Eq, Hash)]
struct Airport {
    code: &'static str,
    city: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct Flight<'a> {
    number: u32,
    origin: &'a Airport,
    destination: &'a Airport,
}

/// A flight is identified by its number alone.
struct ByNumber;

impl Equivalence<Flight<'_>> for ByNumber {
    fn hash<H: Hasher>(value: &Flight<'_>, state: &mut H) {
        value.number.hash(state);
    }

    fn equivalent(lhs: &Flight<'_>, rhs: &Flight<'_>) -> bool {
        lhs.number == rhs.number
    }
}

/// Airports are stored by reference into the catalog.
struct Route;

impl<'a> Endpoints<Flight<'a>> for Route {
    type Value = Airport;
    type Vertex = &'a Airport;

    fn endpoints(edge: &Flight<'a>) -> (&'a Airport, &'a Airport) {
        (edge.origin, edge.destination)
    }
}

/// Airports are matched on their code.
struct ByCode;

impl Equivalence<Airport> for ByCode {
    fn hash<H: Hasher>(value: &Airport, state: &mut H) {
        value.code.hash(state);
    }

    fn equivalent(lhs: &Airport, rhs: &Airport) -> bool {
        lhs.code == rhs.code
    }
}

type Network<'a> = Digraph<Flight<'a>, Route, ByNumber, ByCode>;

fn airport(code: &'static str, city: &'static str) -> Airport {
    Airport { code, city }
}

fn flight<'a>(number: u32, origin: &'a Airport, destination: &'a Airport) -> Flight<'a> {
    Flight {
        number,
        origin,
        destination,
    }
}

fn catalog() -> Vec<Airport> {
    vec![
        airport("CDG", "Paris"),
        airport("JFK", "New York"),
        airport("NRT", "Tokyo"),
    ]
}

/// Number of the flight indexed under `(from, to)`, if any.
fn flight_number(network: &Network<'_>, from: &Airport, to: &Airport) -> Option<u32> {
    network.find_edge(from, to).map(|f| f.number)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("digraph_core=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_vertices_point_into_caller_data() {
    init_tracing();
    let airports = catalog();
    let (cdg, jfk, nrt) = (&airports[0], &airports[1], &airports[2]);
    let flights = [
        flight(1, cdg, jfk),
        flight(2, jfk, nrt),
        flight(3, nrt, cdg),
        flight(1, jfk, cdg),
    ];

    let network: Network<'_> = flights.iter().copied().collect();

    assert_eq!(network.edge_count(), 3, "flight 1 is listed twice");
    assert_eq!(network.vertex_count(), 3);

    let paris = network.find_vertex(&airport("CDG", "?")).unwrap();
    assert!(std::ptr::eq(*paris, cdg));
    assert_eq!(paris.city, "Paris");

    assert_eq!(flight_number(&network, jfk, nrt), Some(2));
    // The duplicate flight 1 (JFK -> CDG) was dropped, so no edge back.
    assert!(network.find_edge(jfk, cdg).is_none());
}

#[test]
fn test_parallel_flights_shadow_in_index() {
    init_tracing();
    let airports = catalog();
    let (cdg, jfk) = (&airports[0], &airports[1]);
    let flights = [flight(10, cdg, jfk), flight(11, cdg, jfk)];

    let config = GraphConfig::default().with_shadowed_edges(ShadowedEdgeLog::Warn);
    let network = Network::try_with_config(flights, &config).unwrap();

    assert_eq!(network.edge_count(), 2);
    assert_eq!(network.indexed_pairs(), 1);
    assert_eq!(flight_number(&network, cdg, jfk), Some(11));
}

#[test]
fn test_copy_shares_the_same_referents() {
    let airports = catalog();
    let (cdg, jfk, nrt) = (&airports[0], &airports[1], &airports[2]);
    let flights = [flight(1, cdg, jfk), flight(2, jfk, nrt)];

    let network: Network<'_> = Digraph::from(flights);
    let copy = network.clone();

    assert!(copy == network);
    for airport in &airports {
        match (network.find_vertex(airport), copy.find_vertex(airport)) {
            (Some(a), Some(b)) => assert!(std::ptr::eq(*a, *b)),
            (None, None) => {}
            other => panic!("vertex sets diverged: {other:?}"),
        }
    }
}

#[test]
fn test_swap_between_networks() {
    let airports = catalog();
    let (cdg, jfk, nrt) = (&airports[0], &airports[1], &airports[2]);
    let mut outbound: Network<'_> = Digraph::from([flight(1, cdg, jfk)]);
    let mut inbound: Network<'_> = Digraph::from([flight(2, jfk, cdg), flight(3, nrt, cdg)]);

    outbound.swap(&mut inbound);

    assert_eq!(outbound.edge_count(), 2);
    assert_eq!(flight_number(&outbound, nrt, cdg), Some(3));
    assert_eq!(inbound.edge_count(), 1);
    assert_eq!(flight_number(&inbound, cdg, jfk), Some(1));
}
