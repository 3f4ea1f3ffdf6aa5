//! Directed, weighted flight graph.
//!
//! Vertices are airports; edges are individual scheduled flights. The graph
//! is assembled once through `add_vertex`/`add_edge` and only read after
//! that, so every search borrows it immutably.

use std::collections::HashMap;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Airport, AirportCode, Flight, FlightEdge};

/// Error from building a graph.
///
/// These only occur when the loader hands over inconsistent data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An airport with this code was already added
    #[error("duplicate airport {0}")]
    DuplicateAirport(AirportCode),

    /// A flight references an airport that isn't in the graph
    #[error("flight {flight_number} references unknown airport {code}")]
    UnknownAirport {
        code: AirportCode,
        flight_number: String,
    },

    /// A flight has a negative duration
    #[error("flight {0} has a negative duration")]
    NegativeDuration(String),

    /// A flight is longer than `FlightEdge::MAX_DURATION`
    #[error("flight {0} is longer than the maximum flight duration")]
    DurationTooLong(String),
}

/// An airport and the flights departing from it.
#[derive(Debug, Clone)]
pub struct Vertex {
    airport: Airport,
    outgoing: Vec<FlightEdge>,
}

impl Vertex {
    fn new(airport: Airport) -> Self {
        Self {
            airport,
            outgoing: Vec::new(),
        }
    }

    /// The airport this vertex represents.
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// The airport code.
    pub fn code(&self) -> AirportCode {
        self.airport.code
    }

    /// Departing flights, in insertion order.
    pub fn outgoing(&self) -> &[FlightEdge] {
        &self.outgoing
    }
}

/// The flight network.
///
/// Edges are directed: a flight A→B says nothing about B→A. Parallel edges
/// between the same pair are kept as separate flights.
///
/// # Examples
///
/// ```
/// use flight_search::domain::{Airport, AirportCode};
/// use flight_search::network::Graph;
/// use chrono::Duration;
///
/// let yyz = AirportCode::parse("YYZ").unwrap();
/// let jfk = AirportCode::parse("JFK").unwrap();
///
/// let mut graph = Graph::new();
/// graph.add_vertex(Airport::new(yyz, "Toronto Pearson", 43.67, -79.63)).unwrap();
/// graph.add_vertex(Airport::new(jfk, "John F Kennedy", 40.64, -73.78)).unwrap();
/// graph.add_edge(yyz, jfk, 150, Duration::minutes(84), "AC 1002").unwrap();
///
/// assert_eq!(graph.vertex(&yyz).unwrap().outgoing().len(), 1);
/// assert!(graph.vertex(&jfk).unwrap().outgoing().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertices in insertion order.
    vertices: Vec<Vertex>,

    /// Map from airport code -> position in `vertices`.
    positions: HashMap<AirportCode, usize>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport with no flights yet.
    pub fn add_vertex(&mut self, airport: Airport) -> Result<(), GraphError> {
        let code = airport.code;
        if self.positions.contains_key(&code) {
            return Err(GraphError::DuplicateAirport(code));
        }

        self.positions.insert(code, self.vertices.len());
        self.vertices.push(Vertex::new(airport));
        Ok(())
    }

    /// Append a flight to the origin airport's departures.
    ///
    /// Both airports must already be vertices. No reverse edge is created.
    pub fn add_edge(
        &mut self,
        origin: AirportCode,
        destination: AirportCode,
        price: u32,
        duration: Duration,
        flight_number: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.insert_edge(FlightEdge::new(
            origin,
            destination,
            price,
            duration,
            flight_number,
        ))
    }

    /// Append an already-built edge to its origin's departures.
    pub fn insert_edge(&mut self, edge: FlightEdge) -> Result<(), GraphError> {
        if edge.duration < Duration::zero() {
            return Err(GraphError::NegativeDuration(edge.flight_number));
        }
        if edge.duration > FlightEdge::MAX_DURATION {
            return Err(GraphError::DurationTooLong(edge.flight_number));
        }
        if !self.positions.contains_key(&edge.destination) {
            return Err(GraphError::UnknownAirport {
                code: edge.destination,
                flight_number: edge.flight_number,
            });
        }
        let origin = match self.positions.get(&edge.origin) {
            Some(&idx) => idx,
            None => {
                return Err(GraphError::UnknownAirport {
                    code: edge.origin,
                    flight_number: edge.flight_number,
                });
            }
        };

        trace!(
            origin = %edge.origin,
            destination = %edge.destination,
            flight = %edge.flight_number,
            "adding flight"
        );
        self.vertices[origin].outgoing.push(edge);
        Ok(())
    }

    /// Look up a vertex by airport code.
    pub fn vertex(&self, code: &AirportCode) -> Option<&Vertex> {
        self.positions.get(code).map(|&idx| &self.vertices[idx])
    }

    /// Check whether an airport is in the graph.
    pub fn contains(&self, code: &AirportCode) -> bool {
        self.positions.contains_key(code)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All airports in insertion order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.vertices.iter().map(|v| &v.airport)
    }

    /// Position of a vertex in `vertices()`.
    pub(crate) fn position(&self, code: &AirportCode) -> Option<usize> {
        self.positions.get(code).copied()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if there are no airports.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of flights across all airports.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.outgoing.len()).sum()
    }
}

/// Build a graph from loaded airports and flights.
///
/// Airports are added first, then each flight becomes an edge. The first
/// duplicate airport or dangling flight aborts the build.
pub fn build_graph(airports: &[Airport], flights: &[Flight]) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();

    for airport in airports {
        graph.add_vertex(airport.clone())?;
    }
    for flight in flights {
        graph.insert_edge(flight.to_edge())?;
    }

    debug!(
        airports = graph.len(),
        flights = graph.edge_count(),
        "built flight graph"
    );

    Ok(graph)
}
