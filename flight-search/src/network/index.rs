//! Direct flight index for multi-city planning.
//!
//! The itinerary planner only ever asks one question: "which flights go
//! straight from X to Y?". Grouping every flight by its ordered airport pair
//! up front turns that into a single map lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{AirportCode, Flight, FlightEdge};

/// Index of direct flights, keyed by (origin, destination).
///
/// Derived data: rebuild it from the full flight set whenever the flights
/// change rather than patching it in place.
#[derive(Debug, Clone, Default)]
pub struct DirectFlightIndex {
    /// Map from (origin, destination) -> flights on that pair, in input order.
    routes: HashMap<(AirportCode, AirportCode), Vec<FlightEdge>>,
}

impl DirectFlightIndex {
    /// Build the index from loaded flights.
    pub fn from_flights(flights: &[Flight]) -> Self {
        Self::from_edges(flights.iter().map(Flight::to_edge))
    }

    /// Build the index from flight edges.
    pub fn from_edges(edges: impl IntoIterator<Item = FlightEdge>) -> Self {
        let mut routes: HashMap<(AirportCode, AirportCode), Vec<FlightEdge>> = HashMap::new();

        for edge in edges {
            routes
                .entry((edge.origin, edge.destination))
                .or_default()
                .push(edge);
        }

        let index = Self { routes };
        debug!(
            routes = index.route_count(),
            flights = index.flight_count(),
            "built direct flight index"
        );
        index
    }

    /// Get the direct flights from `origin` to `destination`.
    ///
    /// An empty slice means there is no direct service; it is not an error.
    pub fn lookup(&self, origin: &AirportCode, destination: &AirportCode) -> &[FlightEdge] {
        self.routes
            .get(&(*origin, *destination))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if at least one flight serves `origin` to `destination`.
    pub fn has_service(&self, origin: &AirportCode, destination: &AirportCode) -> bool {
        self.routes.contains_key(&(*origin, *destination))
    }

    /// The cheapest direct flight on a pair, if any.
    pub fn cheapest(&self, origin: &AirportCode, destination: &AirportCode) -> Option<&FlightEdge> {
        self.lookup(origin, destination)
            .iter()
            .min_by_key(|f| f.price)
    }

    /// Iterate over every served pair and its number of flights.
    pub fn routes(&self) -> impl Iterator<Item = (AirportCode, AirportCode, usize)> + '_ {
        self.routes
            .iter()
            .map(|(&(origin, destination), flights)| (origin, destination, flights.len()))
    }

    /// Number of distinct served pairs.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total number of indexed flights.
    pub fn flight_count(&self) -> usize {
        self.routes.values().map(|v| v.len()).sum()
    }

    /// Returns true if no flights are indexed.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Build the direct flight index from loaded flights.
pub fn build_index(flights: &[Flight]) -> DirectFlightIndex {
    DirectFlightIndex::from_flights(flights)
}
