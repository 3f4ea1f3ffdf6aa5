//! Query entry point over a built flight network.
//!
//! The free functions in the sibling modules take the graph or index
//! directly. `Planner` wraps a [`FlightNetwork`] and a [`SearchConfig`] so
//! callers get airport validation and configured limits in one place.

use crate::domain::{AirportCode, DomainError, Route};
use crate::network::FlightNetwork;

use super::config::SearchConfig;
use super::itinerary::plan_within;
use super::shortest::{
    CheapestFares, FastestTimes, shortest_path_by_duration, shortest_path_by_price,
};
use super::traversal::{TraversalPath, bounded_breadth_first_path, bounded_depth_first_path};

/// Error from a search request.
///
/// Unreachable airports and unserved legs are not errors; they show up as
/// empty results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Airport code not present in the network
    #[error("unknown airport {0}")]
    UnknownAirport(AirportCode),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// A route could not be assembled from the index
    #[error("invalid route: {0}")]
    Route(#[from] DomainError),
}

/// Request for a multi-city round trip.
#[derive(Debug, Clone)]
pub struct ItineraryRequest {
    /// Where the trip starts and ends.
    pub home: AirportCode,

    /// Cities to visit, in no particular order.
    pub destinations: Vec<AirportCode>,
}

impl ItineraryRequest {
    /// Create a new itinerary request.
    pub fn new(home: AirportCode, destinations: Vec<AirportCode>) -> Self {
        Self { home, destinations }
    }

    /// Check every airport is known to the network.
    pub fn validate(&self, network: &FlightNetwork) -> Result<(), SearchError> {
        let graph = network.graph();
        std::iter::once(&self.home)
            .chain(&self.destinations)
            .find(|code| !graph.contains(code))
            .map_or(Ok(()), |code| Err(SearchError::UnknownAirport(*code)))
    }
}

/// Flight search over one network snapshot.
pub struct Planner<'a> {
    network: &'a FlightNetwork,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a FlightNetwork, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Cheapest fare from `source` to every airport.
    pub fn cheapest_fares(&self, source: &AirportCode) -> Result<CheapestFares<'a>, SearchError> {
        shortest_path_by_price(self.network.graph(), source)
    }

    /// Shortest flying time from `source` to every airport.
    pub fn fastest_times(&self, source: &AirportCode) -> Result<FastestTimes<'a>, SearchError> {
        shortest_path_by_duration(self.network.graph(), source)
    }

    /// Any route from `from` to `to` within the configured leg limit.
    pub fn find_route(
        &self,
        from: &AirportCode,
        to: &AirportCode,
    ) -> Result<Option<TraversalPath>, SearchError> {
        bounded_depth_first_path(self.network.graph(), from, to, self.config.max_legs)
    }

    /// The route from `from` to `to` with the fewest legs.
    pub fn fewest_legs(
        &self,
        from: &AirportCode,
        to: &AirportCode,
    ) -> Result<Option<TraversalPath>, SearchError> {
        bounded_breadth_first_path(self.network.graph(), from, to)
    }

    /// Ranked round trips for a multi-city request.
    pub fn plan(&self, request: &ItineraryRequest) -> Result<Vec<Route>, SearchError> {
        request.validate(self.network)?;
        plan_within(
            self.network.index(),
            &request.home,
            &request.destinations,
            self.config.destination_limit(),
        )
    }
}
