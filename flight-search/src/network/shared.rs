//! Shared, swappable flight network.
//!
//! The graph and the direct flight index are never mutated once built.
//! When schedule data changes, a complete new pair is built off to the side
//! and swapped in; queries already running keep the snapshot they started
//! with.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::domain::{Airport, Flight};

use super::graph::{Graph, GraphError, build_graph};
use super::index::DirectFlightIndex;

/// A built graph and its matching direct flight index.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    graph: Graph,
    index: DirectFlightIndex,
}

impl FlightNetwork {
    /// Build both structures from one set of loaded records.
    pub fn build(airports: &[Airport], flights: &[Flight]) -> Result<Self, GraphError> {
        let graph = build_graph(airports, flights)?;
        let index = DirectFlightIndex::from_flights(flights);
        Ok(Self { graph, index })
    }

    /// The flight graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The direct flight index.
    pub fn index(&self) -> &DirectFlightIndex {
        &self.index
    }
}

/// Thread-safe handle to the current flight network.
///
/// Cloning the handle is cheap and all clones see the same network.
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<Arc<FlightNetwork>>>,
}

impl SharedNetwork {
    /// Wrap an already-built network.
    pub fn new(network: FlightNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
        }
    }

    /// The network to run a query against.
    ///
    /// The returned snapshot stays valid even if the network is replaced
    /// while the query runs.
    pub fn snapshot(&self) -> Arc<FlightNetwork> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a freshly built network for subsequent queries.
    pub fn replace(&self, network: FlightNetwork) {
        info!(
            airports = network.graph.len(),
            flights = network.graph.edge_count(),
            "replacing flight network"
        );
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(network);
    }

    /// Rebuild from fresh records and swap the result in.
    ///
    /// On failure the current network is kept and the error is returned.
    pub fn refresh(&self, airports: &[Airport], flights: &[Flight]) -> Result<(), GraphError> {
        let network = FlightNetwork::build(airports, flights)?;
        self.replace(network);
        Ok(())
    }
}
