//! Single-source shortest paths over the flight graph.
//!
//! Classic Dijkstra with a binary heap. What "shortest" means is chosen by a
//! [`CostModel`]: the fare ([`ByPrice`]) or the time in the air
//! ([`ByDuration`]). Every flight is relaxed on its own, so when several
//! flights serve the same pair the cheapest (or quickest) one wins without
//! any merging.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Airport, AirportCode, FlightEdge};
use crate::network::Graph;

use super::search::SearchError;

/// Edge weight used by a shortest-path search.
///
/// Weights must be non-negative. `infinity` marks an unreached airport and
/// `add` saturates at it.
pub trait CostModel {
    /// Accumulated cost type.
    type Cost: Copy + Ord + fmt::Debug;

    /// Cost of standing still.
    fn zero() -> Self::Cost;

    /// Sentinel for "not reached".
    fn infinity() -> Self::Cost;

    /// Cost of taking one flight.
    fn weight(edge: &FlightEdge) -> Self::Cost;

    /// Sum of two costs, saturating at `infinity`.
    fn add(a: Self::Cost, b: Self::Cost) -> Self::Cost;
}

/// Cheapest fare.
#[derive(Debug, Clone, Copy)]
pub struct ByPrice;

impl CostModel for ByPrice {
    type Cost = u64;

    fn zero() -> u64 {
        0
    }

    fn infinity() -> u64 {
        u64::MAX
    }

    fn weight(edge: &FlightEdge) -> u64 {
        u64::from(edge.price)
    }

    fn add(a: u64, b: u64) -> u64 {
        a.saturating_add(b)
    }
}

/// Shortest total time in the air.
///
/// Unreached airports sit at [`Duration::MAX`]. Flights in a graph are at
/// most [`FlightEdge::MAX_DURATION`] long, so no simple path reaches it.
#[derive(Debug, Clone, Copy)]
pub struct ByDuration;

impl CostModel for ByDuration {
    type Cost = Duration;

    fn zero() -> Duration {
        Duration::zero()
    }

    fn infinity() -> Duration {
        Duration::MAX
    }

    fn weight(edge: &FlightEdge) -> Duration {
        edge.duration
    }

    fn add(a: Duration, b: Duration) -> Duration {
        a.checked_add(&b).unwrap_or_else(Self::infinity)
    }
}

/// Result of a single-source search: best cost and predecessor per airport.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, M: CostModel> {
    graph: &'g Graph,
    source: usize,
    /// Best known cost, indexed like `graph.vertices()`.
    costs: Vec<M::Cost>,
    /// Previous airport on the best path, indexed like `graph.vertices()`.
    predecessors: Vec<Option<usize>>,
}

/// Cheapest fares from one airport.
pub type CheapestFares<'g> = ShortestPaths<'g, ByPrice>;

/// Shortest flying times from one airport.
pub type FastestTimes<'g> = ShortestPaths<'g, ByDuration>;

impl<'g, M: CostModel> ShortestPaths<'g, M> {
    /// The airport the search started from.
    pub fn source(&self) -> AirportCode {
        self.graph.vertices()[self.source].code()
    }

    /// Best cost to reach `code`, or `None` if it is unreachable or unknown.
    pub fn cost(&self, code: &AirportCode) -> Option<M::Cost> {
        let idx = self.graph.position(code)?;
        self.finite(idx)
    }

    /// Check whether `code` can be reached from the source.
    pub fn is_reachable(&self, code: &AirportCode) -> bool {
        self.cost(code).is_some()
    }

    /// The airport just before `code` on its best path.
    ///
    /// `None` for the source, unreachable airports and unknown codes.
    pub fn predecessor(&self, code: &AirportCode) -> Option<AirportCode> {
        let idx = self.graph.position(code)?;
        self.predecessors[idx].map(|p| self.graph.vertices()[p].code())
    }

    /// Every airport with its best cost (`None` if unreachable), in graph order.
    pub fn costs(&self) -> impl Iterator<Item = (AirportCode, Option<M::Cost>)> + '_ {
        self.graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.code(), self.finite(idx)))
    }

    /// Reachable destinations (source excluded), cheapest first.
    ///
    /// Ties are ordered by airport code.
    pub fn reachable(&self) -> Vec<(&'g Airport, M::Cost)> {
        let graph = self.graph;
        let mut reachable: Vec<_> = graph
            .vertices()
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != self.source)
            .filter_map(|(idx, v)| self.finite(idx).map(|cost| (v.airport(), cost)))
            .collect();

        reachable.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.code.cmp(&b.0.code)));
        reachable
    }

    /// Airports on the best path from the source to `code`, both ends included.
    ///
    /// Returns `None` if `code` is unreachable or unknown.
    pub fn path_to(&self, code: &AirportCode) -> Option<Vec<AirportCode>> {
        let target = self.graph.position(code)?;
        self.finite(target)?;

        let vertices = self.graph.vertices();
        let mut path = vec![vertices[target].code()];
        let mut current = target;

        while current != self.source {
            current = self.predecessors[current]?;
            path.push(vertices[current].code());
            if path.len() > vertices.len() {
                // Predecessor links always lead back to the source
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    fn finite(&self, idx: usize) -> Option<M::Cost> {
        let cost = self.costs[idx];
        (cost != M::infinity()).then_some(cost)
    }
}

/// Run Dijkstra from `source` under cost model `M`.
///
/// # Errors
///
/// Returns [`SearchError::UnknownAirport`] if `source` is not in the graph.
pub fn shortest_paths<'g, M: CostModel>(
    graph: &'g Graph,
    source: &AirportCode,
) -> Result<ShortestPaths<'g, M>, SearchError> {
    let start = graph
        .position(source)
        .ok_or(SearchError::UnknownAirport(*source))?;

    let vertices = graph.vertices();
    let mut costs = vec![M::infinity(); vertices.len()];
    let mut predecessors: Vec<Option<usize>> = vec![None; vertices.len()];
    costs[start] = M::zero();

    let mut queue = BinaryHeap::new();
    queue.push(Reverse((M::zero(), start)));
    let mut relaxations = 0usize;

    while let Some(Reverse((cost, current))) = queue.pop() {
        // Stale entry: a cheaper path was found after this one was queued
        if cost > costs[current] {
            continue;
        }

        for edge in vertices[current].outgoing() {
            let Some(next) = graph.position(&edge.destination) else {
                continue;
            };

            let candidate = M::add(cost, M::weight(edge));
            if candidate < costs[next] {
                trace!(
                    from = %vertices[current].code(),
                    to = %edge.destination,
                    flight = %edge.flight_number,
                    cost = ?candidate,
                    "relaxed"
                );
                costs[next] = candidate;
                predecessors[next] = Some(current);
                queue.push(Reverse((candidate, next)));
                relaxations += 1;
            }
        }
    }

    debug!(
        source = %source,
        airports = vertices.len(),
        relaxations,
        "shortest path search complete"
    );

    Ok(ShortestPaths {
        graph,
        source: start,
        costs,
        predecessors,
    })
}

/// Cheapest fare from `source` to every airport.
pub fn shortest_path_by_price<'g>(
    graph: &'g Graph,
    source: &AirportCode,
) -> Result<CheapestFares<'g>, SearchError> {
    shortest_paths::<ByPrice>(graph, source)
}

/// Shortest flying time from `source` to every airport.
pub fn shortest_path_by_duration<'g>(
    graph: &'g Graph,
    source: &AirportCode,
) -> Result<FastestTimes<'g>, SearchError> {
    shortest_paths::<ByDuration>(graph, source)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CODES: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];

    fn build(n: usize, flights: &[(usize, usize, u32)]) -> Graph {
        let mut graph = Graph::new();
        for c in CODES.iter().take(n) {
            let code = AirportCode::parse(c).unwrap();
            graph.add_vertex(Airport::new(code, *c, 0.0, 0.0)).unwrap();
        }
        for (i, &(from, to, price)) in flights.iter().enumerate() {
            graph
                .add_edge(
                    AirportCode::parse(CODES[from % n]).unwrap(),
                    AirportCode::parse(CODES[to % n]).unwrap(),
                    price,
                    Duration::minutes(i64::from(price)),
                    format!("PT {i}"),
                )
                .unwrap();
        }
        graph
    }

    /// Minimum price over every simple path from `from` to `to`.
    fn brute_force(graph: &Graph, from: usize, to: usize) -> Option<u64> {
        fn walk(
            graph: &Graph,
            at: usize,
            to: usize,
            so_far: u64,
            on_path: &mut Vec<bool>,
            best: &mut Option<u64>,
        ) {
            if at == to {
                *best = Some(best.map_or(so_far, |b| b.min(so_far)));
                return;
            }
            for edge in graph.vertices()[at].outgoing() {
                let next = graph.position(&edge.destination).unwrap();
                if on_path[next] {
                    continue;
                }
                on_path[next] = true;
                walk(graph, next, to, so_far + u64::from(edge.price), on_path, best);
                on_path[next] = false;
            }
        }

        let mut on_path = vec![false; graph.len()];
        on_path[from] = true;
        let mut best = None;
        walk(graph, from, to, 0, &mut on_path, &mut best);
        best
    }

    fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (2usize..=6).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u32..500), 0..14),
            )
        })
    }

    proptest! {
        #[test]
        fn matches_brute_force((n, flights) in network()) {
            let graph = build(n, &flights);
            let source = AirportCode::parse(CODES[0]).unwrap();
            let fares = shortest_path_by_price(&graph, &source).unwrap();

            for (idx, c) in CODES.iter().take(n).enumerate() {
                let code = AirportCode::parse(c).unwrap();
                prop_assert_eq!(fares.cost(&code), brute_force(&graph, 0, idx), "airport {}", c);
            }
        }

        #[test]
        fn reconstructed_paths_price_correctly((n, flights) in network()) {
            let graph = build(n, &flights);
            let source = AirportCode::parse(CODES[0]).unwrap();
            let fares = shortest_path_by_price(&graph, &source).unwrap();

            for (airport, cost) in fares.reachable() {
                let path = fares.path_to(&airport.code).unwrap();
                prop_assert_eq!(path[0], source);
                prop_assert_eq!(*path.last().unwrap(), airport.code);

                let mut total = 0u64;
                for pair in path.windows(2) {
                    let cheapest = graph
                        .vertex(&pair[0])
                        .unwrap()
                        .outgoing()
                        .iter()
                        .filter(|e| e.destination == pair[1])
                        .map(|e| u64::from(e.price))
                        .min();
                    prop_assert!(cheapest.is_some());
                    total += cheapest.unwrap();
                }
                prop_assert_eq!(total, cost);
            }
        }

        #[test]
        fn reachable_is_sorted((n, flights) in network()) {
            let graph = build(n, &flights);
            let source = AirportCode::parse(CODES[0]).unwrap();
            let fares = shortest_path_by_price(&graph, &source).unwrap();

            let reachable = fares.reachable();
            for window in reachable.windows(2) {
                prop_assert!(window[0].1 <= window[1].1);
            }
        }
    }
}
