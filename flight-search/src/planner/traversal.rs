//! Bounded reachability searches.
//!
//! These answer "can I get from A to B in at most K flights?" and look only
//! at which airports connect, never at price or duration. Depth-first search
//! honours an explicit leg bound; breadth-first search finds a route with the
//! fewest legs.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::domain::AirportCode;
use crate::network::Graph;

use super::search::SearchError;

/// Airports visited by a traversal, origin first and destination last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPath {
    airports: Vec<AirportCode>,
}

impl TraversalPath {
    fn from_positions(graph: &Graph, positions: &[usize]) -> Self {
        let vertices = graph.vertices();
        Self {
            airports: positions.iter().map(|&idx| vertices[idx].code()).collect(),
        }
    }

    /// Every airport on the path, in order.
    pub fn airports(&self) -> &[AirportCode] {
        &self.airports
    }

    /// Where the path starts.
    pub fn origin(&self) -> AirportCode {
        self.airports[0]
    }

    /// Where the path ends.
    pub fn destination(&self) -> AirportCode {
        self.airports[self.airports.len() - 1]
    }

    /// Number of flights taken.
    pub fn legs(&self) -> usize {
        self.airports.len() - 1
    }
}

impl fmt::Display for TraversalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.airports.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Resolve both endpoints, rejecting unknown airports and identical ends.
fn endpoints(
    graph: &Graph,
    from: &AirportCode,
    to: &AirportCode,
) -> Result<(usize, usize), SearchError> {
    let start = graph
        .position(from)
        .ok_or(SearchError::UnknownAirport(*from))?;
    let target = graph
        .position(to)
        .ok_or(SearchError::UnknownAirport(*to))?;

    if start == target {
        return Err(SearchError::InvalidRequest(format!(
            "origin and destination are both {from}"
        )));
    }

    Ok((start, target))
}

/// Depth-first search state.
///
/// `on_path` marks only the airports on the current branch; entries are
/// cleared on backtrack so sibling branches never prune each other.
struct DepthFirst<'g> {
    graph: &'g Graph,
    target: usize,
    max_legs: usize,
    path: Vec<usize>,
    on_path: Vec<bool>,
    expanded: usize,
}

impl DepthFirst<'_> {
    /// Extend the current path from its last airport.
    ///
    /// Returns true once `path` ends at the target.
    fn extend(&mut self) -> bool {
        let Some(&current) = self.path.last() else {
            return false;
        };
        if self.path.len() > self.max_legs {
            return false;
        }
        self.expanded += 1;

        let graph = self.graph;
        let mut tried: Vec<usize> = Vec::new();
        for edge in graph.vertices()[current].outgoing() {
            let Some(next) = graph.position(&edge.destination) else {
                continue;
            };
            // Parallel flights lead to the same subtree
            if self.on_path[next] || tried.contains(&next) {
                continue;
            }
            tried.push(next);

            self.path.push(next);
            if next == self.target {
                return true;
            }

            self.on_path[next] = true;
            if self.extend() {
                return true;
            }
            self.on_path[next] = false;
            self.path.pop();
        }

        false
    }
}

/// Find a route from `from` to `to` using at most `max_legs` flights.
///
/// Explores departures in insertion order and returns the first route that
/// arrives; it is not necessarily the shortest. A route never visits the same
/// airport twice.
///
/// # Errors
///
/// Returns [`SearchError::UnknownAirport`] for an endpoint not in the graph
/// and [`SearchError::InvalidRequest`] if the endpoints are equal or
/// `max_legs` is zero.
pub fn bounded_depth_first_path(
    graph: &Graph,
    from: &AirportCode,
    to: &AirportCode,
    max_legs: usize,
) -> Result<Option<TraversalPath>, SearchError> {
    if max_legs == 0 {
        return Err(SearchError::InvalidRequest(
            "leg limit must be at least 1".to_string(),
        ));
    }
    let (start, target) = endpoints(graph, from, to)?;

    let mut on_path = vec![false; graph.len()];
    on_path[start] = true;

    let mut search = DepthFirst {
        graph,
        target,
        max_legs,
        path: vec![start],
        on_path,
        expanded: 0,
    };
    let found = search.extend();

    debug!(
        from = %from,
        to = %to,
        max_legs,
        expanded = search.expanded,
        found,
        "depth-first search complete"
    );

    Ok(found.then(|| TraversalPath::from_positions(graph, &search.path)))
}

/// Find a route from `from` to `to` with the fewest flights.
///
/// Level-order search with one visited set shared by the whole search, so
/// every airport is queued at most once.
///
/// # Errors
///
/// Returns [`SearchError::UnknownAirport`] for an endpoint not in the graph
/// and [`SearchError::InvalidRequest`] if the endpoints are equal.
pub fn bounded_breadth_first_path(
    graph: &Graph,
    from: &AirportCode,
    to: &AirportCode,
) -> Result<Option<TraversalPath>, SearchError> {
    let (start, target) = endpoints(graph, from, to)?;

    let vertices = graph.vertices();
    let mut visited = vec![false; vertices.len()];
    let mut parent: Vec<Option<usize>> = vec![None; vertices.len()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);
    let mut dequeued = 0usize;

    while let Some(current) = queue.pop_front() {
        dequeued += 1;

        for edge in vertices[current].outgoing() {
            let Some(next) = graph.position(&edge.destination) else {
                continue;
            };
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);

            if next == target {
                let mut positions = vec![target];
                let mut at = current;
                positions.push(at);
                while let Some(prev) = parent[at] {
                    positions.push(prev);
                    at = prev;
                }
                positions.reverse();

                debug!(
                    from = %from,
                    to = %to,
                    dequeued,
                    legs = positions.len() - 1,
                    "breadth-first search found route"
                );
                return Ok(Some(TraversalPath::from_positions(graph, &positions)));
            }

            queue.push_back(next);
        }
    }

    debug!(from = %from, to = %to, dequeued, "breadth-first search found no route");
    Ok(None)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Airport;
    use chrono::Duration;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const CODES: [&str; 7] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF", "GGG"];

    fn build(n: usize, flights: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new();
        for c in CODES.iter().take(n) {
            let code = AirportCode::parse(c).unwrap();
            graph.add_vertex(Airport::new(code, *c, 0.0, 0.0)).unwrap();
        }
        for (i, &(from, to)) in flights.iter().enumerate() {
            graph
                .add_edge(
                    AirportCode::parse(CODES[from]).unwrap(),
                    AirportCode::parse(CODES[to]).unwrap(),
                    50,
                    Duration::minutes(45),
                    format!("PT {i}"),
                )
                .unwrap();
        }
        graph
    }

    fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..=7).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..16)))
    }

    fn assert_valid(graph: &Graph, path: &TraversalPath) -> Result<(), TestCaseError> {
        let unique: HashSet<_> = path.airports().iter().collect();
        prop_assert_eq!(unique.len(), path.airports().len());

        for pair in path.airports().windows(2) {
            let served = graph
                .vertex(&pair[0])
                .unwrap()
                .outgoing()
                .iter()
                .any(|e| e.destination == pair[1]);
            prop_assert!(served, "no flight {} → {}", pair[0], pair[1]);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn dfs_finds_route_iff_within_bound((n, flights) in network(), max_legs in 1usize..7) {
            let graph = build(n, &flights);
            let from = AirportCode::parse(CODES[0]).unwrap();
            let to = AirportCode::parse(CODES[n - 1]).unwrap();

            let fewest = bounded_breadth_first_path(&graph, &from, &to).unwrap();
            let dfs = bounded_depth_first_path(&graph, &from, &to, max_legs).unwrap();

            let expected = fewest.as_ref().is_some_and(|p| p.legs() <= max_legs);
            prop_assert_eq!(dfs.is_some(), expected);

            if let Some(path) = &dfs {
                prop_assert!(path.legs() <= max_legs);
                prop_assert_eq!(path.origin(), from);
                prop_assert_eq!(path.destination(), to);
                assert_valid(&graph, path)?;
            }
            if let Some(path) = &fewest {
                assert_valid(&graph, path)?;
            }
        }
    }
}
