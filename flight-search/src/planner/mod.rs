//! Queries over a built flight network.
//!
//! Three kinds of question are answered here:
//!
//! - cheapest fare or shortest flying time to every airport (Dijkstra),
//! - whether an airport is reachable within a number of legs (DFS/BFS),
//! - the cheapest order to visit a handful of cities on a round trip.
//!
//! Every query borrows the graph or index immutably and keeps its working
//! state local, so any number can run concurrently against one network.

mod config;
mod itinerary;
mod rank;
mod search;
mod shortest;
mod traversal;

pub use config::{MAX_DESTINATIONS, SearchConfig};
pub use itinerary::{leg_orders, plan_itinerary};
pub use rank::{cheapest_route, rank_routes};
pub use search::{ItineraryRequest, Planner, SearchError};
pub use shortest::{
    ByDuration, ByPrice, CheapestFares, CostModel, FastestTimes, ShortestPaths,
    shortest_path_by_duration, shortest_path_by_price, shortest_paths,
};
pub use traversal::{TraversalPath, bounded_breadth_first_path, bounded_depth_first_path};
