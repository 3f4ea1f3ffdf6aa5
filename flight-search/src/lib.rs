//! Flight network search.
//!
//! Models airports and scheduled flights as a directed, weighted graph and
//! answers three kinds of query over it: cheapest or fastest route to every
//! airport, reachability within a number of legs, and the cheapest order to
//! visit several cities on a round trip.
//!
//! Loading records is left to the caller: build the graph and the direct
//! flight index once from parsed airports and flights, then query them as
//! often as needed.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, NaiveTime};
//! use flight_search::domain::{Airport, AirportCode, Flight};
//! use flight_search::{build_graph, build_index, plan_itinerary, shortest_path_by_price};
//!
//! let yyz = AirportCode::parse("YYZ").unwrap();
//! let jfk = AirportCode::parse("JFK").unwrap();
//! let flight = |number: &str, origin, destination, price| Flight {
//!     flight_number: number.to_string(),
//!     origin,
//!     destination,
//!     distance_km: 586.0,
//!     departure: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
//!     price,
//!     duration: Duration::minutes(84),
//! };
//!
//! let airports = vec![
//!     Airport::new(yyz, "Toronto Pearson", 43.68, -79.62),
//!     Airport::new(jfk, "John F Kennedy", 40.64, -73.78),
//! ];
//! let flights = vec![flight("AC 1001", yyz, jfk, 150), flight("AC 1003", jfk, yyz, 180)];
//!
//! let graph = build_graph(&airports, &flights).unwrap();
//! let fares = shortest_path_by_price(&graph, &yyz).unwrap();
//! assert_eq!(fares.cost(&jfk), Some(150));
//!
//! let index = build_index(&flights);
//! let routes = plan_itinerary(&index, &yyz, &[jfk]).unwrap();
//! assert_eq!(routes[0].cheapest_total_price(), 330);
//! ```

pub mod domain;
pub mod dto;
pub mod network;
pub mod planner;

pub use network::{build_graph, build_index};
pub use planner::{
    bounded_breadth_first_path, bounded_depth_first_path, plan_itinerary,
    shortest_path_by_duration, shortest_path_by_price,
};
