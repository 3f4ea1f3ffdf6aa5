//! Domain types for the flight network.
//!
//! This module contains the core value types: validated airport codes,
//! airports, flights and multi-city routes. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod airport;
mod error;
mod estimate;
mod flight;
mod route;

pub use airport::{Airport, AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use estimate::{estimate_duration, great_circle_km};
pub use flight::{Flight, FlightEdge};
pub use route::{Route, RouteLeg};
