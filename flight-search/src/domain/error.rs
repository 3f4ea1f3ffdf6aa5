//! Domain error types.
//!
//! These errors represent validation failures when assembling domain values
//! such as itineraries. They are distinct from graph construction and
//! search request errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route must visit at least two airports
    #[error("route must have at least two airports")]
    RouteTooShort,

    /// A route must end where it starts
    #[error("route starts at {start} but ends at {end}")]
    OpenRoute { start: AirportCode, end: AirportCode },

    /// Number of leg option lists doesn't match the number of legs
    #[error("route with {airports} airports cannot have {legs} legs")]
    LegCountMismatch { airports: usize, legs: usize },

    /// A leg has no candidate flights
    #[error("leg {0} has no flights")]
    EmptyLeg(usize),

    /// A candidate flight doesn't serve its leg
    #[error("flight {flight_number} does not fly {origin} to {destination} (leg {leg})")]
    FlightNotOnLeg {
        leg: usize,
        flight_number: String,
        origin: AirportCode,
        destination: AirportCode,
    },
}
