//! Flight types.
//!
//! A `Flight` is the record handed over by whatever loads schedule data.
//! A `FlightEdge` is the part of it the graph and index care about: who
//! flies where, for how much, for how long.

use chrono::{Duration, NaiveTime};

use super::AirportCode;

/// One scheduled flight between two airports.
///
/// Several edges may share the same origin and destination; each is a
/// distinct scheduled flight and they are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightEdge {
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Fare in whole currency units
    pub price: u32,
    /// Time in the air, gate to gate. A graph only accepts durations from
    /// zero up to [`FlightEdge::MAX_DURATION`].
    pub duration: Duration,
    /// Flight identifier (e.g. "AC 1001")
    pub flight_number: String,
}

impl FlightEdge {
    /// Longest flight a graph accepts.
    pub const MAX_DURATION: Duration = Duration::days(7);

    /// Create a new flight edge.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        price: u32,
        duration: Duration,
        flight_number: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            destination,
            price,
            duration,
            flight_number: flight_number.into(),
        }
    }

    /// Returns true if this flight goes directly from `origin` to `destination`.
    pub fn serves(&self, origin: &AirportCode, destination: &AirportCode) -> bool {
        &self.origin == origin && &self.destination == destination
    }
}

/// A flight record as produced by a schedule loader.
///
/// Price and duration arrive already computed; see
/// [`estimate_duration`](super::estimate_duration) for loaders that only
/// know the distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Flight identifier (e.g. "AC 1001")
    pub flight_number: String,
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Great-circle distance in kilometres
    pub distance_km: f64,
    /// Local departure time of day
    pub departure: NaiveTime,
    /// Fare in whole currency units
    pub price: u32,
    /// Time in the air
    pub duration: Duration,
}

impl Flight {
    /// Time of day the flight lands, wrapping past midnight.
    pub fn arrival(&self) -> NaiveTime {
        self.departure + self.duration
    }

    /// Returns true if the flight lands on a later day than it departs.
    pub fn is_overnight(&self) -> bool {
        let (_, wrapped_secs) = self.departure.overflowing_add_signed(self.duration);
        wrapped_secs > 0
    }

    /// The graph edge for this flight.
    pub fn to_edge(&self) -> FlightEdge {
        FlightEdge::new(
            self.origin,
            self.destination,
            self.price,
            self.duration,
            self.flight_number.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn flight(departure: NaiveTime, duration_mins: i64) -> Flight {
        Flight {
            flight_number: "AC 1001".to_string(),
            origin: code("YYZ"),
            destination: code("JFK"),
            distance_km: 550.0,
            departure,
            price: 200,
            duration: Duration::minutes(duration_mins),
        }
    }

    #[test]
    fn serves_is_directional() {
        let edge = FlightEdge::new(code("YYZ"), code("JFK"), 150, Duration::minutes(90), "AC 1002");

        assert!(edge.serves(&code("YYZ"), &code("JFK")));
        assert!(!edge.serves(&code("JFK"), &code("YYZ")));
        assert!(!edge.serves(&code("YYZ"), &code("LAX")));
    }

    #[test]
    fn arrival_adds_duration() {
        let f = flight(hm(8, 0), 84);
        assert_eq!(f.arrival(), hm(9, 24));
        assert!(!f.is_overnight());
    }

    #[test]
    fn arrival_wraps_past_midnight() {
        let f = flight(hm(23, 30), 60);
        assert_eq!(f.arrival(), hm(0, 30));
        assert!(f.is_overnight());
    }

    #[test]
    fn to_edge_copies_search_fields() {
        let f = flight(hm(14, 0), 84);
        let edge = f.to_edge();

        assert_eq!(edge.origin, code("YYZ"));
        assert_eq!(edge.destination, code("JFK"));
        assert_eq!(edge.price, 200);
        assert_eq!(edge.duration, Duration::minutes(84));
        assert_eq!(edge.flight_number, "AC 1001");
    }
}
