//! Multi-city route types.
//!
//! A `Route` is one candidate visiting order for a round trip from a home
//! airport, together with every direct flight that could fly each leg.
//! Legs are priced independently: the route's total is the sum of each
//! leg's cheapest fare, a lower bound rather than one booked set of flights.

use std::fmt;

use chrono::Duration;

use super::{AirportCode, DomainError, FlightEdge};

/// One leg of a route: a direct hop and the flights that serve it.
#[derive(Debug, Clone, Copy)]
pub struct RouteLeg<'a> {
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Candidate flights, in index order
    pub flights: &'a [FlightEdge],
}

impl<'a> RouteLeg<'a> {
    /// The cheapest flight on this leg (first listed wins ties).
    pub fn cheapest(&self) -> Option<&'a FlightEdge> {
        self.flights.iter().min_by_key(|f| f.price)
    }

    /// The cheapest fare on this leg.
    pub fn cheapest_price(&self) -> Option<u32> {
        self.cheapest().map(|f| f.price)
    }
}

/// A round trip visiting a set of cities in a fixed order.
///
/// # Invariants
///
/// - At least two airports, first equals last (the home airport)
/// - Exactly one non-empty list of flights per leg
/// - Every flight in leg `i` flies `leg_order[i]` to `leg_order[i + 1]`
#[derive(Debug, Clone)]
pub struct Route {
    leg_order: Vec<AirportCode>,
    leg_options: Vec<Vec<FlightEdge>>,
    cheapest_total_price: u64,
}

impl Route {
    /// Constructs a route, validating its shape and pricing each leg.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the leg order is too short or doesn't return home,
    /// if the number of leg option lists is wrong, if any leg has no
    /// flights, or if a flight doesn't serve the leg it is listed under.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_search::domain::{AirportCode, FlightEdge, Route};
    /// use chrono::Duration;
    ///
    /// let yyz = AirportCode::parse("YYZ").unwrap();
    /// let jfk = AirportCode::parse("JFK").unwrap();
    /// let hour = Duration::hours(1);
    ///
    /// let route = Route::new(
    ///     vec![yyz, jfk, yyz],
    ///     vec![
    ///         vec![
    ///             FlightEdge::new(yyz, jfk, 200, hour, "AC 1001"),
    ///             FlightEdge::new(yyz, jfk, 150, hour, "AC 1002"),
    ///         ],
    ///         vec![FlightEdge::new(jfk, yyz, 180, hour, "AC 1003")],
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(route.cheapest_total_price(), 330);
    /// ```
    pub fn new(
        leg_order: Vec<AirportCode>,
        leg_options: Vec<Vec<FlightEdge>>,
    ) -> Result<Self, DomainError> {
        let (start, end) = match (leg_order.first(), leg_order.last()) {
            (Some(start), Some(end)) if leg_order.len() >= 2 => (*start, *end),
            _ => return Err(DomainError::RouteTooShort),
        };
        if start != end {
            return Err(DomainError::OpenRoute { start, end });
        }
        if leg_options.len() != leg_order.len() - 1 {
            return Err(DomainError::LegCountMismatch {
                airports: leg_order.len(),
                legs: leg_options.len(),
            });
        }

        let mut cheapest_total_price = 0u64;
        for (leg, (pair, flights)) in leg_order.windows(2).zip(&leg_options).enumerate() {
            if let Some(stray) = flights.iter().find(|f| !f.serves(&pair[0], &pair[1])) {
                return Err(DomainError::FlightNotOnLeg {
                    leg,
                    flight_number: stray.flight_number.clone(),
                    origin: pair[0],
                    destination: pair[1],
                });
            }
            let cheapest = flights
                .iter()
                .map(|f| f.price)
                .min()
                .ok_or(DomainError::EmptyLeg(leg))?;
            cheapest_total_price += u64::from(cheapest);
        }

        Ok(Route {
            leg_order,
            leg_options,
            cheapest_total_price,
        })
    }

    /// Returns the airports in visiting order, home at both ends.
    pub fn leg_order(&self) -> &[AirportCode] {
        &self.leg_order
    }

    /// Returns the candidate flights for each leg.
    pub fn leg_options(&self) -> &[Vec<FlightEdge>] {
        &self.leg_options
    }

    /// Returns the home airport.
    pub fn home(&self) -> AirportCode {
        self.leg_order[0]
    }

    /// Returns the cities visited between leaving and returning home.
    pub fn destinations(&self) -> &[AirportCode] {
        &self.leg_order[1..self.leg_order.len() - 1]
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.leg_options.len()
    }

    /// Iterates over the legs in order.
    pub fn legs(&self) -> impl Iterator<Item = RouteLeg<'_>> {
        self.leg_order
            .windows(2)
            .zip(&self.leg_options)
            .map(|(pair, flights)| RouteLeg {
                origin: pair[0],
                destination: pair[1],
                flights,
            })
    }

    /// Sum over legs of the cheapest fare on each leg.
    pub fn cheapest_total_price(&self) -> u64 {
        self.cheapest_total_price
    }

    /// The cheapest flight on each leg, in leg order.
    pub fn cheapest_flights(&self) -> Vec<&FlightEdge> {
        self.legs().filter_map(|leg| leg.cheapest()).collect()
    }

    /// Total time in the air when flying the cheapest flight on every leg.
    pub fn cheapest_total_duration(&self) -> Duration {
        self.cheapest_flights()
            .iter()
            .fold(Duration::zero(), |acc, f| acc + f.duration)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.leg_order.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            f.write_str(code.as_str())?;
        }
        write!(f, " (${})", self.cheapest_total_price)
    }
}
