//! Data transfer objects for loading records and reporting results.
//!
//! Domain types stay free of serde; these structs carry the JSON shapes.
//! Durations are reported in whole minutes.

use std::collections::HashMap;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Airport, AirportCode, Flight, FlightEdge, InvalidAirportCode, Route, estimate_duration,
    great_circle_km,
};
use crate::planner::{CostModel, ShortestPaths, TraversalPath};

/// Error converting a loaded record into a domain value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Airport code failed validation
    #[error(transparent)]
    Code(#[from] InvalidAirportCode),

    /// Departure time is not HH:MM
    #[error("flight {flight_number} has invalid departure time {value:?}")]
    InvalidDeparture { flight_number: String, value: String },

    /// Distance is needed but an endpoint has no airport record
    #[error("flight {flight_number} references unknown airport {code}")]
    UnknownAirport {
        flight_number: String,
        code: AirportCode,
    },

    /// Duration does not fit in a `Duration`
    #[error("flight {flight_number} has out-of-range duration {value} minutes")]
    InvalidDuration { flight_number: String, value: i64 },

    /// Distance is too large to estimate a duration from
    #[error("flight {flight_number} has out-of-range distance {value} km")]
    InvalidDistance { flight_number: String, value: f64 },
}

/// An airport as loaded from a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub runway_length: u32,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl AirportRecord {
    /// Convert to a domain Airport.
    pub fn to_airport(&self) -> Result<Airport, RecordError> {
        let code = AirportCode::parse(&self.code)?;
        Ok(Airport::new(code, self.name.clone(), self.latitude, self.longitude)
            .with_timezone(self.timezone.clone())
            .with_runway_length(self.runway_length)
            .with_city(self.city.clone(), self.country.clone()))
    }
}

/// A scheduled flight as loaded from a data file.
///
/// Distance and duration may be omitted; they are then estimated from the
/// airport coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    /// Departure time, "HH:MM"
    pub departure: String,
    pub price: u32,
    pub distance_km: Option<f64>,
    pub duration_mins: Option<i64>,
}

impl FlightRecord {
    /// Convert to a domain Flight, estimating missing distance and duration.
    pub fn to_flight(
        &self,
        airports: &HashMap<AirportCode, Airport>,
    ) -> Result<Flight, RecordError> {
        let origin = AirportCode::parse(&self.origin)?;
        let destination = AirportCode::parse(&self.destination)?;

        let departure = NaiveTime::parse_from_str(&self.departure, "%H:%M").map_err(|_| {
            RecordError::InvalidDeparture {
                flight_number: self.flight_number.clone(),
                value: self.departure.clone(),
            }
        })?;

        let distance_km = match self.distance_km {
            Some(km) => km,
            None => {
                let lookup = |code: AirportCode| {
                    airports.get(&code).ok_or_else(|| RecordError::UnknownAirport {
                        flight_number: self.flight_number.clone(),
                        code,
                    })
                };
                great_circle_km(lookup(origin)?, lookup(destination)?)
            }
        };

        let duration = match self.duration_mins {
            Some(value) => {
                Duration::try_minutes(value).ok_or_else(|| RecordError::InvalidDuration {
                    flight_number: self.flight_number.clone(),
                    value,
                })?
            }
            None => estimate_duration(distance_km).ok_or_else(|| RecordError::InvalidDistance {
                flight_number: self.flight_number.clone(),
                value: distance_km,
            })?,
        };

        Ok(Flight {
            flight_number: self.flight_number.clone(),
            origin,
            destination,
            distance_km,
            departure,
            price: self.price,
            duration,
        })
    }
}

/// A full data file: airports and flights.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkRecords {
    pub airports: Vec<AirportRecord>,
    pub flights: Vec<FlightRecord>,
}

impl NetworkRecords {
    /// Convert every record, failing on the first bad one.
    pub fn to_domain(&self) -> Result<(Vec<Airport>, Vec<Flight>), RecordError> {
        let airports = self
            .airports
            .iter()
            .map(AirportRecord::to_airport)
            .collect::<Result<Vec<_>, _>>()?;

        let by_code: HashMap<_, _> = airports.iter().map(|a| (a.code, a.clone())).collect();
        let flights = self
            .flights
            .iter()
            .map(|f| f.to_flight(&by_code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((airports, flights))
    }
}

/// A destination with its best cost from the source.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    /// Airport code
    pub code: String,

    /// Airport name
    pub name: String,

    /// Best cost: dollars for fares, minutes for flying time
    pub cost: i64,

    /// Airports on the best path, source first
    pub path: Vec<String>,
}

/// Response for a single-source search.
#[derive(Debug, Serialize)]
pub struct ShortestPathsResponse {
    /// Where the search started
    pub source: String,

    /// "price" or "duration"
    pub metric: &'static str,

    /// Reachable airports, best first
    pub destinations: Vec<DestinationResult>,

    /// Airports with no route from the source
    pub unreachable: Vec<String>,
}

impl ShortestPathsResponse {
    /// Create from a search result, using `to_units` to express costs.
    pub fn from_paths<M: CostModel>(
        paths: &ShortestPaths<'_, M>,
        metric: &'static str,
        to_units: impl Fn(M::Cost) -> i64,
    ) -> Self {
        let destinations = paths
            .reachable()
            .into_iter()
            .map(|(airport, cost)| DestinationResult {
                code: airport.code.to_string(),
                name: airport.name.clone(),
                cost: to_units(cost),
                path: paths
                    .path_to(&airport.code)
                    .unwrap_or_default()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();

        let unreachable = paths
            .costs()
            .filter(|(_, cost)| cost.is_none())
            .map(|(code, _)| code.to_string())
            .collect();

        Self {
            source: paths.source().to_string(),
            metric,
            destinations,
            unreachable,
        }
    }
}

/// Response for a reachability search.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Whether a route was found
    pub found: bool,

    /// Airports on the route, origin first
    pub airports: Vec<String>,

    /// Number of flights
    pub legs: usize,
}

impl PathResponse {
    /// Create from a traversal result.
    pub fn from_path(path: Option<&TraversalPath>) -> Self {
        match path {
            Some(path) => Self {
                found: true,
                airports: path.airports().iter().map(ToString::to_string).collect(),
                legs: path.legs(),
            },
            None => Self {
                found: false,
                airports: Vec::new(),
                legs: 0,
            },
        }
    }
}

/// Request to plan a multi-city trip.
#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    /// Home airport code
    pub home: String,

    /// Cities to visit
    pub destinations: Vec<String>,
}

impl PlanItineraryRequest {
    /// Parse the airport codes.
    pub fn codes(&self) -> Result<(AirportCode, Vec<AirportCode>), InvalidAirportCode> {
        let home = AirportCode::parse(&self.home)?;
        let destinations = self
            .destinations
            .iter()
            .map(|c| AirportCode::parse(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((home, destinations))
    }
}

/// A candidate flight on a leg.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Flight number
    pub flight_number: String,

    /// Fare in dollars
    pub price: u32,

    /// Flying time in minutes
    pub duration_mins: i64,
}

impl FlightResult {
    /// Create from a domain FlightEdge.
    pub fn from_edge(edge: &FlightEdge) -> Self {
        Self {
            flight_number: edge.flight_number.clone(),
            price: edge.price,
            duration_mins: edge.duration.num_minutes(),
        }
    }
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Departure airport
    pub origin: String,

    /// Arrival airport
    pub destination: String,

    /// Cheapest fare on this leg
    pub cheapest_price: Option<u32>,

    /// All direct flights serving this leg
    pub flights: Vec<FlightResult>,
}

/// A planned round trip.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Airports in visiting order, home at both ends
    pub leg_order: Vec<String>,

    /// Per-leg flight options
    pub legs: Vec<LegResult>,

    /// Sum of each leg's cheapest fare
    pub cheapest_total_price: u64,

    /// Flying time when taking the cheapest flight on every leg, in minutes
    pub cheapest_total_duration_mins: i64,
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let legs = route
            .legs()
            .map(|leg| LegResult {
                origin: leg.origin.to_string(),
                destination: leg.destination.to_string(),
                cheapest_price: leg.cheapest_price(),
                flights: leg.flights.iter().map(FlightResult::from_edge).collect(),
            })
            .collect();

        Self {
            leg_order: route.leg_order().iter().map(ToString::to_string).collect(),
            legs,
            cheapest_total_price: route.cheapest_total_price(),
            cheapest_total_duration_mins: route.cheapest_total_duration().num_minutes(),
        }
    }
}

/// Response for itinerary planning.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// Fully served routes, cheapest first
    pub routes: Vec<RouteResult>,
}

impl PlanItineraryResponse {
    /// Create from ranked routes.
    pub fn from_routes(routes: &[Route]) -> Self {
        Self {
            routes: routes.iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{build_graph, build_index};
    use crate::planner::{plan_itinerary, shortest_path_by_duration, shortest_path_by_price};

    const SAMPLE: &str = r#"{
        "airports": [
            {"code": "YYZ", "name": "Toronto Pearson", "latitude": 43.6777, "longitude": -79.6248,
             "timezone": "America/Toronto", "runway_length": 3389, "city": "Toronto", "country": "Canada"},
            {"code": "JFK", "name": "John F Kennedy", "latitude": 40.6413, "longitude": -73.7781},
            {"code": "LAX", "name": "Los Angeles", "latitude": 33.9416, "longitude": -118.4085}
        ],
        "flights": [
            {"flight_number": "AC 1001", "origin": "YYZ", "destination": "JFK", "departure": "07:15",
             "price": 150, "distance_km": 586.0, "duration_mins": 84},
            {"flight_number": "AA 2001", "origin": "JFK", "destination": "LAX", "departure": "09:00",
             "price": 350},
            {"flight_number": "WS 3002", "origin": "LAX", "destination": "YYZ", "departure": "23:30",
             "price": 380, "duration_mins": 280}
        ]
    }"#;

    fn load() -> (Vec<Airport>, Vec<Flight>) {
        let records: NetworkRecords = serde_json::from_str(SAMPLE).unwrap();
        records.to_domain().unwrap()
    }

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn records_convert() {
        let (airports, flights) = load();

        assert_eq!(airports.len(), 3);
        assert_eq!(airports[0].city, "Toronto");
        assert_eq!(airports[0].runway_length, 3389);
        assert_eq!(airports[1].timezone, "");

        assert_eq!(flights[0].duration, Duration::minutes(84));
        assert_eq!(flights[0].departure, NaiveTime::from_hms_opt(7, 15, 0).unwrap());
    }

    #[test]
    fn missing_distance_is_estimated() {
        let (_, flights) = load();
        let jfk_lax = &flights[1];

        // JFK-LAX great circle is about 3,980 km
        assert!((jfk_lax.distance_km - 3980.0).abs() < 50.0);
        assert_eq!(Some(jfk_lax.duration), estimate_duration(jfk_lax.distance_km));
    }

    #[test]
    fn bad_records_rejected() {
        let record = AirportRecord {
            code: "toronto".into(),
            name: "Toronto".into(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: String::new(),
            runway_length: 0,
            city: String::new(),
            country: String::new(),
        };
        assert!(matches!(record.to_airport(), Err(RecordError::Code(_))));

        let flight = FlightRecord {
            flight_number: "AC 1".into(),
            origin: "YYZ".into(),
            destination: "JFK".into(),
            departure: "25:99".into(),
            price: 100,
            distance_km: Some(500.0),
            duration_mins: Some(60),
        };
        let err = flight.to_flight(&HashMap::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "flight AC 1 has invalid departure time \"25:99\""
        );

        let flight = FlightRecord {
            departure: "10:00".into(),
            distance_km: None,
            ..flight
        };
        assert_eq!(
            flight.to_flight(&HashMap::new()).unwrap_err(),
            RecordError::UnknownAirport {
                flight_number: "AC 1".into(),
                code: code("YYZ"),
            }
        );
    }

    #[test]
    fn out_of_range_times_rejected() {
        let flight = FlightRecord {
            flight_number: "AC 1".into(),
            origin: "YYZ".into(),
            destination: "JFK".into(),
            departure: "10:00".into(),
            price: 100,
            distance_km: Some(500.0),
            duration_mins: Some(i64::MAX),
        };
        assert_eq!(
            flight.to_flight(&HashMap::new()).unwrap_err(),
            RecordError::InvalidDuration {
                flight_number: "AC 1".into(),
                value: i64::MAX,
            }
        );

        let flight = FlightRecord {
            distance_km: Some(1e300),
            duration_mins: None,
            ..flight
        };
        assert_eq!(
            flight.to_flight(&HashMap::new()).unwrap_err(),
            RecordError::InvalidDistance {
                flight_number: "AC 1".into(),
                value: 1e300,
            }
        );

        let flight = FlightRecord {
            distance_km: Some(f64::INFINITY),
            ..flight
        };
        assert!(matches!(
            flight.to_flight(&HashMap::new()),
            Err(RecordError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn shortest_paths_response() {
        let (airports, flights) = load();
        let graph = build_graph(&airports, &flights).unwrap();

        let fares = shortest_path_by_price(&graph, &code("YYZ")).unwrap();
        let response = ShortestPathsResponse::from_paths(&fares, "price", |c| c as i64);
        assert_eq!(response.source, "YYZ");
        assert_eq!(response.destinations.len(), 2);
        assert_eq!(response.destinations[1].code, "LAX");
        assert_eq!(response.destinations[1].cost, 500);
        assert_eq!(response.destinations[1].path, vec!["YYZ", "JFK", "LAX"]);
        assert!(response.unreachable.is_empty());

        let times = shortest_path_by_duration(&graph, &code("LAX")).unwrap();
        let response = ShortestPathsResponse::from_paths(&times, "duration", |d| d.num_minutes());
        assert_eq!(response.destinations[0].code, "YYZ");
        assert_eq!(response.destinations[0].cost, 280);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["metric"], "duration");
    }

    #[test]
    fn route_response() {
        let (_, flights) = load();
        let index = build_index(&flights);

        let request: PlanItineraryRequest =
            serde_json::from_str(r#"{"home": "YYZ", "destinations": ["LAX", "JFK"]}"#).unwrap();
        let (home, destinations) = request.codes().unwrap();

        let routes = plan_itinerary(&index, &home, &destinations).unwrap();
        let response = PlanItineraryResponse::from_routes(&routes);

        assert_eq!(response.routes.len(), 1);
        let route = &response.routes[0];
        assert_eq!(route.leg_order, vec!["YYZ", "JFK", "LAX", "YYZ"]);
        assert_eq!(route.cheapest_total_price, 880);
        assert_eq!(route.legs[0].flights[0].flight_number, "AC 1001");
        assert_eq!(route.legs[2].cheapest_price, Some(380));
    }

    #[test]
    fn path_response() {
        let none = PathResponse::from_path(None);
        assert!(!none.found);
        assert_eq!(none.legs, 0);

        let json = serde_json::to_string(&none).unwrap();
        assert_eq!(json, r#"{"found":false,"airports":[],"legs":0}"#);
    }
}
