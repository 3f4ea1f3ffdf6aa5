use std::error::Error;
use std::process::ExitCode;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_search::domain::AirportCode;
use flight_search::dto::{
    ErrorResponse, NetworkRecords, PathResponse, PlanItineraryRequest, PlanItineraryResponse,
    ShortestPathsResponse,
};
use flight_search::network::{FlightNetwork, SharedNetwork};
use flight_search::planner::{ItineraryRequest, Planner, SearchConfig};

/// Network used when `FLIGHT_SEARCH_DATA` is not set.
const SAMPLE_NETWORK: &str = include_str!("../data/sample_network.json");

/// Everything the demo prints, as one JSON document.
#[derive(Serialize)]
struct Report {
    cheapest: ShortestPathsResponse,
    fastest: ShortestPathsResponse,
    depth_first: PathResponse,
    fewest_legs: PathResponse,
    itinerary: PlanItineraryResponse,
}

/// Search limits, with `FLIGHT_SEARCH_MAX_LEGS` overriding the default.
fn search_config() -> Result<SearchConfig, Box<dyn Error>> {
    let mut config = SearchConfig::default();
    if let Ok(value) = std::env::var("FLIGHT_SEARCH_MAX_LEGS") {
        config.max_legs = value
            .parse()
            .map_err(|e| format!("FLIGHT_SEARCH_MAX_LEGS={value:?}: {e}"))?;
    }
    Ok(config)
}

fn load_network() -> Result<FlightNetwork, Box<dyn Error>> {
    let records: NetworkRecords = match std::env::var("FLIGHT_SEARCH_DATA") {
        Ok(path) => {
            info!(path = %path, "loading flight data");
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => serde_json::from_str(SAMPLE_NETWORK)?,
    };

    let (airports, flights) = records.to_domain()?;
    Ok(FlightNetwork::build(&airports, &flights)?)
}

/// Usage: `flight-search [HOME [DESTINATION...]]`, defaulting to a
/// Toronto, New York, Los Angeles round trip.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let response = ErrorResponse {
                error: e.to_string(),
            };
            match serde_json::to_string(&response) {
                Ok(json) => println!("{json}"),
                Err(_) => eprintln!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let home = args.next().unwrap_or_else(|| "YYZ".to_string());
    let mut destinations: Vec<String> = args.collect();
    if destinations.is_empty() {
        destinations = vec!["JFK".to_string(), "LAX".to_string()];
    }

    let (home, destinations) = PlanItineraryRequest { home, destinations }.codes()?;
    let far_end: AirportCode = destinations[destinations.len() - 1];

    let config = search_config()?;
    let shared = SharedNetwork::new(load_network()?);
    let network = shared.snapshot();
    info!(
        airports = network.graph().len(),
        flights = network.graph().edge_count(),
        routes = network.index().route_count(),
        "flight network ready"
    );

    let planner = Planner::new(&network, &config);

    let cheapest = planner.cheapest_fares(&home)?;
    let fastest = planner.fastest_times(&home)?;
    let depth_first = planner.find_route(&home, &far_end)?;
    let fewest_legs = planner.fewest_legs(&home, &far_end)?;
    let routes = planner.plan(&ItineraryRequest::new(home, destinations))?;

    let report = Report {
        cheapest: ShortestPathsResponse::from_paths(&cheapest, "price", |c| {
            i64::try_from(c).unwrap_or(i64::MAX)
        }),
        fastest: ShortestPathsResponse::from_paths(&fastest, "duration", |d| d.num_minutes()),
        depth_first: PathResponse::from_path(depth_first.as_ref()),
        fewest_legs: PathResponse::from_path(fewest_legs.as_ref()),
        itinerary: PlanItineraryResponse::from_routes(&routes),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
