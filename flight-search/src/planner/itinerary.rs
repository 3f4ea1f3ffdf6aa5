//! Multi-city round trip planning.
//!
//! Given a home airport and a handful of cities, try every visiting order,
//! keep the orders where each hop has a direct flight, and price each one by
//! the cheapest fare per leg. Only direct flights are considered; there is
//! no connecting-flight substitution for an unserved leg.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{AirportCode, Route};
use crate::network::DirectFlightIndex;

use super::config::MAX_DESTINATIONS;
use super::rank::rank_routes;
use super::search::SearchError;

/// Check a destination list before planning.
///
/// Rejects an empty list, more than `limit` cities, repeated cities and the
/// home airport appearing as a destination.
pub(super) fn validate_destinations(
    home: &AirportCode,
    destinations: &[AirportCode],
    limit: usize,
) -> Result<(), SearchError> {
    if destinations.is_empty() {
        return Err(SearchError::InvalidRequest(
            "at least one destination is required".to_string(),
        ));
    }
    if destinations.len() > limit {
        return Err(SearchError::InvalidRequest(format!(
            "at most {limit} destinations are supported, got {}",
            destinations.len()
        )));
    }

    let mut seen = HashSet::with_capacity(destinations.len());
    for code in destinations {
        if code == home {
            return Err(SearchError::InvalidRequest(format!(
                "destination {code} is the home airport"
            )));
        }
        if !seen.insert(code) {
            return Err(SearchError::InvalidRequest(format!(
                "destination {code} is listed more than once"
            )));
        }
    }

    Ok(())
}

/// Every visiting order as a round trip from `home`.
///
/// Each order is `[home, d1, ..., dn, home]`; there are `n!` of them and none
/// is filtered here.
pub fn leg_orders(home: AirportCode, destinations: &[AirportCode]) -> Vec<Vec<AirportCode>> {
    fn permute(
        home: AirportCode,
        k: usize,
        cities: &mut [AirportCode],
        out: &mut Vec<Vec<AirportCode>>,
    ) {
        if k == cities.len() {
            let mut order = Vec::with_capacity(cities.len() + 2);
            order.push(home);
            order.extend_from_slice(cities);
            order.push(home);
            out.push(order);
            return;
        }
        for i in k..cities.len() {
            cities.swap(k, i);
            permute(home, k + 1, cities, out);
            cities.swap(k, i);
        }
    }

    let mut cities = destinations.to_vec();
    let mut out = Vec::new();
    permute(home, 0, &mut cities, &mut out);
    out
}

/// Check that every hop of a leg order has at least one direct flight.
fn is_served(index: &DirectFlightIndex, order: &[AirportCode]) -> bool {
    order
        .windows(2)
        .all(|pair| index.has_service(&pair[0], &pair[1]))
}

/// Build a priced route for a fully served leg order.
fn build_route(index: &DirectFlightIndex, order: Vec<AirportCode>) -> Result<Route, SearchError> {
    let options = order
        .windows(2)
        .map(|pair| index.lookup(&pair[0], &pair[1]).to_vec())
        .collect();
    Ok(Route::new(order, options)?)
}

pub(super) fn plan_within(
    index: &DirectFlightIndex,
    home: &AirportCode,
    destinations: &[AirportCode],
    limit: usize,
) -> Result<Vec<Route>, SearchError> {
    validate_destinations(home, destinations, limit)?;

    let orders = leg_orders(*home, destinations);
    let considered = orders.len();

    let mut routes = Vec::new();
    for order in orders {
        if !is_served(index, &order) {
            trace!(order = ?order, "leg order has an unserved hop");
            continue;
        }
        routes.push(build_route(index, order)?);
    }

    debug!(
        home = %home,
        destinations = destinations.len(),
        considered,
        feasible = routes.len(),
        "planned itinerary"
    );

    Ok(rank_routes(routes))
}

/// Plan every fully served round trip from `home` through `destinations`.
///
/// Routes come back cheapest first by [`Route::cheapest_total_price`]. An
/// empty list means no visiting order has a direct flight on every hop.
///
/// # Errors
///
/// Returns [`SearchError::InvalidRequest`] for an empty destination list,
/// more than five destinations, a repeated destination or a destination equal
/// to `home`.
pub fn plan_itinerary(
    index: &DirectFlightIndex,
    home: &AirportCode,
    destinations: &[AirportCode],
) -> Result<Vec<Route>, SearchError> {
    plan_within(index, home, destinations, MAX_DESTINATIONS)
}
