//! Route ranking for itinerary results.

use crate::domain::Route;

/// Rank routes by cheapest total price, cheapest first.
///
/// The sort is stable: routes with equal totals keep the order in which they
/// were generated.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by_key(Route::cheapest_total_price);
    routes
}

/// The cheapest route, if any.
///
/// On a tie the earlier route wins, matching [`rank_routes`].
pub fn cheapest_route(routes: &[Route]) -> Option<&Route> {
    routes
        .iter()
        .reduce(|best, r| {
            if r.cheapest_total_price() < best.cheapest_total_price() {
                r
            } else {
                best
            }
        })
}
