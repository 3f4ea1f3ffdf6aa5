//! Distance and duration estimates for loaders.
//!
//! Schedule sources often carry only the two endpoints of a flight. These
//! helpers derive the great-circle distance and a block time from it, so a
//! loader can fill in `Flight::distance_km` and `Flight::duration` before
//! handing records to the graph.

use chrono::Duration;

use super::Airport;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Typical jet cruise speed in km/h.
const AVERAGE_CRUISE_SPEED_KMH: f64 = 852.0;

/// Flights shorter than this (~250 NM) get the short-haul overhead.
const SHORT_HAUL_KM: f64 = 463.0;

/// Flights shorter than this (~1000 NM) get the medium-haul overhead.
const MEDIUM_HAUL_KM: f64 = 1852.0;

/// Great-circle distance between two airports in kilometres (haversine).
pub fn great_circle_km(from: &Airport, to: &Airport) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimated gate-to-gate duration for a flight of `distance_km`.
///
/// Cruise time at a fixed average speed plus a taxi/climb/descent overhead
/// that shrinks with stage length, rounded to the nearest minute. Negative
/// or NaN distances are treated as zero. Returns `None` when the estimate
/// does not fit in a [`Duration`], as for infinite distances.
pub fn estimate_duration(distance_km: f64) -> Option<Duration> {
    let distance_km = distance_km.max(0.0);

    let overhead_hours = if distance_km < SHORT_HAUL_KM {
        0.5
    } else if distance_km < MEDIUM_HAUL_KM {
        0.4
    } else {
        0.35
    };

    let total_hours = distance_km / AVERAGE_CRUISE_SPEED_KMH + overhead_hours;
    let minutes = (total_hours * 60.0).round();
    if !minutes.is_finite() || minutes >= i64::MAX as f64 {
        return None;
    }
    Duration::try_minutes(minutes as i64)
}
