//! Distance calculations on Earth's surface.
//!
//! Uses the haversine formula on a sphere of mean Earth radius.

use geo::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the haversine distance between two points in meters
///
/// Deterministic for finite inputs; a non-finite coordinate propagates as
/// NaN, so callers validate fixes first.
pub fn haversine_distance_m(p1: Point, p2: Point) -> f64 {
    let phi1 = p1.y().to_radians();
    let phi2 = p2.y().to_radians();
    let delta_phi = (p2.y() - p1.y()).to_radians();
    let delta_lambda = (p2.x() - p1.x()).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
