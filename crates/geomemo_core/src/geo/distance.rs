//! Haversine distance on a spherical Earth.

use crate::model::coordinate::Coordinate;

/// Mean Earth radius used by the spherical approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const METERS_PER_KILOMETER: u64 = 1000;

/// Returns the great-circle distance between `a` and `b`, rounded to the
/// nearest meter.
///
/// Out-of-range input is the caller's responsibility; the result for such
/// input is whatever the formula yields.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> u64 {
    let phi_a = a.lat.to_radians();
    let phi_b = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let sin_half_phi = (delta_phi / 2.0).sin();
    let sin_half_lambda = (delta_lambda / 2.0).sin();
    let h = sin_half_phi * sin_half_phi
        + phi_a.cos() * phi_b.cos() * sin_half_lambda * sin_half_lambda;
    // Rounding can push `h` a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let meters = (EARTH_RADIUS_METERS * central_angle).round();
    if meters.is_finite() && meters > 0.0 {
        meters as u64
    } else {
        0
    }
}

/// Formats a distance as `"<m> m"` below one kilometer, else `"<km> km"` with
/// two decimals.
pub fn format_distance(meters: u64) -> String {
    if meters < METERS_PER_KILOMETER {
        format!("{meters} m")
    } else {
        format!("{:.2} km", meters as f64 / METERS_PER_KILOMETER as f64)
    }
}

/// Formats a coordinate for status lines, e.g. `"51.50500, -0.09000"`.
pub fn format_coordinate(coordinate: Coordinate) -> String {
    coordinate.to_string()
}
