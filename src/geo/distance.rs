//! Great-circle distance.
//!
//! Haversine formula on a spherical Earth. No side effects and no error
//! conditions; any finite input pair is valid.

use crate::geo::coordinate::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters.
///
/// Symmetric, and exactly 0 for identical points. The haversine term is
/// clamped to `[0, 1]` before the inverse trigonometric step; floating-point
/// overshoot near antipodal points would otherwise leave the domain.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
