//! WGS84 coordinate value type.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees (WGS84).
///
/// No range validation is performed upstream; any finite pair is a valid
/// input to the distance function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
