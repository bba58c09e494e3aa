//! Shelter proximity ranking.
//!
//! "Position unavailable" is a first-class state, not a fault: without an
//! origin the catalog order is kept and no distance is computed.

use serde::Serialize;

use crate::geo::{distance_meters, Coordinate};
use crate::shelter::catalog::Shelter;

/// A shelter paired with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedShelter {
    pub shelter: Shelter,
    pub distance_m: Option<f64>,
}

impl RankedShelter {
    /// Distance in kilometers, when an origin was available.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_m.map(|m| m / 1000.0)
    }
}

/// Rank shelters by ascending distance from `origin`.
///
/// Ties keep the catalog's relative order; the input slice is never mutated.
/// An empty catalog yields an empty vec.
pub fn rank(catalog: &[Shelter], origin: Option<Coordinate>) -> Vec<RankedShelter> {
    let Some(origin) = origin else {
        log::debug!("SHELTER_RANK origin=absent shelters={}", catalog.len());
        return catalog
            .iter()
            .map(|shelter| RankedShelter {
                shelter: shelter.clone(),
                distance_m: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedShelter> = catalog
        .iter()
        .map(|shelter| RankedShelter {
            shelter: shelter.clone(),
            distance_m: Some(distance_meters(origin, shelter.location)),
        })
        .collect();

    // Vec::sort_by is stable, which is what preserves catalog order on ties.
    ranked.sort_by(|a, b| {
        let da = a.distance_m.unwrap_or(f64::INFINITY);
        let db = b.distance_m.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });

    log::debug!("SHELTER_RANK origin=present shelters={}", ranked.len());

    ranked
}
