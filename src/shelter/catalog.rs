//! Shelter catalog models.
//!
//! The catalog is static reference data owned by an external data store;
//! the core only reads it.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A known shelter.
///
/// Deserializes from the flat catalog shape
/// `{ "id": 1, "name": "...", "capacity": 200, "lat": 19.0, "lng": 72.8 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: u32,
    pub name: String,
    pub capacity: u32,
    #[serde(flatten)]
    pub location: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_catalog_entry() {
        let shelter: Shelter = serde_json::from_str(
            r#"{"id": 1, "name": "Community Hall", "capacity": 200, "lat": 19.076, "lng": 72.8777}"#,
        )
        .unwrap();
        assert_eq!(shelter.id, 1);
        assert_eq!(shelter.name, "Community Hall");
        assert_eq!(shelter.capacity, 200);
        assert_eq!(shelter.location, Coordinate::new(19.076, 72.8777));
    }
}
