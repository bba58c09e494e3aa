//! Incident report models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Identifier assigned to a report at submission.
///
/// Ids are a monotonic per-workflow sequence; sorting by id is sorting by
/// submission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReportId(u64);

impl ReportId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report-{}", self.0)
    }
}

/// Category of a reported incident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisasterType {
    #[default]
    Flood,
    Earthquake,
    Fire,
    Landslide,
    Cyclone,
    Other,
}

impl DisasterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::Flood => "flood",
            DisasterType::Earthquake => "earthquake",
            DisasterType::Fire => "fire",
            DisasterType::Landslide => "landslide",
            DisasterType::Cyclone => "cyclone",
            DisasterType::Other => "other",
        }
    }
}

/// Caller-supplied report fields, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub reporter_name: String,
    pub disaster_type: DisasterType,
    pub description: String,
    /// Opaque reference to photo evidence; carried through unmodified.
    pub photo: Option<String>,
    pub location: Option<Coordinate>,
}

/// An accepted incident report.
///
/// Immutable after creation; only the escalation state attached to it moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: ReportId,
    pub reporter_name: String,
    pub disaster_type: DisasterType,
    pub description: String,
    pub photo: Option<String>,
    pub location: Coordinate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_ids_order_by_sequence() {
        let first = ReportId::new(1);
        let second = ReportId::new(2);
        assert!(first < second);
        assert_eq!(first.value(), 1);
        assert_eq!(format!("{}", second), "report-2");
    }

    #[test]
    fn test_default_draft_is_a_flood_without_location() {
        let draft = ReportDraft::default();
        assert_eq!(draft.disaster_type, DisasterType::Flood);
        assert!(draft.location.is_none());
        assert!(draft.photo.is_none());
    }
}
