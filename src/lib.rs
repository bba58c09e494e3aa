//! Suraksha Core - Disaster risk & response decision engine
//!
//! This crate provides the decision core for the Suraksha disaster risk
//! management application. The surrounding layers (map rendering, auth,
//! dashboards) collect raw inputs and render outputs; the logic lives here:
//!
//! 1. **Risk scoring** - environmental measurements to a risk verdict with
//!    display-ready reasons
//! 2. **Shelter ranking** - shelters ordered by great-circle distance from
//!    the user's position
//! 3. **Incident escalation** - time-driven progression of submitted reports
//!    through the administrative chain
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `geo` - coordinate type and haversine distance
//! - `risk` - input coercion and the scoring engine
//! - `shelter` - catalog model and proximity ranking
//! - `escalation` - report store, stage timetable, and workflow
//! - `error` - the caller-facing error taxonomy
//! - `logging` - structured logging with workflow context

pub mod error;
pub mod escalation;
pub mod geo;
pub mod logging;
pub mod risk;
pub mod shelter;

pub use error::CoreError;
pub use escalation::{
    Clock, DisasterType, EscalationStage, EscalationState, EscalationWorkflow, IncidentReport,
    ManualClock, ReportDraft, ReportId, ReportStore, SystemClock, Timetable,
};
pub use geo::{distance_meters, Coordinate};
pub use risk::{assess, RiskAssessment, RiskInput, RiskLevel};
pub use shelter::{rank, RankedShelter, Shelter};
