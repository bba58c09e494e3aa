//! Error taxonomy for the decision core.
//!
//! Only the escalation workflow can fail; the geodesic, risk, and ranking
//! functions are total. Nothing is retried internally.

use thiserror::Error;

use crate::escalation::ReportId;

/// Errors surfaced directly to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A report draft was submitted without a geolocation attached.
    #[error("report draft has no location attached")]
    MissingLocation,

    /// The queried report id is not known to this workflow.
    #[error("unknown report: {0}")]
    ReportNotFound(ReportId),
}
