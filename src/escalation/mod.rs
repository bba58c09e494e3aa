//! Incident escalation module.
//!
//! Drives a submitted incident report through the administrative chain:
//! - `report` - report draft and record models
//! - `stage` - the stage enum and its anchored timetable
//! - `clock` - injectable time source
//! - `store` - readers-writers map from report id to state
//! - `workflow` - submission and state queries

pub mod clock;
pub mod report;
pub mod stage;
pub mod store;
pub mod workflow;

pub use clock::*;
pub use report::*;
pub use stage::*;
pub use store::*;
pub use workflow::*;
