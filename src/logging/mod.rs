//! Structured logging with workflow context.
//!
//! Provides the log context type and the env_logger initializer. Every
//! escalation decision point is logged with the workflow and report ids for
//! correlation.

pub mod structured;

pub use structured::*;

/// Initialize the process-wide logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
