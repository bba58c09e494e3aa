//! Structured logging utilities.
//!
//! Provides context-aware logging with the workflow id and report id
//! included in every log message.

use std::fmt;

/// Logging context for a workflow instance.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub workflow_id: String,
    pub report_id: Option<String>,
}

impl LogContext {
    pub fn new(workflow_id: &str) -> Self {
        Self {
            workflow_id: workflow_id.to_string(),
            report_id: None,
        }
    }

    pub fn with_report(&self, report: impl fmt::Display) -> Self {
        Self {
            workflow_id: self.workflow_id.clone(),
            report_id: Some(report.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.report_id {
            Some(rid) => write!(f, "[workflow={}] [report={}]", self.workflow_id, rid),
            None => write!(f, "[workflow={}]", self.workflow_id),
        }
    }
}
