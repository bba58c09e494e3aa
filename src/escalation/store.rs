//! Report store.
//!
//! The shared map from report id to (report, escalation state). Reads are
//! open to any caller; writes are confined to the workflow (single-writer,
//! multi-reader).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::escalation::report::{IncidentReport, ReportId};
use crate::escalation::stage::EscalationStage;

/// Escalation progress of one report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscalationState {
    pub report_id: ReportId,
    pub stage: EscalationStage,
    pub stage_entered_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoreEntry {
    report: IncidentReport,
    state: EscalationState,
}

/// In-memory store mapping report ids to reports and their committed state.
///
/// Durability is scoped to the process lifetime; persistence across restarts
/// is an external concern.
#[derive(Debug, Default)]
pub struct ReportStore {
    entries: RwLock<HashMap<ReportId, StoreEntry>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains(&self, id: ReportId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Report and last committed state for `id`.
    pub fn get(&self, id: ReportId) -> Option<(IncidentReport, EscalationState)> {
        self.entries
            .read()
            .get(&id)
            .map(|entry| (entry.report.clone(), entry.state))
    }

    /// All reports with their last committed state, in submission order.
    pub fn snapshot(&self) -> Vec<(IncidentReport, EscalationState)> {
        let mut all: Vec<_> = self
            .entries
            .read()
            .values()
            .map(|entry| (entry.report.clone(), entry.state))
            .collect();
        all.sort_by_key(|(report, _)| report.id);
        all
    }

    pub(crate) fn insert(&self, report: IncidentReport, state: EscalationState) {
        self.entries
            .write()
            .insert(report.id, StoreEntry { report, state });
    }

    /// Commit a stage advance if `new_state` is still ahead of the stored
    /// state, and return the stage held before the commit.
    ///
    /// The forward check runs again under the write lock, so concurrent
    /// polls that derived the same advance commit it exactly once.
    pub(crate) fn advance(
        &self,
        id: ReportId,
        new_state: EscalationState,
    ) -> Option<EscalationStage> {
        let mut entries = self.entries.write();
        let entry = entries.get_mut(&id)?;
        let previous = entry.state.stage;
        if new_state.stage > previous {
            entry.state = new_state;
        }
        Some(previous)
    }
}
