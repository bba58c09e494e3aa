//! Escalation workflow.
//!
//! Owns report submission and time-driven stage progression. The stage of a
//! report is derived on demand from the timetable and the elapsed time since
//! submission; there are no background timers to race or cancel. Once
//! submitted, a report's timeline runs to the terminal stage.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::error::CoreError;
use crate::escalation::clock::{Clock, SystemClock};
use crate::escalation::report::{IncidentReport, ReportDraft, ReportId};
use crate::escalation::stage::{EscalationStage, Timetable};
use crate::escalation::store::{EscalationState, ReportStore};
use crate::logging::structured::LogContext;

/// Drives incident reports through the escalation chain.
pub struct EscalationWorkflow<C: Clock = SystemClock> {
    clock: C,
    timetable: Timetable,
    store: ReportStore,
    next_id: AtomicU64,
    log_ctx: LogContext,
}

impl EscalationWorkflow<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EscalationWorkflow<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EscalationWorkflow<C> {
    /// Build a workflow around an injected clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_clock_and_timetable(clock, Timetable::default())
    }

    /// Build a workflow with a custom stage timetable.
    pub fn with_clock_and_timetable(clock: C, timetable: Timetable) -> Self {
        let workflow_id = format!("workflow-{}", &Uuid::new_v4().to_string()[..8]);
        Self {
            clock,
            timetable,
            store: ReportStore::new(),
            next_id: AtomicU64::new(1),
            log_ctx: LogContext::new(&workflow_id),
        }
    }

    /// Read access to the report store.
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Accept a report draft and start its escalation timeline.
    ///
    /// A draft without a location is rejected and leaves nothing behind in
    /// the store.
    pub fn submit(
        &self,
        draft: ReportDraft,
    ) -> Result<(IncidentReport, EscalationState), CoreError> {
        let Some(location) = draft.location else {
            log::warn!(
                "{} REPORT_REJECTED reason=missing_location reporter={:?}",
                self.log_ctx,
                draft.reporter_name
            );
            return Err(CoreError::MissingLocation);
        };

        let id = ReportId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let now = self.clock.now();

        let report = IncidentReport {
            id,
            reporter_name: draft.reporter_name,
            disaster_type: draft.disaster_type,
            description: draft.description,
            photo: draft.photo,
            location,
            created_at: now,
        };
        let state = EscalationState {
            report_id: id,
            stage: EscalationStage::Submitted,
            stage_entered_at: now,
        };

        self.store.insert(report.clone(), state);

        let ctx = self.log_ctx.with_report(id);
        log::info!(
            "{} REPORT_SUBMITTED type={} stage={}",
            ctx,
            report.disaster_type.as_str(),
            state.stage.as_str()
        );

        Ok((report, state))
    }

    /// Current escalation state of a report.
    ///
    /// Reflects the furthest stage whose deadline has elapsed at call time.
    /// Missed polls land on the latest stage reached; the state never
    /// regresses and never moves past the terminal stage.
    pub fn current_state(&self, id: ReportId) -> Result<EscalationState, CoreError> {
        let (report, committed) = self
            .store
            .get(id)
            .ok_or(CoreError::ReportNotFound(id))?;

        let elapsed = self.clock.now() - report.created_at;
        let stage = self.timetable.stage_at(elapsed);
        let state = EscalationState {
            report_id: id,
            stage,
            stage_entered_at: self.timetable.entered_at(report.created_at, stage),
        };

        if stage > committed.stage {
            self.commit_advance(&report, state);
        }

        Ok(state)
    }

    /// Commit a derived advance and log each newly entered stage once.
    ///
    /// The store re-checks the forward condition under its write lock, so a
    /// concurrent poll that lost the race sees `previous` already advanced
    /// and logs nothing.
    fn commit_advance(&self, report: &IncidentReport, state: EscalationState) {
        let Some(previous) = self.store.advance(report.id, state) else {
            return;
        };

        let ctx = self.log_ctx.with_report(report.id);
        for stage in EscalationStage::ALL {
            if stage > previous && stage <= state.stage {
                log::info!(
                    "{} STAGE_ADVANCED stage={} entered_at={}",
                    ctx,
                    stage.as_str(),
                    self.timetable
                        .entered_at(report.created_at, stage)
                        .to_rfc3339()
                );
            }
        }
    }
}
