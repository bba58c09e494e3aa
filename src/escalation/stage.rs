//! Escalation stages and the stage timetable.
//!
//! Stages only move forward. Each stage after `Submitted` has its own
//! deadline measured from the submission instant - the deadlines are
//! anchored, not chained from the previous stage, which changes observable
//! timing under slow polling.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// One discrete step in the administrative escalation chain.
///
/// `NdrfDispatched` is terminal; no transitions occur after it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EscalationStage {
    Submitted,
    GramPanchayatVerified,
    TalukaEscalated,
    DistrictNotified,
    NdrfDispatched,
}

impl EscalationStage {
    /// All stages in forward order.
    pub const ALL: [EscalationStage; 5] = [
        EscalationStage::Submitted,
        EscalationStage::GramPanchayatVerified,
        EscalationStage::TalukaEscalated,
        EscalationStage::DistrictNotified,
        EscalationStage::NdrfDispatched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EscalationStage::Submitted => "submitted",
            EscalationStage::GramPanchayatVerified => "gram_panchayat_verified",
            EscalationStage::TalukaEscalated => "taluka_escalated",
            EscalationStage::DistrictNotified => "district_notified",
            EscalationStage::NdrfDispatched => "ndrf_dispatched",
        }
    }

    /// Display label shown in the escalation tracker.
    pub fn label(&self) -> &'static str {
        match self {
            EscalationStage::Submitted => "Report Submitted",
            EscalationStage::GramPanchayatVerified => "Gram Panchayat Verified",
            EscalationStage::TalukaEscalated => "Taluka Level Escalated",
            EscalationStage::DistrictNotified => "District Administration Notified",
            EscalationStage::NdrfDispatched => "NDRF Dispatched",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EscalationStage::NdrfDispatched)
    }
}

/// Per-stage deadlines anchored at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    offsets: [TimeDelta; 4],
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            offsets: [
                TimeDelta::seconds(2),
                TimeDelta::seconds(5),
                TimeDelta::seconds(8),
                TimeDelta::seconds(11),
            ],
        }
    }
}

impl Timetable {
    /// Build a timetable from explicit offsets, one per stage after
    /// `Submitted`, each measured from the submission instant.
    pub fn new(offsets: [TimeDelta; 4]) -> Self {
        Self { offsets }
    }

    /// Offset from submission at which `stage` is entered.
    pub fn entry_offset(&self, stage: EscalationStage) -> TimeDelta {
        match stage {
            EscalationStage::Submitted => TimeDelta::zero(),
            _ => self.offsets[stage as usize - 1],
        }
    }

    /// The furthest stage whose deadline has elapsed, `elapsed` after
    /// submission. Never past the terminal stage.
    pub fn stage_at(&self, elapsed: TimeDelta) -> EscalationStage {
        let mut current = EscalationStage::Submitted;
        for (stage, offset) in EscalationStage::ALL[1..].iter().zip(self.offsets.iter()) {
            if elapsed >= *offset {
                current = *stage;
            }
        }
        current
    }

    /// Absolute instant at which `stage` is entered, for a report submitted
    /// at `t0`.
    pub fn entered_at(&self, t0: DateTime<Utc>, stage: EscalationStage) -> DateTime<Utc> {
        t0 + self.entry_offset(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_at_every_boundary() {
        let timetable = Timetable::default();
        let cases = [
            (0, EscalationStage::Submitted),
            (1, EscalationStage::Submitted),
            (2, EscalationStage::GramPanchayatVerified),
            (4, EscalationStage::GramPanchayatVerified),
            (5, EscalationStage::TalukaEscalated),
            (7, EscalationStage::TalukaEscalated),
            (8, EscalationStage::DistrictNotified),
            (10, EscalationStage::DistrictNotified),
            (11, EscalationStage::NdrfDispatched),
            (3600, EscalationStage::NdrfDispatched),
        ];
        for (secs, expected) in cases {
            assert_eq!(
                timetable.stage_at(TimeDelta::seconds(secs)),
                expected,
                "at +{}s",
                secs
            );
        }
    }

    #[test]
    fn test_stage_at_just_before_a_deadline() {
        let timetable = Timetable::default();
        assert_eq!(
            timetable.stage_at(TimeDelta::milliseconds(1999)),
            EscalationStage::Submitted
        );
        assert_eq!(
            timetable.stage_at(TimeDelta::milliseconds(10999)),
            EscalationStage::DistrictNotified
        );
    }

    #[test]
    fn test_negative_elapsed_stays_submitted() {
        let timetable = Timetable::default();
        assert_eq!(
            timetable.stage_at(TimeDelta::seconds(-5)),
            EscalationStage::Submitted
        );
    }

    #[test]
    fn test_entry_offsets_are_anchored() {
        let timetable = Timetable::default();
        assert_eq!(
            timetable.entry_offset(EscalationStage::Submitted),
            TimeDelta::zero()
        );
        assert_eq!(
            timetable.entry_offset(EscalationStage::GramPanchayatVerified),
            TimeDelta::seconds(2)
        );
        assert_eq!(
            timetable.entry_offset(EscalationStage::NdrfDispatched),
            TimeDelta::seconds(11)
        );
    }

    #[test]
    fn test_stage_order_and_terminal() {
        for pair in EscalationStage::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(EscalationStage::NdrfDispatched.is_terminal());
        assert!(!EscalationStage::DistrictNotified.is_terminal());
    }

    #[test]
    fn test_labels_match_the_tracker() {
        assert_eq!(EscalationStage::Submitted.label(), "Report Submitted");
        assert_eq!(
            EscalationStage::TalukaEscalated.label(),
            "Taluka Level Escalated"
        );
        assert_eq!(EscalationStage::NdrfDispatched.as_str(), "ndrf_dispatched");
    }
}
