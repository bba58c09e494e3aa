//! Risk scoring engine.
//!
//! Pure, deterministic mapping from measurements to a risk verdict. The
//! branches run in a fixed order so the reason list is reproducible; callers
//! display the reasons verbatim, in order.

use serde::{Deserialize, Serialize};

use crate::risk::input::RiskInput;

pub const REASON_HEAVY_RAINFALL: &str = "Heavy rainfall detected (>100mm).";
pub const REASON_LOW_ELEVATION: &str = "Low elevation area (<10m). High flood risk.";
pub const REASON_NEAR_WATER: &str = "Very close to water body (<1km).";
pub const REASON_DISASTER_HISTORY: &str = "History of disasters in this area.";

/// Qualitative risk verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    /// Verdict mapping: score >= 6 is High, >= 3 is Moderate, else Low.
    fn from_score(score: u32) -> Self {
        if score >= 6 {
            RiskLevel::High
        } else if score >= 3 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Result of one risk assessment, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u32,
    pub reasons: Vec<String>,
}

impl RiskAssessment {
    /// An empty reason list means conditions appear stable, not an error.
    pub fn is_stable(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Assess risk from environmental measurements.
///
/// # Scoring
/// 1. Rainfall: >100mm adds 3 with a reason; >50mm adds 1 silently.
/// 2. Elevation: <10m adds 3 with a reason; <50m adds 1 silently.
/// 3. Distance to water: <1km adds 3 with a reason; <5km adds 1 silently.
/// 4. Disaster history adds 2 with a reason.
///
/// The silent branches affect the score but emit no reason text.
pub fn assess(input: &RiskInput) -> RiskAssessment {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    if input.rainfall_mm > 100.0 {
        score += 3;
        reasons.push(REASON_HEAVY_RAINFALL.to_string());
    } else if input.rainfall_mm > 50.0 {
        score += 1;
    }

    if input.elevation_m < 10.0 {
        score += 3;
        reasons.push(REASON_LOW_ELEVATION.to_string());
    } else if input.elevation_m < 50.0 {
        score += 1;
    }

    if input.distance_to_water_km < 1.0 {
        score += 3;
        reasons.push(REASON_NEAR_WATER.to_string());
    } else if input.distance_to_water_km < 5.0 {
        score += 1;
    }

    if input.has_disaster_history {
        score += 2;
        reasons.push(REASON_DISASTER_HISTORY.to_string());
    }

    let level = RiskLevel::from_score(score);

    log::info!(
        "RISK_ASSESSED level={} score={} reasons={}",
        level.as_str(),
        score,
        reasons.len()
    );

    RiskAssessment {
        level,
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rainfall: f64, elevation: f64, water: f64, history: bool) -> RiskInput {
        RiskInput {
            rainfall_mm: rainfall,
            elevation_m: elevation,
            distance_to_water_km: water,
            has_disaster_history: history,
        }
    }

    #[test]
    fn test_all_branches_fire_in_order() {
        let result = assess(&input(150.0, 5.0, 0.5, true));
        assert_eq!(result.score, 11);
        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(
            result.reasons,
            vec![
                REASON_HEAVY_RAINFALL,
                REASON_LOW_ELEVATION,
                REASON_NEAR_WATER,
                REASON_DISASTER_HISTORY,
            ]
        );
        assert!(!result.is_stable());
    }

    #[test]
    fn test_stable_conditions_score_zero() {
        let result = assess(&input(0.0, 100.0, 10.0, false));
        assert_eq!(result.score, 0);
        assert_eq!(result.level, RiskLevel::Low);
        assert!(result.reasons.is_empty());
        assert!(result.is_stable());
    }

    #[test]
    fn test_silent_branches_score_without_reasons() {
        let result = assess(&input(60.0, 30.0, 3.0, false));
        assert_eq!(result.score, 3);
        assert_eq!(result.level, RiskLevel::Moderate);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly 100mm is not "heavy"; exactly 50mm is not even the silent +1.
        let result = assess(&input(100.0, 100.0, 10.0, false));
        assert_eq!(result.score, 1);
        let result = assess(&input(50.0, 100.0, 10.0, false));
        assert_eq!(result.score, 0);

        // Exactly 10m elevation and exactly 1km to water take the silent branch.
        let result = assess(&input(0.0, 10.0, 1.0, false));
        assert_eq!(result.score, 2);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_verdict_boundaries() {
        // History alone (+2) stays Low.
        let result = assess(&input(0.0, 100.0, 10.0, true));
        assert_eq!(result.score, 2);
        assert_eq!(result.level, RiskLevel::Low);

        // One +3 branch reaches Moderate.
        let result = assess(&input(150.0, 100.0, 10.0, false));
        assert_eq!(result.score, 3);
        assert_eq!(result.level, RiskLevel::Moderate);

        // Two +3 branches reach High.
        let result = assess(&input(150.0, 5.0, 10.0, false));
        assert_eq!(result.score, 6);
        assert_eq!(result.level, RiskLevel::High);
    }

    #[test]
    fn test_coerced_zero_input_flags_elevation_and_water() {
        // A fully-blank form coerces to zeros: elevation 0 and distance 0
        // both fire their high-risk branches.
        let result = assess(&RiskInput::default());
        assert_eq!(result.score, 6);
        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(result.reasons, vec![REASON_LOW_ELEVATION, REASON_NEAR_WATER]);
    }
}
