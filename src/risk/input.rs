//! Risk input coercion.
//!
//! The UI submits free-form fields; a blank or malformed value is a neutral
//! score contribution, not an error. Coercion lives here, apart from the
//! scoring logic, so a strict validating constructor could replace it
//! without touching the engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Environmental measurements for one risk assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub rainfall_mm: f64,
    pub elevation_m: f64,
    pub distance_to_water_km: f64,
    pub has_disaster_history: bool,
}

impl RiskInput {
    /// Build an input from loosely-typed caller data.
    ///
    /// Reads `rainfall`, `elevation`, `distance_to_water`, and `history`.
    /// Numbers may arrive as JSON numbers or numeric strings; anything
    /// missing or non-numeric coerces to 0. History accepts booleans or
    /// yes/no style strings (the report form submits `"Yes"`/`"No"`).
    pub fn from_value(value: &Value) -> Self {
        Self {
            rainfall_mm: coerce_number(value.get("rainfall")),
            elevation_m: coerce_number(value.get("elevation")),
            distance_to_water_km: coerce_number(value.get("distance_to_water")),
            has_disaster_history: coerce_flag(value.get("history")),
        }
    }
}

/// Missing or non-numeric values score as 0.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Missing or unrecognized values mean "no known history".
fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes")
        }
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0).unwrap_or(false),
        _ => false,
    }
}
