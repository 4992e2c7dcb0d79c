use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One set of vital sign measurements.
///
/// Every measurement is optional; a partial reading is normal (e.g. a
/// triage entry with only blood pressure). Threshold rules treat a missing
/// field as "does not trigger".
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    pub id: Uuid,
    pub patient_id: String,
    pub date: String,
    pub heart_rate: Option<i32>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    /// Degrees Fahrenheit.
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<i32>,
    /// Percent.
    pub oxygen_saturation: Option<f64>,
    /// Pounds.
    pub weight: Option<f64>,
}

impl Vitals {
    /// "systolic/diastolic" with "--" standing in for a missing half.
    pub fn bp_display(&self) -> String {
        let sys = self
            .systolic_bp
            .map_or_else(|| "--".to_string(), |v| v.to_string());
        let dia = self
            .diastolic_bp
            .map_or_else(|| "--".to_string(), |v| v.to_string());
        format!("{sys}/{dia}")
    }
}
