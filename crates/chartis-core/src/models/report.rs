use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::RiskLevel;

/// Severity ranking shared by medication warnings, treatment priorities,
/// and risk-factor impact. Lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WarningType {
    Contraindication,
    Interaction,
    Monitoring,
    DoseAdjustment,
    Allergy,
}

/// One contributing factor behind a risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactor {
    pub factor: String,
    pub detail: String,
    pub impact: Severity,
}

/// A medication-safety finding. Transient output: never persisted and
/// carries no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationWarning {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    /// Medication name, or a pair label like "Apixaban + Aspirin" for
    /// interaction warnings.
    pub medication: String,
    pub message: String,
    pub recommendation: String,
    pub evidence: String,
}

/// A guideline-backed treatment suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentSuggestion {
    pub category: String,
    pub recommendation: String,
    pub details: String,
    /// Fixed per guideline entry, not computed.
    pub confidence: f64,
    pub evidence: String,
    pub priority: Severity,
    pub actions: Vec<String>,
}

/// Output of the narrative summary generator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryReport {
    pub summary: String,
    /// 0.87 plus a uniform jitter in [0, 0.1); the one non-deterministic
    /// value the engines produce.
    pub confidence: f64,
    pub generated_at: jiff::Timestamp,
    pub key_findings: usize,
    pub data_points_analyzed: usize,
}

/// One scored risk dimension (sepsis, readmission, ICU).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    /// Always clamped to [0, 100].
    pub score: u32,
    pub level: RiskLevel,
    pub label: String,
    pub factors: Vec<RiskFactor>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LengthOfStayEstimate {
    pub estimated_days: u32,
    /// Rendered as "low-high days".
    pub range: String,
}

/// Output of the risk scorer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskReport {
    pub sepsis: RiskAssessment,
    pub readmission: RiskAssessment,
    pub icu: RiskAssessment,
    pub length_of_stay: LengthOfStayEstimate,
    pub overall_acuity: RiskLevel,
    pub generated_at: jiff::Timestamp,
}

/// Output of the medication safety checker. `warnings` is sorted by
/// severity, critical first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationSafetyReport {
    pub warnings: Vec<MedicationWarning>,
    pub total_medications: usize,
    pub warnings_count: usize,
    pub critical_count: usize,
    pub generated_at: jiff::Timestamp,
}

/// Output of the treatment suggester. `suggestions` is sorted by
/// priority, critical first.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentReport {
    pub suggestions: Vec<TreatmentSuggestion>,
    pub total_suggestions: usize,
    pub generated_at: jiff::Timestamp,
}
