//! Multi-factor risk scoring: sepsis, 30-day readmission, ICU probability,
//! and estimated length of stay.
//!
//! Scoring is additive: each dimension starts from a base, adds a fixed
//! increment per triggered threshold, and clamps at a cap. Missing vitals
//! never trigger an increment.

use chartis_core::models::{
    LengthOfStayEstimate, PatientRecord, RiskAssessment, RiskFactor, RiskLevel, RiskReport,
    Severity,
};
use tracing::debug;

const SEPSIS_CAP: u32 = 98;
const READMISSION_CAP: u32 = 95;
const ICU_CAP: u32 = 95;

/// Compute the four risk scores for the record.
pub fn predict_risks(record: &PatientRecord) -> RiskReport {
    let patient = &record.patient;
    let age = patient.age();
    let latest = record.latest_vitals();
    let critical_labs = record.critical_labs();
    let er_visits = record.emergency_encounters();

    let heart_rate = latest.and_then(|v| v.heart_rate);
    let systolic = latest.and_then(|v| v.systolic_bp);
    let temperature = latest.and_then(|v| v.temperature);
    let respiratory_rate = latest.and_then(|v| v.respiratory_rate);
    let spo2 = latest.and_then(|v| v.oxygen_saturation);

    // Sepsis: base 10, cap 98. Both heart-rate bands are cumulative.
    let mut sepsis = 10u32;
    if heart_rate.is_some_and(|hr| hr > 90) {
        sepsis += 15;
    }
    if heart_rate.is_some_and(|hr| hr > 110) {
        sepsis += 20;
    }
    if temperature.is_some_and(|t| t > 100.4 || t < 96.8) {
        sepsis += 20;
    }
    if respiratory_rate.is_some_and(|rr| rr > 20) {
        sepsis += 15;
    }
    if systolic.is_some_and(|s| s < 100) {
        sepsis += 20;
    }
    if spo2.is_some_and(|s| s < 92.0) {
        sepsis += 15;
    }
    let infection_marker = record.labs.iter().any(|l| {
        (l.test_name == "WBC" && l.numeric_value().is_some_and(|v| v > 12.0))
            || l.test_name == "Lactate"
            || l.test_name == "Procalcitonin"
    });
    if infection_marker {
        sepsis += 20;
    }
    if age > 65 {
        sepsis += 10;
    }
    let sepsis_score = sepsis.min(SEPSIS_CAP);

    // Readmission: base 15, cap 95.
    let mut readmission = 15u32 + 12 * er_visits.len() as u32;
    if age > 65 {
        readmission += 10;
    }
    if critical_labs.len() > 2 {
        readmission += 15;
    }
    // Medication-count proxy keyed off the lab list, not the medication
    // list. Consumers pin the resulting scores; see the readmission tests.
    if record.labs.len() > 5 {
        readmission += 10;
    }
    if patient.risk_level == RiskLevel::High {
        readmission += 15;
    }
    if patient.risk_level == RiskLevel::Critical {
        readmission += 25;
    }
    let readmission_score = readmission.min(READMISSION_CAP);

    // ICU probability: base 5, cap 95.
    let mut icu = 5u32;
    if sepsis_score > 50 {
        icu += 25;
    }
    if spo2.is_some_and(|s| s < 90.0) {
        icu += 30;
    }
    if systolic.is_some_and(|s| s < 90) {
        icu += 25;
    }
    if critical_labs.len() > 3 {
        icu += 15;
    }
    if patient.risk_level == RiskLevel::Critical {
        icu += 20;
    }
    let icu_score = icu.min(ICU_CAP);

    // Length of stay: point estimate in days plus a range.
    let mut los = 3u32;
    if sepsis_score > 60 {
        los += 4;
    }
    if readmission_score > 50 {
        los += 2;
    }
    if age > 75 {
        los += 2;
    }

    let mut sepsis_factors = Vec::new();
    if let Some(hr) = heart_rate.filter(|hr| *hr > 100) {
        sepsis_factors.push(RiskFactor {
            factor: "Tachycardia".to_string(),
            detail: format!("HR {hr} bpm"),
            impact: Severity::High,
        });
    }
    if let Some(t) = temperature.filter(|t| *t > 100.4) {
        sepsis_factors.push(RiskFactor {
            factor: "Fever".to_string(),
            detail: format!("Temp {t}°F"),
            impact: Severity::High,
        });
    }
    if systolic.is_some_and(|s| s < 100) {
        // latest is present whenever systolic is.
        let bp = latest.map(|v| v.bp_display()).unwrap_or_default();
        sepsis_factors.push(RiskFactor {
            factor: "Hypotension".to_string(),
            detail: format!("BP {bp}"),
            impact: Severity::Critical,
        });
    }
    if infection_marker {
        sepsis_factors.push(RiskFactor {
            factor: "Infection markers elevated".to_string(),
            detail: "WBC/Lactate/Procalcitonin abnormal".to_string(),
            impact: Severity::High,
        });
    }
    if let Some(s) = spo2.filter(|s| *s < 92.0) {
        sepsis_factors.push(RiskFactor {
            factor: "Hypoxemia".to_string(),
            detail: format!("SpO2 {s}%"),
            impact: Severity::High,
        });
    }
    if age > 65 {
        sepsis_factors.push(RiskFactor {
            factor: "Advanced age".to_string(),
            detail: format!("{age} years old"),
            impact: Severity::Medium,
        });
    }

    let mut readmission_factors = Vec::new();
    if er_visits.len() > 1 {
        readmission_factors.push(RiskFactor {
            factor: "Frequent ER visits".to_string(),
            detail: format!("{} visits", er_visits.len()),
            impact: Severity::High,
        });
    }
    if !critical_labs.is_empty() {
        readmission_factors.push(RiskFactor {
            factor: "Critical lab values".to_string(),
            detail: format!("{} critical results", critical_labs.len()),
            impact: Severity::High,
        });
    }
    if matches!(patient.risk_level, RiskLevel::High | RiskLevel::Critical) {
        readmission_factors.push(RiskFactor {
            factor: "High-risk classification".to_string(),
            detail: patient.primary_diagnosis.clone(),
            impact: Severity::High,
        });
    }

    debug!(
        patient_id = %patient.id,
        sepsis = sepsis_score,
        readmission = readmission_score,
        icu = icu_score,
        los_days = los,
        "risk scores computed"
    );

    RiskReport {
        sepsis: RiskAssessment {
            score: sepsis_score,
            level: risk_level(sepsis_score),
            label: "Sepsis Risk".to_string(),
            factors: sepsis_factors,
            recommendation: if sepsis_score > 50 {
                "Immediate sepsis workup recommended. Consider blood cultures, lactate, and broad-spectrum antibiotics."
            } else {
                "Continue monitoring. No immediate sepsis concern."
            }
            .to_string(),
        },
        readmission: RiskAssessment {
            score: readmission_score,
            level: risk_level(readmission_score),
            label: "30-Day Readmission".to_string(),
            factors: readmission_factors,
            recommendation: if readmission_score > 50 {
                "High readmission risk. Ensure comprehensive discharge planning, follow-up within 7 days, and medication reconciliation."
            } else {
                "Standard discharge planning appropriate."
            }
            .to_string(),
        },
        icu: RiskAssessment {
            score: icu_score,
            level: risk_level(icu_score),
            label: "ICU Probability".to_string(),
            // No factor breakdown is produced for the ICU dimension.
            factors: Vec::new(),
            recommendation: if icu_score > 40 {
                "Consider ICU-level monitoring. Alert rapid response team."
            } else {
                "Floor-level care appropriate."
            }
            .to_string(),
        },
        length_of_stay: LengthOfStayEstimate {
            estimated_days: los,
            range: format!("{}-{} days", los.saturating_sub(2).max(1), los + 3),
        },
        overall_acuity: risk_level(sepsis_score.max(readmission_score).max(icu_score)),
        generated_at: jiff::Timestamp::now(),
    }
}

/// Bucket a 0-100 score into a risk level.
fn risk_level(score: u32) -> RiskLevel {
    if score >= 70 {
        RiskLevel::Critical
    } else if score >= 50 {
        RiskLevel::High
    } else if score >= 30 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
