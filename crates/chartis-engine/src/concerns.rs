//! Key-concern identification shared by the summary generator and the
//! chat responder.

use chartis_core::models::PatientRecord;

/// Emitted when no concern rule fires.
pub const NO_CONCERNS_PLACEHOLDER: &str =
    "No critical concerns identified at this time. Continue routine monitoring.";

/// Identify clinical concerns from the record.
///
/// Rules are additive and evaluated in a fixed order, so the returned list
/// is reproducible for identical input. If nothing fires, the list holds
/// exactly [`NO_CONCERNS_PLACEHOLDER`].
pub fn identify_concerns(record: &PatientRecord) -> Vec<String> {
    let mut concerns = Vec::new();

    let critical_labs = record.critical_labs();
    let er_visits = record.emergency_encounters();
    let active_meds = record.active_medications();
    let latest = record.latest_vitals();

    if !critical_labs.is_empty() {
        let listed = critical_labs
            .iter()
            .take(3)
            .map(|l| format!("{} {}", l.test_name, l.value))
            .collect::<Vec<_>>()
            .join(", ");
        concerns.push(format!(
            "{} critical lab value(s): {listed}",
            critical_labs.len()
        ));
    }

    if er_visits.len() >= 2 {
        concerns.push(format!(
            "{} ER visits indicate frequent acute care utilization",
            er_visits.len()
        ));
    }

    if let Some(vitals) = latest {
        if let Some(spo2) = vitals.oxygen_saturation {
            if spo2 < 92.0 {
                concerns.push(format!(
                    "Hypoxemia (SpO2 {spo2}%) — may require supplemental oxygen"
                ));
            }
        }
        if let Some(systolic) = vitals.systolic_bp {
            if systolic > 160 {
                concerns.push(format!(
                    "Uncontrolled hypertension (BP {})",
                    vitals.bp_display()
                ));
            }
        }
        if let Some(hr) = vitals.heart_rate {
            if hr > 100 {
                concerns.push(format!("Tachycardia (HR {hr}) — evaluate underlying cause"));
            }
        }
    }

    if active_meds.len() > 5 {
        concerns.push(format!(
            "Polypharmacy ({} active medications) — review for deprescribing opportunities",
            active_meds.len()
        ));
    }

    let on_metformin = active_meds
        .iter()
        .any(|m| m.name.to_lowercase().contains("metformin"));
    if on_metformin {
        if let Some(egfr) = record.find_lab("eGFR") {
            if egfr.numeric_value().is_some_and(|v| v < 30.0) {
                concerns.push(format!(
                    "Metformin contraindicated with eGFR {} — URGENT: discontinue",
                    egfr.value
                ));
            }
        }
    }

    if concerns.is_empty() {
        concerns.push(NO_CONCERNS_PLACEHOLDER.to_string());
    }

    concerns
}
