//! Medication safety checks: per-medication contraindication rules,
//! allergy cross-checks, and cross-medication interactions.
//!
//! Rules are small pure functions evaluated in a fixed order: the
//! per-medication table runs for each active medication, the allergy check
//! follows, and the interaction rules run once over the active set. The
//! final list is sorted by severity with a stable sort, so ties keep
//! emission order.

use chartis_core::models::{
    Medication, MedicationSafetyReport, MedicationWarning, Patient, PatientRecord, Severity,
    WarningType,
};
use tracing::info;

type MedRule = fn(&Medication, &PatientRecord) -> Option<MedicationWarning>;

/// Per-medication rules, in evaluation order.
const MED_RULES: &[MedRule] = &[
    metformin_renal_contraindication,
    nsaid_renal_contraindication,
    insulin_glycemic_adjustment,
    raas_hyperkalemia_monitoring,
];

/// Run every safety rule against the record's active medications.
pub fn check_medications(record: &PatientRecord) -> MedicationSafetyReport {
    let active = record.active_medications();
    let mut warnings = Vec::new();

    for &med in &active {
        for rule in MED_RULES {
            if let Some(warning) = rule(med, record) {
                warnings.push(warning);
            }
        }
        if let Some(warning) = allergy_conflict(&record.patient, med) {
            warnings.push(warning);
        }
    }

    warnings.extend(interaction_warnings(&active, record));
    warnings.sort_by_key(|w| w.severity.rank());

    let critical_count = warnings
        .iter()
        .filter(|w| w.severity == Severity::Critical)
        .count();

    info!(
        patient_id = %record.patient.id,
        medications = active.len(),
        warnings = warnings.len(),
        critical = critical_count,
        "medication safety check complete"
    );

    MedicationSafetyReport {
        total_medications: active.len(),
        warnings_count: warnings.len(),
        critical_count,
        warnings,
        generated_at: jiff::Timestamp::now(),
    }
}

fn name_contains(med: &Medication, needles: &[&str]) -> bool {
    let name = med.name.to_lowercase();
    needles.iter().any(|n| name.contains(n))
}

/// Metformin with an eGFR below 30 mL/min.
fn metformin_renal_contraindication(
    med: &Medication,
    record: &PatientRecord,
) -> Option<MedicationWarning> {
    if !name_contains(med, &["metformin"]) {
        return None;
    }
    let egfr = record.find_lab("eGFR")?;
    if egfr.numeric_value()? >= 30.0 {
        return None;
    }
    Some(MedicationWarning {
        severity: Severity::Critical,
        warning_type: WarningType::Contraindication,
        medication: med.name.clone(),
        message: format!(
            "CONTRAINDICATED: {} with eGFR {} mL/min (< 30). High risk of lactic acidosis. Discontinue immediately.",
            med.name, egfr.value
        ),
        recommendation: "Switch to insulin or DPP-4 inhibitor adjusted for renal function."
            .to_string(),
        evidence: "FDA Black Box Warning; KDIGO Guidelines 2024".to_string(),
    })
}

/// NSAIDs with an elevated creatinine.
fn nsaid_renal_contraindication(
    med: &Medication,
    record: &PatientRecord,
) -> Option<MedicationWarning> {
    if !name_contains(med, &["ibuprofen", "naproxen", "nsaid"]) {
        return None;
    }
    let creatinine = record.find_lab("Creatinine")?;
    if creatinine.numeric_value()? <= 1.5 {
        return None;
    }
    Some(MedicationWarning {
        severity: Severity::High,
        warning_type: WarningType::Contraindication,
        medication: med.name.clone(),
        message: format!(
            "AVOID: {} with elevated creatinine ({} mg/dL). Risk of acute kidney injury.",
            med.name, creatinine.value
        ),
        recommendation: "Use acetaminophen for pain management.".to_string(),
        evidence: "AKI Prevention Guidelines".to_string(),
    })
}

/// Insulin with glucose still above 200 mg/dL.
fn insulin_glycemic_adjustment(
    med: &Medication,
    record: &PatientRecord,
) -> Option<MedicationWarning> {
    if !name_contains(med, &["insulin"]) {
        return None;
    }
    let glucose = record.find_lab_containing("glucose")?;
    if glucose.numeric_value()? <= 200.0 {
        return None;
    }
    Some(MedicationWarning {
        severity: Severity::Medium,
        warning_type: WarningType::DoseAdjustment,
        medication: med.name.clone(),
        message: format!(
            "Glucose remains elevated ({} mg/dL) despite {} {}. Consider dose adjustment.",
            glucose.value, med.name, med.dosage
        ),
        recommendation: "Review insulin regimen. Consider endocrinology consultation.".to_string(),
        evidence: "ADA Standards of Care 2025".to_string(),
    })
}

/// ACE inhibitor or ARB with potassium above 5.2 mEq/L.
fn raas_hyperkalemia_monitoring(
    med: &Medication,
    record: &PatientRecord,
) -> Option<MedicationWarning> {
    if !name_contains(med, &["lisinopril", "valsartan", "enalapril"]) {
        return None;
    }
    let potassium = record.find_lab("Potassium")?;
    if potassium.numeric_value()? <= 5.2 {
        return None;
    }
    Some(MedicationWarning {
        severity: Severity::High,
        warning_type: WarningType::Monitoring,
        medication: med.name.clone(),
        message: format!(
            "Hyperkalemia risk: K+ {} mEq/L with {}. Monitor closely.",
            potassium.value, med.name
        ),
        recommendation:
            "Consider dose reduction. Check potassium in 48-72 hours. Consider potassium binder if persistent."
                .to_string(),
        evidence: "ACC/AHA Heart Failure Guidelines".to_string(),
    })
}

/// Documented allergy matching the medication name, including the
/// sulfa → sulfamethoxazole cross-reaction.
fn allergy_conflict(patient: &Patient, med: &Medication) -> Option<MedicationWarning> {
    let documented = patient.allergies.as_deref()?;
    if documented.is_empty() {
        return None;
    }
    let allergies = documented.to_lowercase();
    let med_name = med.name.to_lowercase();

    let direct = allergies.contains(&med_name);
    let sulfa = allergies.contains("sulfa") && med_name.contains("sulfamethoxazole");
    if !direct && !sulfa {
        return None;
    }
    Some(MedicationWarning {
        severity: Severity::Critical,
        warning_type: WarningType::Allergy,
        medication: med.name.clone(),
        message: format!(
            "ALLERGY ALERT: Patient has documented allergy to {documented}. {} may cross-react.",
            med.name
        ),
        recommendation: "Verify allergy history. Use alternative medication.".to_string(),
        evidence: "Patient allergy record".to_string(),
    })
}

/// Cross-medication interaction rules, evaluated once per call over the
/// active set.
fn interaction_warnings(
    active: &[&Medication],
    record: &PatientRecord,
) -> Vec<MedicationWarning> {
    let names: Vec<String> = active.iter().map(|m| m.name.to_lowercase()).collect();
    let on = |needle: &str| names.iter().any(|n| n.contains(needle));

    let mut warnings = Vec::new();

    if on("apixaban") && on("aspirin") {
        warnings.push(MedicationWarning {
            severity: Severity::Medium,
            warning_type: WarningType::Interaction,
            medication: "Apixaban + Aspirin".to_string(),
            message: "Dual antithrombotic therapy increases bleeding risk. Verify clinical indication."
                .to_string(),
            recommendation:
                "Assess bleeding risk vs thromboembolic benefit. Consider discontinuing aspirin if not indicated."
                    .to_string(),
            evidence: "AUGUSTUS Trial".to_string(),
        });
    }

    if on("spironolactone") && (on("lisinopril") || on("valsartan")) {
        let message = match record.find_lab("Potassium") {
            Some(potassium) => format!(
                "Combined use increases hyperkalemia risk. Current K+: {}",
                potassium.value
            ),
            None => "Combined use increases hyperkalemia risk. Monitor potassium closely."
                .to_string(),
        };
        warnings.push(MedicationWarning {
            severity: Severity::High,
            warning_type: WarningType::Interaction,
            medication: "Spironolactone + ACEi/ARB".to_string(),
            message,
            recommendation:
                "Monitor potassium every 1-2 weeks initially. Dietary potassium restriction."
                    .to_string(),
            evidence: "RALES Trial Safety Data".to_string(),
        });
    }

    warnings
}
