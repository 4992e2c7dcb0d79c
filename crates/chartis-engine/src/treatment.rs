//! Guideline-based treatment suggestions.
//!
//! The guideline table is an ordered slice of independent rules; zero or
//! more may fire for a record. Matching is case-insensitive substring
//! containment over the primary diagnosis, except the preventive-care
//! entry, which keys off age alone. The result is sorted by priority with
//! a stable sort, so ties keep table order.

use chartis_core::models::{PatientRecord, Severity, TreatmentReport, TreatmentSuggestion};
use tracing::debug;

type GuidelineRule = fn(&PatientRecord) -> Option<TreatmentSuggestion>;

const GUIDELINES: &[GuidelineRule] = &[
    glycemic_management,
    renal_protection,
    heart_failure_gdmt,
    copd_step_up,
    sle_monitoring,
    liver_disease,
    preventive_care,
];

/// Produce guideline-backed treatment suggestions for the record.
pub fn suggest_treatments(record: &PatientRecord) -> TreatmentReport {
    let mut suggestions: Vec<TreatmentSuggestion> = GUIDELINES
        .iter()
        .filter_map(|rule| rule(record))
        .collect();
    suggestions.sort_by_key(|s| s.priority.rank());

    debug!(
        patient_id = %record.patient.id,
        suggestions = suggestions.len(),
        "treatment suggestions generated"
    );

    TreatmentReport {
        total_suggestions: suggestions.len(),
        suggestions,
        generated_at: jiff::Timestamp::now(),
    }
}

fn diagnosis_contains(record: &PatientRecord, needles: &[&str]) -> bool {
    let diagnosis = record.patient.primary_diagnosis.to_lowercase();
    needles.iter().any(|n| diagnosis.contains(n))
}

/// Diabetes with an HbA1c above 8%.
fn glycemic_management(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["diabetes"]) {
        return None;
    }
    let hba1c = record.find_lab("HbA1c")?;
    if hba1c.numeric_value()? <= 8.0 {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "Glycemic Management".to_string(),
        recommendation: "Intensify diabetes management due to HbA1c > 8%".to_string(),
        details: format!(
            "Current HbA1c: {}%. Target: < 7% (individualized). Consider adding/optimizing GLP-1 RA or SGLT2 inhibitor.",
            hba1c.value
        ),
        confidence: 0.92,
        evidence: "ADA Standards of Medical Care in Diabetes — 2025".to_string(),
        priority: Severity::High,
        actions: vec![
            "Review current insulin regimen".to_string(),
            "Consider GLP-1 RA if not on one".to_string(),
            "Endocrinology referral if HbA1c > 9%".to_string(),
            "Continuous glucose monitoring evaluation".to_string(),
        ],
    })
}

/// Chronic kidney disease; fires on diagnosis match alone, an eGFR lab
/// only enriches the text.
fn renal_protection(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["kidney", "ckd"]) {
        return None;
    }
    let egfr_prefix = record
        .find_lab("eGFR")
        .map(|l| format!("eGFR: {} mL/min. ", l.value))
        .unwrap_or_default();
    Some(TreatmentSuggestion {
        category: "Renal Protection".to_string(),
        recommendation: "Optimize renoprotective therapy".to_string(),
        details: format!(
            "{egfr_prefix}Consider SGLT2 inhibitor for renal protection. Avoid nephrotoxic agents."
        ),
        confidence: 0.88,
        evidence: "KDIGO CKD Guidelines 2024; CREDENCE Trial".to_string(),
        priority: Severity::High,
        actions: vec![
            "Add SGLT2 inhibitor (dapagliflozin/empagliflozin)".to_string(),
            "Nephrology follow-up in 4 weeks".to_string(),
            "Dietary protein restriction counseling".to_string(),
            "Dialysis access planning if eGFR < 20".to_string(),
        ],
    })
}

fn heart_failure_gdmt(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["heart failure", "hf"]) {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "Heart Failure Management".to_string(),
        recommendation: "Ensure guideline-directed medical therapy (GDMT)".to_string(),
        details: "Verify patient is on all four pillars: ACEi/ARB/ARNI, beta-blocker, MRA, and SGLT2i."
            .to_string(),
        confidence: 0.91,
        evidence: "AHA/ACC/HFSA Heart Failure Guidelines 2023".to_string(),
        priority: Severity::High,
        actions: vec![
            "Confirm ARNI titration to target dose".to_string(),
            "Add SGLT2 inhibitor if not present".to_string(),
            "Cardiac rehab referral".to_string(),
            "Remote monitoring enrollment".to_string(),
        ],
    })
}

fn copd_step_up(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["copd"]) {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "COPD Management".to_string(),
        recommendation: "Step-up therapy for frequent exacerbations".to_string(),
        details: "Consider adding PDE4 inhibitor or long-term azithromycin for exacerbation prevention."
            .to_string(),
        confidence: 0.85,
        evidence: "GOLD 2025 COPD Guidelines".to_string(),
        priority: Severity::Medium,
        actions: vec![
            "Pulmonary rehabilitation".to_string(),
            "Annual influenza and pneumococcal vaccination".to_string(),
            "Home oxygen assessment".to_string(),
            "Smoking cessation review".to_string(),
        ],
    })
}

fn sle_monitoring(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["lupus", "sle"]) {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "SLE Management".to_string(),
        recommendation: "Monitor for renal involvement progression".to_string(),
        details: "Continue immunosuppression. Monitor proteinuria and complement levels. Consider belimumab if recurrent flares."
            .to_string(),
        confidence: 0.84,
        evidence: "EULAR/ERA-EDTA Lupus Nephritis Guidelines 2024".to_string(),
        priority: Severity::High,
        actions: vec![
            "Monthly urine protein monitoring".to_string(),
            "Quarterly complement levels".to_string(),
            "Ophthalmology screening for HCQ".to_string(),
            "Bone density screening on steroids".to_string(),
        ],
    })
}

fn liver_disease(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if !diagnosis_contains(record, &["cirrhosis", "liver"]) {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "Liver Disease Management".to_string(),
        recommendation: "Variceal surveillance and transplant evaluation".to_string(),
        details: "Continue non-selective beta-blocker. Regular EGD screening. Avoid hepatotoxic drugs."
            .to_string(),
        confidence: 0.89,
        evidence: "AASLD Practice Guidelines for Cirrhosis 2024".to_string(),
        priority: Severity::Critical,
        actions: vec![
            "Liver transplant evaluation (MELD-based)".to_string(),
            "EGD every 6 months for varices".to_string(),
            "HCC screening with US + AFP every 6 months".to_string(),
            "Avoid all NSAIDs and acetaminophen > 2g/day".to_string(),
        ],
    })
}

/// Age-based preventive care, independent of diagnosis.
fn preventive_care(record: &PatientRecord) -> Option<TreatmentSuggestion> {
    if record.patient.age() < 50 {
        return None;
    }
    Some(TreatmentSuggestion {
        category: "Preventive Care".to_string(),
        recommendation: "Age-appropriate screening".to_string(),
        details: "Ensure up-to-date cancer screening, cardiovascular risk assessment, and vaccination schedule."
            .to_string(),
        confidence: 0.95,
        evidence: "USPSTF Screening Recommendations 2025".to_string(),
        priority: Severity::Low,
        actions: vec![
            "Colorectal cancer screening".to_string(),
            "Lipid panel if not recent".to_string(),
            "Flu + COVID + pneumonia vaccines".to_string(),
            "Fall risk assessment if > 65".to_string(),
        ],
    })
}
