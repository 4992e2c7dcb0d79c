//! Treatment suggester: guideline matching, lab gating, and priority
//! ordering.

mod common;

use chartis_core::models::{LabStatus, Severity};
use chartis_engine::treatment::suggest_treatments;
use common::*;

#[test]
fn diabetes_with_ckd_produces_both_entries() {
    let mut p = patient();
    p.primary_diagnosis =
        "Type 2 Diabetes Mellitus with chronic kidney disease".to_string();
    let rec = record(
        p,
        vec![],
        vec![lab("HbA1c", "9.2", LabStatus::Critical)],
        vec![],
        vec![],
    );
    let report = suggest_treatments(&rec);
    let categories: Vec<&str> = report
        .suggestions
        .iter()
        .map(|s| s.category.as_str())
        .collect();
    assert!(categories.contains(&"Glycemic Management"));
    assert!(categories.contains(&"Renal Protection"));

    // Any low-priority entry must rank after the glycemic entry.
    let glycemic_idx = categories
        .iter()
        .position(|c| *c == "Glycemic Management")
        .unwrap();
    for (idx, suggestion) in report.suggestions.iter().enumerate() {
        if suggestion.priority == Severity::Low {
            assert!(glycemic_idx < idx);
        }
    }
}

#[test]
fn glycemic_entry_requires_hba1c_above_eight() {
    let mut p = patient();
    p.primary_diagnosis = "Type 2 Diabetes Mellitus".to_string();
    let rec = record(
        p,
        vec![],
        vec![lab("HbA1c", "7.5", LabStatus::High)],
        vec![],
        vec![],
    );
    let report = suggest_treatments(&rec);
    assert!(report
        .suggestions
        .iter()
        .all(|s| s.category != "Glycemic Management"));
}

#[test]
fn renal_entry_fires_on_diagnosis_alone_and_interpolates_egfr() {
    let mut p = patient();
    p.primary_diagnosis = "CKD Stage 3b".to_string();
    let without_lab = record(p.clone(), vec![], vec![], vec![], vec![]);
    let report = suggest_treatments(&without_lab);
    assert_eq!(report.suggestions.len(), 1);
    assert!(report.suggestions[0]
        .details
        .starts_with("Consider SGLT2 inhibitor"));

    let with_lab = record(
        p,
        vec![],
        vec![lab("eGFR", "28", LabStatus::Critical)],
        vec![],
        vec![],
    );
    let report = suggest_treatments(&with_lab);
    assert!(report.suggestions[0]
        .details
        .starts_with("eGFR: 28 mL/min."));
}

#[test]
fn liver_disease_outranks_everything() {
    let mut p = patient();
    p.date_of_birth = jiff::civil::date(current_year() - 55, 1, 1);
    p.primary_diagnosis = "NASH cirrhosis with portal hypertension".to_string();
    let report = suggest_treatments(&record(p, vec![], vec![], vec![], vec![]));
    assert_eq!(report.suggestions[0].category, "Liver Disease Management");
    assert_eq!(report.suggestions[0].priority, Severity::Critical);
    // Preventive care (age 55) trails at low priority.
    assert_eq!(
        report.suggestions.last().unwrap().category,
        "Preventive Care"
    );
}

#[test]
fn preventive_care_keys_off_age_fifty() {
    let mut young = patient();
    young.date_of_birth = jiff::civil::date(current_year() - 49, 1, 1);
    let report = suggest_treatments(&record(young, vec![], vec![], vec![], vec![]));
    assert_eq!(report.total_suggestions, 0);

    let mut fifty = patient();
    fifty.date_of_birth = jiff::civil::date(current_year() - 50, 1, 1);
    let report = suggest_treatments(&record(fifty, vec![], vec![], vec![], vec![]));
    assert_eq!(report.total_suggestions, 1);
    assert_eq!(report.suggestions[0].category, "Preventive Care");
    assert_eq!(report.suggestions[0].confidence, 0.95);
}

#[test]
fn stable_sort_keeps_table_order_on_priority_ties() {
    // Diabetes + kidney + heart failure all fire at high priority; the
    // output preserves guideline-table order among them.
    let mut p = patient();
    p.primary_diagnosis =
        "Type 2 Diabetes Mellitus, chronic kidney disease, heart failure".to_string();
    let rec = record(
        p,
        vec![],
        vec![lab("HbA1c", "9.2", LabStatus::Critical)],
        vec![],
        vec![],
    );
    let report = suggest_treatments(&rec);
    let categories: Vec<&str> = report
        .suggestions
        .iter()
        .map(|s| s.category.as_str())
        .collect();
    assert_eq!(
        categories,
        vec![
            "Glycemic Management",
            "Renal Protection",
            "Heart Failure Management",
        ]
    );
}

#[test]
fn copd_and_sle_match_their_keywords() {
    let mut copd = patient();
    copd.primary_diagnosis = "COPD GOLD Stage III".to_string();
    let report = suggest_treatments(&record(copd, vec![], vec![], vec![], vec![]));
    assert_eq!(report.suggestions[0].category, "COPD Management");
    assert_eq!(report.suggestions[0].priority, Severity::Medium);

    let mut sle = patient();
    sle.primary_diagnosis = "Systemic Lupus Erythematosus (SLE)".to_string();
    let report = suggest_treatments(&record(sle, vec![], vec![], vec![], vec![]));
    assert_eq!(report.suggestions[0].category, "SLE Management");
}

#[test]
fn no_matching_guideline_means_no_suggestions() {
    let report = suggest_treatments(&quiet_record());
    assert!(report.suggestions.is_empty());
    assert_eq!(report.total_suggestions, 0);
}
