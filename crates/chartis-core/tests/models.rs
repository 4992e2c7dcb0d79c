//! Model-level behavior: tolerant lab parsing, enum token parsing, age
//! arithmetic, and display helpers.

use std::str::FromStr;

use chartis_core::error::CoreError;
use chartis_core::models::{
    EncounterType, LabResult, LabStatus, MedicationStatus, Patient, RiskLevel, Severity, Vitals,
};
use uuid::Uuid;

fn lab_with_value(value: &str) -> LabResult {
    LabResult {
        id: Uuid::new_v4(),
        patient_id: "pt-200".to_string(),
        test_name: "eGFR".to_string(),
        value: value.to_string(),
        unit: "mL/min".to_string(),
        reference_range: "> 60".to_string(),
        status: LabStatus::Low,
        date: "2026-01-10".to_string(),
        ordered_by: None,
    }
}

#[test]
fn numeric_value_parses_plain_and_suffixed_numbers() {
    assert_eq!(lab_with_value("25").numeric_value(), Some(25.0));
    assert_eq!(lab_with_value("9.2").numeric_value(), Some(9.2));
    assert_eq!(lab_with_value(" 58 mL/min ").numeric_value(), Some(58.0));
    assert_eq!(lab_with_value("-1.5").numeric_value(), Some(-1.5));
}

#[test]
fn numeric_value_rejects_qualitative_results() {
    assert_eq!(lab_with_value("Positive").numeric_value(), None);
    assert_eq!(lab_with_value("pending").numeric_value(), None);
    assert_eq!(lab_with_value("").numeric_value(), None);
    assert_eq!(lab_with_value("> 60").numeric_value(), None);
}

#[test]
fn age_is_year_subtraction_only() {
    let patient = Patient {
        id: "pt-200".to_string(),
        mrn: "MRN-2026-200".to_string(),
        first_name: "Noor".to_string(),
        last_name: "Haddad".to_string(),
        date_of_birth: jiff::civil::date(1959, 12, 31),
        gender: "Male".to_string(),
        blood_type: None,
        phone: None,
        email: None,
        address: None,
        emergency_contact: None,
        emergency_phone: None,
        insurance_provider: None,
        insurance_id: None,
        primary_diagnosis: "Hypertension".to_string(),
        allergies: None,
        status: "active".to_string(),
        risk_level: RiskLevel::Low,
    };
    // Born December 31st: a date-aware age would be 65 for most of 2025,
    // but the contract is plain year subtraction.
    assert_eq!(patient.age_in(2025), 66);
}

#[test]
fn documented_allergies_excludes_the_sentinel() {
    let mut patient = Patient {
        id: "pt-200".to_string(),
        mrn: "MRN-2026-200".to_string(),
        first_name: "Noor".to_string(),
        last_name: "Haddad".to_string(),
        date_of_birth: jiff::civil::date(1959, 12, 31),
        gender: "Male".to_string(),
        blood_type: None,
        phone: None,
        email: None,
        address: None,
        emergency_contact: None,
        emergency_phone: None,
        insurance_provider: None,
        insurance_id: None,
        primary_diagnosis: "Hypertension".to_string(),
        allergies: None,
        status: "active".to_string(),
        risk_level: RiskLevel::Low,
    };
    assert!(!patient.has_documented_allergies());

    patient.allergies = Some("None known".to_string());
    assert!(!patient.has_documented_allergies());

    patient.allergies = Some(String::new());
    assert!(!patient.has_documented_allergies());

    patient.allergies = Some("Penicillin".to_string());
    assert!(patient.has_documented_allergies());
}

#[test]
fn enum_tokens_round_trip_from_storage_strings() {
    assert_eq!(RiskLevel::from_str("critical").unwrap(), RiskLevel::Critical);
    assert_eq!(
        EncounterType::from_str("Emergency").unwrap(),
        EncounterType::Emergency
    );
    assert_eq!(LabStatus::from_str("high").unwrap(), LabStatus::High);
    assert_eq!(
        MedicationStatus::from_str("discontinued").unwrap(),
        MedicationStatus::Discontinued
    );
}

#[test]
fn invalid_enum_tokens_report_the_offending_value() {
    let err = RiskLevel::from_str("severe").unwrap_err();
    assert!(matches!(err, CoreError::InvalidRiskLevel(v) if v == "severe"));

    let err = EncounterType::from_str("Telehealth").unwrap_err();
    assert!(matches!(err, CoreError::InvalidEncounterType(v) if v == "Telehealth"));
}

#[test]
fn severity_rank_orders_critical_first() {
    assert!(Severity::Critical.rank() < Severity::High.rank());
    assert!(Severity::High.rank() < Severity::Medium.rank());
    assert!(Severity::Medium.rank() < Severity::Low.rank());
}

#[test]
fn lab_status_renders_uppercase() {
    assert_eq!(LabStatus::Critical.as_upper(), "CRITICAL");
    assert_eq!(LabStatus::Normal.as_upper(), "NORMAL");
}

#[test]
fn bp_display_tolerates_missing_halves() {
    let mut vitals = Vitals {
        id: Uuid::new_v4(),
        patient_id: "pt-200".to_string(),
        date: "2026-01-10".to_string(),
        heart_rate: None,
        systolic_bp: Some(160),
        diastolic_bp: Some(95),
        temperature: None,
        respiratory_rate: None,
        oxygen_saturation: None,
        weight: None,
    };
    assert_eq!(vitals.bp_display(), "160/95");

    vitals.diastolic_bp = None;
    assert_eq!(vitals.bp_display(), "160/--");
}
