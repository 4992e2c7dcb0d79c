//! Shared fixtures for the engine tests.
#![allow(dead_code)]

use chartis_core::models::{
    Encounter, EncounterType, LabResult, LabStatus, Medication, MedicationStatus, Patient,
    PatientRecord, RiskLevel, Vitals,
};
use uuid::Uuid;

pub fn current_year() -> i16 {
    jiff::Zoned::now().date().year()
}

/// A quiet baseline patient: 45 years old, low risk, no allergies, and a
/// diagnosis no guideline entry matches.
pub fn patient() -> Patient {
    Patient {
        id: "pt-100".to_string(),
        mrn: "MRN-2026-100".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Whitfield".to_string(),
        date_of_birth: jiff::civil::date(current_year() - 45, 3, 15),
        gender: "Female".to_string(),
        blood_type: Some("O+".to_string()),
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
    }
}

pub fn lab(test_name: &str, value: &str, status: LabStatus) -> LabResult {
    LabResult {
        id: Uuid::new_v4(),
        patient_id: "pt-100".to_string(),
        test_name: test_name.to_string(),
        value: value.to_string(),
        unit: "mg/dL".to_string(),
        reference_range: "see lab".to_string(),
        status,
        date: "2026-01-10".to_string(),
        ordered_by: None,
    }
}

pub fn medication(name: &str, status: MedicationStatus) -> Medication {
    Medication {
        id: Uuid::new_v4(),
        patient_id: "pt-100".to_string(),
        name: name.to_string(),
        dosage: "500 mg".to_string(),
        frequency: "BID".to_string(),
        route: Some("oral".to_string()),
        start_date: "2025-06-01".to_string(),
        end_date: None,
        status,
        prescriber: None,
        notes: None,
    }
}

pub fn encounter(encounter_type: EncounterType, date: &str) -> Encounter {
    Encounter {
        id: Uuid::new_v4(),
        patient_id: "pt-100".to_string(),
        encounter_type,
        date: date.to_string(),
        provider: Some("Dr. Osei".to_string()),
        department: Some("Internal Medicine".to_string()),
        chief_complaint: "Follow-up".to_string(),
        diagnosis: "Stable".to_string(),
        notes: "Routine visit.".to_string(),
        disposition: Some("Home".to_string()),
    }
}

/// A vitals entry with every measurement absent.
pub fn empty_vitals(date: &str) -> Vitals {
    Vitals {
        id: Uuid::new_v4(),
        patient_id: "pt-100".to_string(),
        date: date.to_string(),
        heart_rate: None,
        systolic_bp: None,
        diastolic_bp: None,
        temperature: None,
        respiratory_rate: None,
        oxygen_saturation: None,
        weight: None,
    }
}

pub fn record(
    patient: Patient,
    encounters: Vec<Encounter>,
    labs: Vec<LabResult>,
    medications: Vec<Medication>,
    vitals: Vec<Vitals>,
) -> PatientRecord {
    PatientRecord::new(patient, encounters, labs, medications, vitals)
}

/// A record with nothing in it beyond the baseline patient.
pub fn quiet_record() -> PatientRecord {
    record(patient(), vec![], vec![], vec![], vec![])
}

/// An acutely unwell 70-year-old: septic vitals, infection markers,
/// repeated ER visits, and a high-risk classification.
pub fn hot_record() -> PatientRecord {
    let mut p = patient();
    p.date_of_birth = jiff::civil::date(current_year() - 70, 7, 2);
    p.risk_level = RiskLevel::High;
    p.primary_diagnosis = "Type 2 Diabetes Mellitus with chronic kidney disease".to_string();

    let vitals = Vitals {
        heart_rate: Some(120),
        systolic_bp: Some(88),
        diastolic_bp: Some(54),
        temperature: Some(101.2),
        respiratory_rate: Some(24),
        oxygen_saturation: Some(85.0),
        weight: Some(182.0),
        ..empty_vitals("2026-01-12")
    };

    record(
        p,
        vec![
            encounter(EncounterType::Emergency, "2026-01-12"),
            encounter(EncounterType::Emergency, "2025-11-03"),
            encounter(EncounterType::Inpatient, "2025-08-20"),
        ],
        vec![
            lab("Lactate", "4.1", LabStatus::Critical),
            lab("WBC", "15.2", LabStatus::Critical),
            lab("eGFR", "25", LabStatus::Critical),
            lab("HbA1c", "9.2", LabStatus::Critical),
            lab("Creatinine", "2.1", LabStatus::High),
            lab("Glucose", "250", LabStatus::High),
        ],
        vec![
            medication("Metformin", MedicationStatus::Active),
            medication("Insulin glargine", MedicationStatus::Active),
            medication("Lisinopril", MedicationStatus::Active),
        ],
        vec![vitals],
    )
}
