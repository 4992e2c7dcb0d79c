use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::encounter::{Encounter, EncounterType};
use super::lab::{LabResult, LabStatus};
use super::medication::Medication;
use super::patient::Patient;
use super::vitals::Vitals;

/// An immutable snapshot of one patient's chart, as handed to the decision
/// engines. The engines never fetch data themselves; the caller assembles
/// this from storage and the engines read it.
///
/// [`PatientRecord::new`] sorts encounters, labs, and vitals most-recent
/// first, so "latest" lookups do not depend on caller ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub patient: Patient,
    pub encounters: Vec<Encounter>,
    pub labs: Vec<LabResult>,
    pub medications: Vec<Medication>,
    pub vitals: Vec<Vitals>,
}

impl PatientRecord {
    /// Assemble a snapshot, normalizing each dated list to date-descending
    /// order. The sorts are stable, so same-date entries keep their
    /// supplied relative order.
    pub fn new(
        patient: Patient,
        mut encounters: Vec<Encounter>,
        mut labs: Vec<LabResult>,
        medications: Vec<Medication>,
        mut vitals: Vec<Vitals>,
    ) -> Self {
        encounters.sort_by(|a, b| b.date.cmp(&a.date));
        labs.sort_by(|a, b| b.date.cmp(&a.date));
        vitals.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            patient,
            encounters,
            labs,
            medications,
            vitals,
        }
    }

    /// Medications with status `active`.
    pub fn active_medications(&self) -> Vec<&Medication> {
        self.medications.iter().filter(|m| m.is_active()).collect()
    }

    /// Emergency-department encounters.
    pub fn emergency_encounters(&self) -> Vec<&Encounter> {
        self.encounters
            .iter()
            .filter(|e| e.encounter_type == EncounterType::Emergency)
            .collect()
    }

    /// Inpatient admissions.
    pub fn inpatient_encounters(&self) -> Vec<&Encounter> {
        self.encounters
            .iter()
            .filter(|e| e.encounter_type == EncounterType::Inpatient)
            .collect()
    }

    /// The five most recent encounters.
    pub fn recent_encounters(&self) -> &[Encounter] {
        let n = self.encounters.len().min(5);
        &self.encounters[..n]
    }

    /// Labs with status `critical`.
    pub fn critical_labs(&self) -> Vec<&LabResult> {
        self.labs
            .iter()
            .filter(|l| l.status == LabStatus::Critical)
            .collect()
    }

    /// Labs with status `critical` or `high`.
    pub fn abnormal_labs(&self) -> Vec<&LabResult> {
        self.labs
            .iter()
            .filter(|l| matches!(l.status, LabStatus::Critical | LabStatus::High))
            .collect()
    }

    /// The most recent vitals entry, if any exist.
    pub fn latest_vitals(&self) -> Option<&Vitals> {
        self.vitals.first()
    }

    /// The most recent lab whose name matches `test_name` exactly.
    pub fn find_lab(&self, test_name: &str) -> Option<&LabResult> {
        self.labs.iter().find(|l| l.test_name == test_name)
    }

    /// The most recent lab whose name contains `fragment`,
    /// case-insensitively.
    pub fn find_lab_containing(&self, fragment: &str) -> Option<&LabResult> {
        let fragment = fragment.to_lowercase();
        self.labs
            .iter()
            .find(|l| l.test_name.to_lowercase().contains(&fragment))
    }
}
