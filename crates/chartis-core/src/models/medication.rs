use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A prescribed medication. Safety rules match `name` as a
/// case-insensitive substring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub id: Uuid,
    pub patient_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub route: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: MedicationStatus,
    pub prescriber: Option<String>,
    pub notes: Option<String>,
}

impl Medication {
    pub fn is_active(&self) -> bool {
        self.status == MedicationStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicationStatus {
    Active,
    Discontinued,
    OnHold,
}

impl FromStr for MedicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MedicationStatus::Active),
            "discontinued" => Ok(MedicationStatus::Discontinued),
            "on_hold" => Ok(MedicationStatus::OnHold),
            other => Err(CoreError::InvalidMedicationStatus(other.to_string())),
        }
    }
}
