use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A single clinical visit (ER, inpatient, or outpatient).
///
/// `date` is an ISO calendar date string, so lexicographic order is
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Encounter {
    pub id: Uuid,
    pub patient_id: String,
    pub encounter_type: EncounterType,
    pub date: String,
    pub provider: Option<String>,
    pub department: Option<String>,
    pub chief_complaint: String,
    pub diagnosis: String,
    pub notes: String,
    pub disposition: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EncounterType {
    Emergency,
    Inpatient,
    Outpatient,
}

impl EncounterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncounterType::Emergency => "Emergency",
            EncounterType::Inpatient => "Inpatient",
            EncounterType::Outpatient => "Outpatient",
        }
    }
}

impl FromStr for EncounterType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Emergency" => Ok(EncounterType::Emergency),
            "Inpatient" => Ok(EncounterType::Inpatient),
            "Outpatient" => Ok(EncounterType::Outpatient),
            other => Err(CoreError::InvalidEncounterType(other.to_string())),
        }
    }
}
