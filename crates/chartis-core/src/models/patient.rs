use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A patient's demographic and clinical header record.
///
/// `allergies` is free text; `None` or the literal "None known" both mean
/// no documented allergy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: String,
    pub mrn: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub gender: String,
    pub blood_type: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_id: Option<String>,
    pub primary_diagnosis: String,
    pub allergies: Option<String>,
    pub status: String,
    pub risk_level: RiskLevel,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age as of the given calendar year, by year subtraction only.
    ///
    /// This is deliberately not a full date-aware age: downstream output
    /// parity depends on `current_year - birth_year`.
    pub fn age_in(&self, year: i16) -> i16 {
        year - self.date_of_birth.year()
    }

    /// Age as of the current wall-clock year.
    pub fn age(&self) -> i16 {
        self.age_in(jiff::Zoned::now().date().year())
    }

    /// True when the patient has a documented allergy beyond the
    /// "None known" sentinel.
    pub fn has_documented_allergies(&self) -> bool {
        match self.allergies.as_deref() {
            Some(a) => !a.is_empty() && a != "None known",
            None => false,
        }
    }
}

/// Chart-level risk classification assigned to the patient, also used as
/// the bucket for computed risk scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => Err(CoreError::InvalidRiskLevel(other.to_string())),
        }
    }
}
