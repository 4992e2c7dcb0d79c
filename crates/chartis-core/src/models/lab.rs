use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One lab result. The same `test_name` may appear multiple times as a
/// time series; consumers take the first match in date-descending order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabResult {
    pub id: Uuid,
    pub patient_id: String,
    pub test_name: String,
    /// Reported value as free text. Numeric rules go through
    /// [`LabResult::numeric_value`], which tolerates trailing units.
    pub value: String,
    pub unit: String,
    pub reference_range: String,
    pub status: LabStatus,
    pub date: String,
    pub ordered_by: Option<String>,
}

impl LabResult {
    /// Tolerant numeric parse of the reported value.
    ///
    /// Accepts a leading float followed by anything ("58 mL/min" → 58.0),
    /// so a qualitative value like "Positive" simply returns `None` and
    /// never fires a threshold rule.
    pub fn numeric_value(&self) -> Option<f64> {
        let trimmed = self.value.trim();
        let end = trimmed
            .char_indices()
            .take_while(|(i, c)| {
                c.is_ascii_digit()
                    || *c == '.'
                    || (*i == 0 && (*c == '-' || *c == '+'))
            })
            .map(|(i, c)| i + c.len_utf8())
            .last()?;
        trimmed[..end].parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LabStatus {
    Normal,
    Low,
    High,
    Critical,
}

impl LabStatus {
    /// Uppercase rendering used in report text, e.g. "CRITICAL".
    pub fn as_upper(&self) -> &'static str {
        match self {
            LabStatus::Normal => "NORMAL",
            LabStatus::Low => "LOW",
            LabStatus::High => "HIGH",
            LabStatus::Critical => "CRITICAL",
        }
    }
}

impl FromStr for LabStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(LabStatus::Normal),
            "low" => Ok(LabStatus::Low),
            "high" => Ok(LabStatus::High),
            "critical" => Ok(LabStatus::Critical),
            other => Err(CoreError::InvalidLabStatus(other.to_string())),
        }
    }
}
