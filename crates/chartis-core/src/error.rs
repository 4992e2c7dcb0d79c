use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("invalid encounter type: {0}")]
    InvalidEncounterType(String),

    #[error("invalid lab status: {0}")]
    InvalidLabStatus(String),

    #[error("invalid medication status: {0}")]
    InvalidMedicationStatus(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
