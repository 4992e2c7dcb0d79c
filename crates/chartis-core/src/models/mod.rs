pub mod encounter;
pub mod lab;
pub mod medication;
pub mod patient;
pub mod record;
pub mod report;
pub mod vitals;

pub use encounter::{Encounter, EncounterType};
pub use lab::{LabResult, LabStatus};
pub use medication::{Medication, MedicationStatus};
pub use patient::{Patient, RiskLevel};
pub use record::PatientRecord;
pub use report::{
    LengthOfStayEstimate, MedicationSafetyReport, MedicationWarning, RiskAssessment, RiskFactor,
    RiskReport, Severity, SummaryReport, TreatmentReport, TreatmentSuggestion, WarningType,
};
pub use vitals::Vitals;
