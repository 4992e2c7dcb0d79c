//! Keyword-routed chart chat responder.
//!
//! Routes the lowercased question through an ordered keyword table,
//! first match wins, and renders a templated reply from the record. Every
//! call is stateless; no conversation history is kept here.

use chartis_core::models::PatientRecord;
use tracing::debug;

use crate::concerns::identify_concerns;
use crate::render::opt_num;

type ChatRoute = (
    &'static [&'static str],
    fn(&PatientRecord) -> String,
);

/// Keyword groups in precedence order.
const ROUTES: &[ChatRoute] = &[
    (&["summary", "overview", "who is"], summary_reply),
    (&["risk", "danger", "concern", "worry"], concerns_reply),
    (&["medication", "drug", "prescription", "med"], medications_reply),
    (&["lab", "test", "result"], labs_reply),
    (
        &["vital", "blood pressure", "heart rate", "temperature"],
        vitals_reply,
    ),
    (&["history", "encounter", "visit"], history_reply),
    (&["allerg"], allergies_reply),
    (
        &["treatment", "recommend", "what should", "next step"],
        treatment_reply,
    ),
];

/// Answer a free-text question about the record.
pub fn chat_response(question: &str, record: &PatientRecord) -> String {
    let q = question.to_lowercase();
    for (keywords, handler) in ROUTES {
        if keywords.iter().any(|k| q.contains(k)) {
            debug!(patient_id = %record.patient.id, route = keywords[0], "chat question routed");
            return handler(record);
        }
    }
    debug!(patient_id = %record.patient.id, route = "help", "chat question routed");
    help_reply(record)
}

fn summary_reply(record: &PatientRecord) -> String {
    let patient = &record.patient;
    let critical_count = record.critical_labs().len();
    format!(
        "{} is a {}-year-old {} with {}. They have {} encounters on record, {} active medications, and {} critical lab values. Known allergies: {}.",
        patient.full_name(),
        patient.age(),
        patient.gender.to_lowercase(),
        patient.primary_diagnosis,
        record.encounters.len(),
        record.active_medications().len(),
        critical_count,
        patient.allergies.as_deref().unwrap_or("None")
    )
}

fn concerns_reply(record: &PatientRecord) -> String {
    let numbered = identify_concerns(record)
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {c}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Key concerns for {}:\n\n{numbered}\n\nI recommend reviewing the Risk Prediction panel for quantitative risk scores.",
        record.patient.first_name
    )
}

fn medications_reply(record: &PatientRecord) -> String {
    let active = record.active_medications();
    let bullets = active
        .iter()
        .map(|m| format!("• {} {} — {}", m.name, m.dosage, m.frequency))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{} is currently on {} active medications:\n\n{bullets}\n\nCheck the Medication Safety panel for interaction warnings.",
        record.patient.first_name,
        active.len()
    )
}

fn labs_reply(record: &PatientRecord) -> String {
    let bullets = record
        .labs
        .iter()
        .take(8)
        .map(|l| {
            format!(
                "• {}: {} {} ({}) — {}",
                l.test_name,
                l.value,
                l.unit,
                l.status.as_upper(),
                l.date
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Recent lab results for {}:\n\n{bullets}",
        record.patient.first_name
    )
}

fn vitals_reply(record: &PatientRecord) -> String {
    let Some(vitals) = record.latest_vitals() else {
        return "No vital signs recorded for this patient.".to_string();
    };
    format!(
        "Latest vitals for {} ({}):\n\n• Heart Rate: {} bpm\n• Blood Pressure: {} mmHg\n• Temperature: {}°F\n• Respiratory Rate: {}/min\n• SpO2: {}%\n• Weight: {} lbs",
        record.patient.first_name,
        vitals.date,
        opt_num(vitals.heart_rate),
        vitals.bp_display(),
        opt_num(vitals.temperature),
        opt_num(vitals.respiratory_rate),
        opt_num(vitals.oxygen_saturation),
        opt_num(vitals.weight)
    )
}

fn history_reply(record: &PatientRecord) -> String {
    let bullets = record
        .recent_encounters()
        .iter()
        .map(|e| {
            format!(
                "• {} — {}: {}\n  Dx: {}",
                e.date,
                e.encounter_type.as_str(),
                e.chief_complaint,
                e.diagnosis
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "Recent encounters for {}:\n\n{bullets}",
        record.patient.first_name
    )
}

fn allergies_reply(record: &PatientRecord) -> String {
    format!(
        "Documented allergies for {}: {}.\n\nAlways verify allergy status before prescribing new medications.",
        record.patient.first_name,
        record.patient.allergies.as_deref().unwrap_or("None known")
    )
}

fn treatment_reply(record: &PatientRecord) -> String {
    format!(
        "Based on {}'s current condition ({}), I recommend reviewing the Treatment Suggestions panel for evidence-based recommendations. Key areas to address:\n\n1. Optimize current medication regimen\n2. Follow up on critical lab values\n3. Schedule appropriate preventive screenings\n\nPlease click the \"Treatment\" tab for detailed, guideline-based suggestions.",
        record.patient.first_name,
        record.patient.primary_diagnosis
    )
}

fn help_reply(record: &PatientRecord) -> String {
    format!(
        "I can help you understand {}'s clinical data. Try asking about:\n\n• \"What are the key risks?\"\n• \"Show me recent labs\"\n• \"What medications is the patient on?\"\n• \"Give me a summary\"\n• \"What vitals were last recorded?\"\n• \"Show encounter history\"\n• \"What are the treatment recommendations?\"",
        record.patient.first_name
    )
}
