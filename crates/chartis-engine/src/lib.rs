//! chartis-engine
//!
//! Deterministic clinical-decision-support rules over a read-only
//! [`PatientRecord`](chartis_core::models::PatientRecord) snapshot:
//! narrative summaries, risk scoring, medication safety checks, guideline
//! treatment suggestions, and a keyword-routed chart chat responder.
//!
//! Every entry point is a pure synchronous function of its inputs. The two
//! exceptions are wall-clock `generated_at` timestamps and the summary
//! confidence jitter (see [`summary`]); everything else is reproducible
//! byte for byte. Malformed or missing data never fails a call: a rule
//! that cannot evaluate simply does not fire.

pub mod chat;
pub mod concerns;
pub mod risk;
pub mod safety;
pub mod summary;
pub mod treatment;

mod render;
