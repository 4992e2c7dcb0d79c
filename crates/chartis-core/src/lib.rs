//! chartis-core
//!
//! Pure domain types and the patient-record snapshot the decision engines
//! consume. No I/O and no engine logic; this is the shared vocabulary of
//! the Chartis system.

pub mod error;
pub mod models;
