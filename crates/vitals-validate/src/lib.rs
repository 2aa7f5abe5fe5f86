//! Schema-driven validation for the vitals pipeline.
//!
//! One generic routine interprets the declarative field schemas from
//! `vitals-model` against raw records:
//!
//! - **validator**: per-record field validation with full error accumulation
//! - **checks::pressure**: advisory cross-field blood-pressure rule
//! - **checks::sequence**: stateful per-owner timestamp ordering audit
//!
//! Every finding becomes an `ErrorRecord` data artifact; nothing here
//! returns `Err` for bad data.

pub mod checks;
pub mod validator;

pub use checks::pressure;
pub use checks::sequence::{OwnerKey, SequenceAuditor};
pub use validator::{RecordOutcome, validate_patient, validate_reading, validate_record};
