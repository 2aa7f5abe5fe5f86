//! Batch transformation orchestration.
//!
//! Drives normalization, validation, and the cross-field check over a batch
//! of raw records, then runs the ordering audit once over the accepted
//! readings in original input order. Produces disjoint valid/error
//! partitions and aggregate counts. Validation failures are data-quality
//! findings, never faults: a malformed record cannot abort the batch, and
//! nothing is retried.

use serde::Serialize;
use tracing::info;

use vitals_model::{ErrorRecord, PatientRecord, RawRecord, ReadingRecord};
use vitals_validate::{SequenceAuditor, pressure, validate_patient, validate_reading};

/// Aggregate counts for one transformation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub raw_patients: usize,
    pub raw_readings: usize,
    pub valid_patients: usize,
    pub valid_readings: usize,
    pub error_records: usize,
}

/// Output of one transformation run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub patients: Vec<PatientRecord>,
    pub readings: Vec<ReadingRecord>,
    /// Every error record from every stage, in detection order.
    pub errors: Vec<ErrorRecord>,
    pub summary: BatchSummary,
}

/// Transform one batch of raw patient and reading records.
///
/// Deterministic for a given input apart from error-record creation
/// timestamps, which are metadata only.
pub fn transform_batch(raw_patients: &[RawRecord], raw_readings: &[RawRecord]) -> BatchOutcome {
    info!(
        patients = raw_patients.len(),
        readings = raw_readings.len(),
        "transforming batch"
    );

    let mut patients = Vec::new();
    let mut readings = Vec::new();
    let mut errors = Vec::new();

    for (index, raw) in raw_patients.iter().enumerate() {
        let (patient, mut record_errors) = validate_patient(raw, index);
        errors.append(&mut record_errors);
        if let Some(patient) = patient {
            patients.push(patient);
        }
    }

    for (index, raw) in raw_readings.iter().enumerate() {
        let (reading, mut record_errors) = validate_reading(raw, index);
        errors.append(&mut record_errors);
        if let Some(reading) = reading {
            // Advisory cross-field rule; the reading is emitted regardless.
            errors.extend(pressure::check(&reading));
            readings.push(reading);
        }
    }

    // The ordering audit runs strictly after per-record validation, over
    // the accepted readings in original input order.
    errors.extend(SequenceAuditor::audit(&readings));

    let summary = BatchSummary {
        raw_patients: raw_patients.len(),
        raw_readings: raw_readings.len(),
        valid_patients: patients.len(),
        valid_readings: readings.len(),
        error_records: errors.len(),
    };

    info!(
        valid_patients = summary.valid_patients,
        valid_readings = summary.valid_readings,
        error_records = summary.error_records,
        "batch transformed"
    );

    BatchOutcome {
        patients,
        readings,
        errors,
        summary,
    }
}
