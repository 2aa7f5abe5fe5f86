//! Cross-field blood-pressure consistency check.
//!
//! Advisory only: a violating reading is still emitted; the finding is
//! reported for audit.

use vitals_model::{ErrorKind, ErrorRecord, ReadingRecord, RecordRef, SourceTable};

/// Sentinel field name for the cross-field finding.
pub const BLOOD_PRESSURE_FIELD: &str = "blood_pressure";

/// Diastolic must not exceed systolic when both are present.
pub fn check(reading: &ReadingRecord) -> Option<ErrorRecord> {
    let (systolic, diastolic) = (reading.systolic_bp?, reading.diastolic_bp?);
    if diastolic <= systolic {
        return None;
    }
    Some(ErrorRecord::new(
        RecordRef::Id(reading.id.clone()),
        SourceTable::DeviceReadings,
        BLOOD_PRESSURE_FIELD,
        ErrorKind::LogicalInconsistency,
        "diastolic pressure exceeds systolic pressure",
        format!("Systolic: {systolic}, Diastolic: {diastolic}"),
    ))
}
