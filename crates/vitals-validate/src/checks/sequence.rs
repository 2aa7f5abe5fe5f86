//! Per-owner timestamp ordering audit.
//!
//! A single left-to-right pass over accepted readings in input order,
//! tracking the last-seen timestamp per owning patient. Readings without an
//! owner share one "unassigned" bucket.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use vitals_model::{ErrorKind, ErrorRecord, ReadingRecord, RecordRef, SourceTable};
use vitals_transform::format_timestamp;

/// Ordering bucket: one per owning patient, plus one shared bucket for
/// readings that carry no owner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum OwnerKey {
    Patient(String),
    Unassigned,
}

impl OwnerKey {
    pub fn for_reading(reading: &ReadingRecord) -> Self {
        match &reading.patient_id {
            Some(id) => OwnerKey::Patient(id.clone()),
            None => OwnerKey::Unassigned,
        }
    }

    fn as_str(&self) -> &str {
        match self {
            OwnerKey::Patient(id) => id,
            OwnerKey::Unassigned => "unassigned",
        }
    }
}

/// Stateful timestamp-regression detector.
///
/// The stored last-seen value only advances on non-regressing records, so a
/// run of bad data cannot mask later real regressions. O(n) over the stream
/// with O(distinct owners) state.
#[derive(Debug, Default)]
pub struct SequenceAuditor {
    last_seen: BTreeMap<OwnerKey, DateTime<Utc>>,
}

impl SequenceAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one accepted reading, in input order.
    pub fn observe(&mut self, reading: &ReadingRecord) -> Option<ErrorRecord> {
        let key = OwnerKey::for_reading(reading);
        match self.last_seen.get(&key).copied() {
            Some(last) if reading.timestamp < last => Some(regression_error(reading, &key, last)),
            _ => {
                self.last_seen.insert(key, reading.timestamp);
                None
            }
        }
    }

    /// Audit a whole stream of accepted readings in input order.
    pub fn audit(readings: &[ReadingRecord]) -> Vec<ErrorRecord> {
        let mut auditor = Self::new();
        readings
            .iter()
            .filter_map(|reading| auditor.observe(reading))
            .collect()
    }
}

fn regression_error(reading: &ReadingRecord, key: &OwnerKey, last: DateTime<Utc>) -> ErrorRecord {
    ErrorRecord::new(
        RecordRef::Id(reading.id.clone()),
        SourceTable::DeviceReadings,
        "timestamp",
        ErrorKind::OutOfOrder,
        format!(
            "timestamp {} is earlier than previous {} for owner {}",
            format_timestamp(reading.timestamp),
            format_timestamp(last),
            key.as_str()
        ),
        format_timestamp(reading.timestamp),
    )
}
