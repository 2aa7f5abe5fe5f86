//! Data-quality diagnostics emitted by the transformation engine.
//!
//! Every rejected or suspect input value becomes an [`ErrorRecord`] data
//! artifact. Validation never aborts a batch; downstream loaders receive the
//! complete error set alongside the valid records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Logical table a raw record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTable {
    Patients,
    DeviceReadings,
}

impl SourceTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTable::Patients => "patients",
            SourceTable::DeviceReadings => "device_readings",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to the offending raw record: its identifier when one was
/// present, otherwise its position in the input batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordRef {
    Id(String),
    Index(usize),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Id(id) => write!(f, "{id}"),
            RecordRef::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Closed taxonomy of data-quality findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Mandatory field absent or empty.
    MissingField,
    /// Value present but fails its type, pattern, or parse check.
    InvalidFormat,
    /// Numeric value outside the declared plausible bound.
    OutOfRange,
    /// Cross-field relational rule violated.
    LogicalInconsistency,
    /// Timestamp regresses relative to the owner's prior accepted reading.
    OutOfOrder,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "missing_field",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::LogicalInconsistency => "logical_inconsistency",
            ErrorKind::OutOfOrder => "out_of_order",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured diagnostic for one rejected or suspect input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Which raw record the finding refers to.
    pub reference: RecordRef,
    /// Logical table of the offending record.
    pub source: SourceTable,
    /// Field that failed, or a sentinel such as `blood_pressure` for
    /// cross-field findings.
    pub field: String,
    pub kind: ErrorKind,
    /// Human-readable description of the finding.
    pub message: String,
    /// Stringified offending input, empty when the value was absent.
    pub original_value: String,
    /// Creation time; metadata only, not part of the partition decision.
    pub created_at: DateTime<Utc>,
}

impl ErrorRecord {
    pub fn new(
        reference: RecordRef,
        source: SourceTable,
        field: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
        original_value: impl Into<String>,
    ) -> Self {
        Self {
            reference,
            source,
            field: field.into(),
            kind,
            message: message.into(),
            original_value: original_value.into(),
            created_at: Utc::now(),
        }
    }
}
