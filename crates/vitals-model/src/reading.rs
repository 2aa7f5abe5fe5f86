use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::values::FieldValues;

/// A validated, normalized device reading.
///
/// The timestamp is a canonical UTC instant. Biometrics are independent
/// optionals; an absent entry means the raw value was missing or failed its
/// own check and was reported separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub id: String,
    /// Identifier of the owning patient, when the reading carried one.
    pub patient_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub glucose: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub diastolic_bp: Option<f64>,
    pub weight: Option<f64>,
}

impl ReadingRecord {
    /// Build from validated field values. Fails only when validation let a
    /// record through without its mandatory fields.
    pub fn from_values(values: &FieldValues) -> Result<Self> {
        Ok(Self {
            id: values.require_text("reading_id")?,
            patient_id: values.owned_text("patient_id"),
            timestamp: values.require_timestamp("timestamp")?,
            glucose: values.number("glucose"),
            systolic_bp: values.number("systolic_bp"),
            diastolic_bp: values.number("diastolic_bp"),
            weight: values.number("weight"),
        })
    }
}
