//! Canonical post-validation field values.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Result, VitalsError};

/// A single normalized value, in its canonical representation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Number(f64),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Date(_) => "date",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Number(_) => "number",
        }
    }
}

/// Normalized values keyed by schema field name, produced by validation.
///
/// Fields that were absent or failed validation simply have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn owned_text(&self, name: &str) -> Option<String> {
        self.text(name).map(ToOwned::to_owned)
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.values.get(name) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.values.get(name) {
            Some(FieldValue::Timestamp(ts)) => Some(*ts),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Text value of a mandatory field. Erring here means validation let a
    /// record through without it, which is a structural bug, not bad data.
    pub fn require_text(&self, name: &'static str) -> Result<String> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Ok(s.clone()),
            Some(other) => Err(VitalsError::TypeMismatch {
                field: name,
                expected: "text",
                actual: other.kind_name(),
            }),
            None => Err(VitalsError::MissingValue(name)),
        }
    }

    /// Timestamp value of a mandatory field; same contract as [`Self::require_text`].
    pub fn require_timestamp(&self, name: &'static str) -> Result<DateTime<Utc>> {
        match self.values.get(name) {
            Some(FieldValue::Timestamp(ts)) => Ok(*ts),
            Some(other) => Err(VitalsError::TypeMismatch {
                field: name,
                expected: "timestamp",
                actual: other.kind_name(),
            }),
            None => Err(VitalsError::MissingValue(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_ignore_other_kinds() {
        let mut values = FieldValues::new();
        values.insert("glucose", FieldValue::Number(120.5));
        values.insert("name", FieldValue::Text("Alice".to_string()));

        assert_eq!(values.number("glucose"), Some(120.5));
        assert_eq!(values.text("glucose"), None);
        assert_eq!(values.text("name"), Some("Alice"));
    }

    #[test]
    fn require_text_reports_missing_and_mismatch() {
        let mut values = FieldValues::new();
        values.insert("glucose", FieldValue::Number(120.5));

        assert!(matches!(
            values.require_text("id"),
            Err(VitalsError::MissingValue("id"))
        ));
        assert!(matches!(
            values.require_text("glucose"),
            Err(VitalsError::TypeMismatch { field: "glucose", .. })
        ));
    }
}
