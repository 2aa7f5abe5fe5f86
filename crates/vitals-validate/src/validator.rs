//! Generic schema-driven record validation.
//!
//! One routine interprets a declarative [`RecordSchema`] against one raw
//! record. Every field failure is accumulated into its own [`ErrorRecord`];
//! there is no short-circuit, so a caller sees every defect in one pass.
//!
//! Emission policy: a record is valid iff every mandatory field passed.
//! Optional-field failures still produce error records but leave the field
//! absent; optional range violations are advisory and keep the value.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use vitals_model::{
    ErrorKind, ErrorRecord, FieldKind, FieldSpec, FieldValue, FieldValues, PatientRecord,
    RawRecord, ReadingRecord, RecordRef, RecordSchema, is_missing_value, patient_schema,
    reading_schema,
};
use vitals_transform::{NumericCoercion, coerce_f64, normalize_date, normalize_timestamp, title_case};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern"));

/// Result of validating one raw record against a schema.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    /// Identifier-or-index reference for error reporting.
    pub reference: RecordRef,
    /// Canonical values for every field that passed.
    pub values: FieldValues,
    /// One entry per field-level failure, in schema order.
    pub errors: Vec<ErrorRecord>,
    valid: bool,
}

impl RecordOutcome {
    /// True when every mandatory field passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate one raw record against a schema, accumulating all failures.
pub fn validate_record(schema: &RecordSchema, raw: &RawRecord, index: usize) -> RecordOutcome {
    let reference = record_reference(schema, raw, index);
    let mut values = FieldValues::new();
    let mut errors = Vec::new();
    let mut valid = true;

    for spec in schema.fields {
        let raw_value = raw.get(spec.name);

        if is_missing_value(raw_value) {
            if spec.is_mandatory() {
                errors.push(field_error(
                    &reference,
                    schema,
                    spec.name,
                    ErrorKind::MissingField,
                    format!("mandatory field `{}` is absent or empty", spec.name),
                    raw.display_value(spec.name),
                ));
                valid = false;
            }
            continue;
        }

        // Not missing, so the field is present with a concrete value.
        let Some(value) = raw_value else { continue };
        match check_field(spec, value) {
            FieldOutcome::Value(canonical) => values.insert(spec.name, canonical),
            FieldOutcome::OutOfRange(canonical, message) => {
                // Advisory: the value is parseable, just implausible.
                errors.push(field_error(
                    &reference,
                    schema,
                    spec.name,
                    ErrorKind::OutOfRange,
                    message,
                    raw.display_value(spec.name),
                ));
                values.insert(spec.name, canonical);
            }
            FieldOutcome::Invalid(message) => {
                errors.push(field_error(
                    &reference,
                    schema,
                    spec.name,
                    ErrorKind::InvalidFormat,
                    message,
                    raw.display_value(spec.name),
                ));
                if spec.is_mandatory() {
                    valid = false;
                }
            }
            FieldOutcome::Absent => {}
        }
    }

    RecordOutcome {
        reference,
        values,
        errors,
        valid,
    }
}

/// Validate one raw patient record.
pub fn validate_patient(raw: &RawRecord, index: usize) -> (Option<PatientRecord>, Vec<ErrorRecord>) {
    let outcome = validate_record(&patient_schema(), raw, index);
    if !outcome.is_valid() {
        return (None, outcome.errors);
    }
    // from_values cannot fail once every mandatory field passed.
    match PatientRecord::from_values(&outcome.values) {
        Ok(patient) => (Some(patient), outcome.errors),
        Err(_) => (None, outcome.errors),
    }
}

/// Validate one raw device-reading record.
pub fn validate_reading(raw: &RawRecord, index: usize) -> (Option<ReadingRecord>, Vec<ErrorRecord>) {
    let outcome = validate_record(&reading_schema(), raw, index);
    if !outcome.is_valid() {
        return (None, outcome.errors);
    }
    match ReadingRecord::from_values(&outcome.values) {
        Ok(reading) => (Some(reading), outcome.errors),
        Err(_) => (None, outcome.errors),
    }
}

/// Use the record's own identifier when present, else its batch position.
fn record_reference(schema: &RecordSchema, raw: &RawRecord, index: usize) -> RecordRef {
    match raw.get(schema.id_field) {
        Some(Value::String(s)) if !s.trim().is_empty() => RecordRef::Id(s.trim().to_string()),
        Some(Value::Number(n)) => RecordRef::Id(n.to_string()),
        _ => RecordRef::Index(index),
    }
}

fn field_error(
    reference: &RecordRef,
    schema: &RecordSchema,
    field: &str,
    kind: ErrorKind,
    message: String,
    original_value: String,
) -> ErrorRecord {
    ErrorRecord::new(
        reference.clone(),
        schema.source,
        field,
        kind,
        message,
        original_value,
    )
}

enum FieldOutcome {
    /// Canonical value, field passed.
    Value(FieldValue),
    /// Value kept, with an advisory range finding.
    OutOfRange(FieldValue, String),
    /// Value unusable; field stays absent.
    Invalid(String),
    /// Coercion found nothing usable after all.
    Absent,
}

fn check_field(spec: &FieldSpec, value: &Value) -> FieldOutcome {
    match spec.kind {
        FieldKind::Identifier => match value {
            Value::String(s) => FieldOutcome::Value(FieldValue::Text(s.trim().to_string())),
            Value::Number(n) => FieldOutcome::Value(FieldValue::Text(n.to_string())),
            _ => FieldOutcome::Invalid(format!(
                "`{}` must be a string or numeric identifier",
                spec.name
            )),
        },
        FieldKind::Text => match value.as_str() {
            Some(s) => FieldOutcome::Value(FieldValue::Text(s.trim().to_string())),
            None => FieldOutcome::Invalid(format!("`{}` must be text", spec.name)),
        },
        FieldKind::TitleCase => match value.as_str() {
            Some(s) => FieldOutcome::Value(FieldValue::Text(title_case(s))),
            None => FieldOutcome::Invalid(format!("`{}` must be text", spec.name)),
        },
        FieldKind::Date => match value.as_str().and_then(normalize_date) {
            Some(date) => FieldOutcome::Value(FieldValue::Date(date)),
            None => FieldOutcome::Invalid(format!(
                "`{}` is not a calendar date; expected YYYY-MM-DD or MM/DD/YYYY",
                spec.name
            )),
        },
        FieldKind::Timestamp => match value.as_str().and_then(normalize_timestamp) {
            Some(ts) => FieldOutcome::Value(FieldValue::Timestamp(ts)),
            None => FieldOutcome::Invalid(format!(
                "`{}` is not an ISO 8601 date-time",
                spec.name
            )),
        },
        FieldKind::Email => check_pattern(spec, value, &EMAIL_RE, "email"),
        FieldKind::Phone => check_pattern(spec, value, &PHONE_RE, "phone"),
        FieldKind::Numeric => match coerce_f64(Some(value)) {
            NumericCoercion::Absent => FieldOutcome::Absent,
            NumericCoercion::Malformed => {
                FieldOutcome::Invalid(format!("`{}` is not numeric", spec.name))
            }
            NumericCoercion::Value(v) => match spec.bounds {
                Some(bounds) if !bounds.contains(v) => FieldOutcome::OutOfRange(
                    FieldValue::Number(v),
                    format!(
                        "`{}` value {v} outside plausible range {}-{}",
                        spec.name, bounds.min, bounds.max
                    ),
                ),
                _ => FieldOutcome::Value(FieldValue::Number(v)),
            },
        },
    }
}

fn check_pattern(spec: &FieldSpec, value: &Value, pattern: &Regex, shape: &str) -> FieldOutcome {
    match value.as_str() {
        Some(s) if pattern.is_match(s.trim()) => {
            FieldOutcome::Value(FieldValue::Text(s.trim().to_string()))
        }
        Some(_) | None => {
            FieldOutcome::Invalid(format!("`{}` does not match the {shape} shape", spec.name))
        }
    }
}
