//! Declarative field schemas for the two record kinds.
//!
//! Each schema is a table mapping field name to its normalization kind,
//! requirement, and plausible bounds. One generic validation routine in
//! `vitals-validate` interprets the table; no per-field bespoke code.

use crate::quality::SourceTable;

/// How a field's raw value is normalized and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty identifying string; numeric input is stringified.
    Identifier,
    /// Free text, kept as-is.
    Text,
    /// Free text normalized to title case.
    TitleCase,
    /// Calendar date, canonicalized to `YYYY-MM-DD`.
    Date,
    /// ISO 8601 date-time, canonicalized to a UTC instant.
    Timestamp,
    /// Basic email shape.
    Email,
    /// Basic phone shape.
    Phone,
    /// Numeric biometric.
    Numeric,
}

/// Whether absence of the field blocks emission of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Mandatory,
    Optional,
}

/// Inclusive plausible bounds for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One field of a record schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub bounds: Option<Bounds>,
}

impl FieldSpec {
    pub const fn mandatory(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Mandatory,
            bounds: None,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Optional,
            bounds: None,
        }
    }

    /// Optional numeric field with inclusive plausible bounds.
    pub const fn bounded(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric,
            requirement: Requirement::Optional,
            bounds: Some(Bounds::new(min, max)),
        }
    }

    pub fn is_mandatory(&self) -> bool {
        self.requirement == Requirement::Mandatory
    }
}

/// Declarative schema for one logical table.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub source: SourceTable,
    /// Field carrying the record identifier, used as the error reference.
    pub id_field: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

static PATIENT_FIELDS: [FieldSpec; 8] = [
    FieldSpec::mandatory("id", FieldKind::Identifier),
    FieldSpec::mandatory("name", FieldKind::Text),
    FieldSpec::optional("dob", FieldKind::Date),
    FieldSpec::optional("gender", FieldKind::TitleCase),
    FieldSpec::optional("sex", FieldKind::TitleCase),
    FieldSpec::optional("address", FieldKind::Text),
    FieldSpec::optional("email", FieldKind::Email),
    FieldSpec::optional("phone", FieldKind::Phone),
];

static READING_FIELDS: [FieldSpec; 7] = [
    FieldSpec::mandatory("reading_id", FieldKind::Identifier),
    FieldSpec::optional("patient_id", FieldKind::Identifier),
    // An unparseable timestamp would corrupt interpretation of the reading,
    // so the field blocks emission like an identifying field.
    FieldSpec::mandatory("timestamp", FieldKind::Timestamp),
    FieldSpec::bounded("glucose", 0.0, 1000.0),
    FieldSpec::bounded("systolic_bp", 0.0, 300.0),
    FieldSpec::bounded("diastolic_bp", 0.0, 300.0),
    FieldSpec::bounded("weight", 0.0, 1000.0),
];

/// Schema for patient records.
pub fn patient_schema() -> RecordSchema {
    RecordSchema {
        source: SourceTable::Patients,
        id_field: "id",
        fields: &PATIENT_FIELDS,
    }
}

/// Schema for device-reading records.
pub fn reading_schema() -> RecordSchema {
    RecordSchema {
        source: SourceTable::DeviceReadings,
        id_field: "reading_id",
        fields: &READING_FIELDS,
    }
}
