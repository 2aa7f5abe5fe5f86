use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::values::FieldValues;

/// A validated, normalized patient.
///
/// Identifier and name are always present; every other field is optional
/// but, when present, has passed its format check and is canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    /// Date of birth, canonical `YYYY-MM-DD`.
    pub dob: Option<NaiveDate>,
    /// Title-cased free text, not enumerated.
    pub gender: Option<String>,
    /// Title-cased free text, not enumerated.
    pub sex: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl PatientRecord {
    /// Build from validated field values. Fails only when validation let a
    /// record through without its mandatory fields.
    pub fn from_values(values: &FieldValues) -> Result<Self> {
        Ok(Self {
            id: values.require_text("id")?,
            name: values.require_text("name")?,
            dob: values.date("dob"),
            gender: values.owned_text("gender"),
            sex: values.owned_text("sex"),
            address: values.owned_text("address"),
            email: values.owned_text("email"),
            phone: values.owned_text("phone"),
        })
    }
}
