//! Tolerant numeric coercion for biometric fields.
//!
//! CSV-shaped extractions deliver numbers as strings; JSON-shaped ones as
//! numbers. Both coerce here, and "absent" stays distinct from "malformed"
//! so the validator can report each unambiguously.

use serde_json::Value;

/// Outcome of coercing one raw scalar to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericCoercion {
    /// No usable value: field absent, null, or an empty string.
    Absent,
    Value(f64),
    /// A value is present but is not a number.
    Malformed,
}

/// Coerce a raw field value to `f64`.
pub fn coerce_f64(value: Option<&Value>) -> NumericCoercion {
    match value {
        None | Some(Value::Null) => NumericCoercion::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => NumericCoercion::Value(v),
            _ => NumericCoercion::Malformed,
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return NumericCoercion::Absent;
            }
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => NumericCoercion::Value(v),
                _ => NumericCoercion::Malformed,
            }
        }
        Some(_) => NumericCoercion::Malformed,
    }
}
