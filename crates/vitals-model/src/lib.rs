pub mod error;
pub mod patient;
pub mod quality;
pub mod raw;
pub mod reading;
pub mod schema;
pub mod values;

pub use error::{Result, VitalsError};
pub use patient::PatientRecord;
pub use quality::{ErrorKind, ErrorRecord, RecordRef, SourceTable};
pub use raw::{RawRecord, is_missing_value, value_to_string};
pub use reading::ReadingRecord;
pub use schema::{
    Bounds, FieldKind, FieldSpec, RecordSchema, Requirement, patient_schema, reading_schema,
};
pub use values::{FieldValue, FieldValues};
