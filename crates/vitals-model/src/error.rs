use thiserror::Error;

#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("missing value for mandatory field `{0}`")]
    MissingValue(&'static str),
    #[error("field `{field}` holds a {actual} value, expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VitalsError>;
