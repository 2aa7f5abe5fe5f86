//! Pure field normalization for the vitals pipeline.
//!
//! These functions canonicalize raw field values before validation:
//!
//! - **datetime**: calendar dates to `YYYY-MM-DD`, timestamps to UTC instants
//! - **text**: arbitrary-case free text to title case
//! - **numeric**: tolerant string/number coercion for biometrics
//!
//! Each function either returns the canonical value or signals that
//! normalization is impossible; nothing here decides record validity.

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::{format_date, format_timestamp, normalize_date, normalize_timestamp};
pub use numeric::{NumericCoercion, coerce_f64};
pub use text::title_case;
