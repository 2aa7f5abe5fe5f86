//! Calendar date and ISO 8601 timestamp normalization.
//!
//! Dates of birth arrive as `YYYY-MM-DD` or `MM/DD/YYYY` and canonicalize to
//! `YYYY-MM-DD`. Reading timestamps arrive as ISO 8601 date-times (with or
//! without an explicit offset, or date-only) and canonicalize to a
//! UTC-qualified instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse a raw date value into a canonical calendar date.
///
/// Accepts `YYYY-MM-DD` or `MM/DD/YYYY`; any other shape fails. chrono
/// rejects impossible calendar dates (month 13, Feb 30) during parsing.
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .ok()
}

/// Format a date in canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a raw timestamp into a canonical UTC instant.
///
/// Accepts ISO 8601 date-time with an explicit offset or `Z`, a naive
/// date-time (taken as UTC), or a bare date (taken as UTC midnight).
pub fn normalize_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    // No offset marker: the instant is taken to already be UTC.
    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
    for fmt in naive_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Format a timestamp in canonical UTC-qualified ISO 8601 form.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
