//! Calendar-date parsing for import cells.
//!
//! Spreadsheet exports arrive in a handful of shapes: ISO dates, slashed
//! dates, occasionally a full timestamp. A cell is accepted when any of the
//! known shapes parses; the time-of-day component, if present, is discarded.
//! Normalization rewrites the value to `YYYY-MM-DD` and is idempotent: an
//! already-normalized date re-parses to itself.
//!
//! Slashed dates are read as `MM/DD/YYYY`, matching what the CRM front end
//! produced; a `DD/MM/YYYY` interpretation is deliberately not attempted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only shapes, tried first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Date-and-time shapes. RFC 3339 values (trailing `Z` or offset) are
/// handled separately.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a cell as a calendar date, discarding any time component.
///
/// Returns `None` for empty cells and for values that match no known shape.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    None
}

/// Normalize a cell to canonical `YYYY-MM-DD` form.
pub fn normalize_date(value: &str) -> Option<String> {
    parse_flexible_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}
