use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::CustomerStatus;

/// Showroom floor number, constrained to the closed range [1, 10].
///
/// Construction is fallible; an out-of-range or non-numeric value can never
/// produce a `Floor`. The range check also runs on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Floor(u8);

impl Floor {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Parse a trimmed cell value. Accepts only an integer in range.
    pub fn parse(value: &str) -> Option<Self> {
        let number: i64 = value.trim().parse().ok()?;
        u8::try_from(number).ok().and_then(Self::new)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Floor> for u8 {
    fn from(floor: Floor) -> Self {
        floor.0
    }
}

impl TryFrom<u8> for Floor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("floor out of range: {value}"))
    }
}

/// One data line after header mapping: the 1-based line number in the
/// original file (header counted as line 1) plus trimmed cells keyed by
/// canonical field name.
///
/// Ephemeral: a `RawRow` is consumed by validation and yields at most one
/// [`ParsedCustomer`].
#[derive(Debug, Clone)]
pub struct RawRow {
    line: usize,
    values: BTreeMap<&'static str, String>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            values: BTreeMap::new(),
        }
    }

    /// Line number against the original file, including the header line.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn insert(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
    }

    /// The trimmed cell for a field; empty when the column was absent.
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// The cell as an owned value, `None` when empty or absent.
    pub fn optional(&self, field: &str) -> Option<String> {
        let value = self.value(field);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// A fully validated customer record, ready for batch creation.
///
/// Only produced for rows that passed every validation rule; partial records
/// are never constructed. Date fields are typed and render as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCustomer {
    pub name: String,
    pub phone: String,
    pub interest: Option<String>,
    pub floor: Floor,
    pub visited_date: Option<NaiveDate>,
    pub status: CustomerStatus,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub anniversary_date: Option<NaiveDate>,
    pub community: Option<String>,
    pub mother_tongue: Option<String>,
    pub reason_for_visit: Option<String>,
    pub age_of_end_user: Option<String>,
    pub saving_scheme: Option<String>,
    pub catchment_area: Option<String>,
    pub next_follow_up: Option<NaiveDate>,
    pub summary_notes: Option<String>,
    pub ring_size: Option<String>,
    pub customer_interests: Option<String>,
}
