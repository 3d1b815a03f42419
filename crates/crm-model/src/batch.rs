use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::ParsedCustomer;

/// Why a row was excluded from the importable set.
///
/// Row numbers are 1-based and counted against the original file including
/// the header line, so messages map directly onto a spreadsheet view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

impl RowError {
    pub fn new(row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

/// The result of one import attempt over one uploaded file.
///
/// Created fresh per file selection and replaced wholesale when the user
/// picks a new file. The batch id is minted at creation and doubles as the
/// idempotency key for submission, so retrying the same batch reuses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: Uuid,
    pub records: Vec<ParsedCustomer>,
    pub errors: Vec<RowError>,
}

impl ImportBatch {
    pub fn new() -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            records: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All-or-nothing gate: submittable iff every row validated and at
    /// least one record was parsed.
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty() && !self.records.is_empty()
    }
}

impl Default for ImportBatch {
    fn default() -> Self {
        Self::new()
    }
}
