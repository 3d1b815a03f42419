//! Customer import validation.
//!
//! The entry point is [`import_batch`]: one call per user-initiated import
//! action, composing the record parser with the per-row rules into a fresh
//! [`ImportBatch`]. Structural and validation errors are merged in file
//! order; any error blocks submission at the batch level, so the pipeline
//! never imports a subset of valid rows while discarding invalid ones.

pub mod dates;
mod report;
mod rules;

pub use report::write_validation_report_json;
pub use rules::{validate_row, validate_rows};

use tracing::info;

use crm_ingest::parse_rows;
use crm_model::{ImportBatch, Result};

/// Parse and validate the complete content of an import file.
///
/// Each data row yields either one [`ParsedCustomer`](crm_model::ParsedCustomer)
/// or one [`RowError`](crm_model::RowError), never both, never neither.
/// Top-level failures (empty file, malformed header) abort before any row
/// is processed.
pub fn import_batch(content: &str) -> Result<ImportBatch> {
    let parsed = parse_rows(content)?;
    let (records, rule_errors) = validate_rows(&parsed.rows);

    let mut batch = ImportBatch::new();
    batch.records = records;
    batch.errors = parsed.errors;
    batch.errors.extend(rule_errors);
    batch.errors.sort_by_key(|error| error.row);

    info!(
        batch_id = %batch.batch_id,
        records = batch.record_count(),
        errors = batch.error_count(),
        "import batch assembled"
    );
    Ok(batch)
}
