//! JSON validation report artifact.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crm_model::{ImportBatch, RowError};

const REPORT_SCHEMA: &str = "crm-import.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ValidationReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    batch_id: String,
    record_count: usize,
    error_count: usize,
    errors: &'a [RowError],
}

/// Write the batch's per-row errors to `validation_report.json` under
/// `output_dir`, returning the written path.
pub fn write_validation_report_json(output_dir: &Path, batch: &ImportBatch) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        batch_id: batch.batch_id.to_string(),
        record_count: batch.record_count(),
        error_count: batch.error_count(),
        errors: &batch.errors,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
