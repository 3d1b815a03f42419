use std::path::PathBuf;

use crm_model::ImportBatch;
use crm_submit::SubmitOutcome;

/// Result of `crm-import check`.
#[derive(Debug)]
pub struct CheckResult {
    pub file: PathBuf,
    pub batch: ImportBatch,
    pub report_path: Option<PathBuf>,
}

/// Result of `crm-import import`.
#[derive(Debug)]
pub struct ImportResult {
    pub file: PathBuf,
    pub batch: ImportBatch,
    /// Present only when the batch was clean and submission ran.
    pub outcome: Option<SubmitOutcome>,
    pub dry_run: bool,
}
