//! Batch submission for validated customer imports.
//!
//! [`BulkCreateCustomers`] is the seam to the external "bulk create
//! customers" collaborator: one call carries the full ordered record list
//! plus the batch's idempotency key, and the collaborator answers with an
//! aggregate acknowledgement or a failure whose message is surfaced
//! verbatim. No partial-success semantics are modeled; the collaborator is
//! atomic from the pipeline's perspective.
//!
//! [`submit_batch`] enforces the all-or-nothing gate: a batch with any
//! validation error, or with nothing to import, is refused before the
//! collaborator is contacted. On failure the batch is left untouched so the
//! caller may retry without re-uploading; the retry reuses the same
//! idempotency key.

mod error;
mod payload;

pub use error::{Result, SubmitError};
pub use payload::{write_bulk_request_json, JsonDropCollaborator, REQUEST_FILE_NAME};

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crm_model::{ImportBatch, ParsedCustomer};

/// One bulk-create call: the batch's idempotency key and every record, in
/// file order.
#[derive(Debug, Serialize)]
pub struct BulkCreateRequest<'a> {
    pub idempotency_key: Uuid,
    pub customers: &'a [ParsedCustomer],
}

/// Collaborator acknowledgement for a successful bulk create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCreateAck {
    /// How many customers the collaborator created.
    pub created: usize,
    /// Optional collaborator-supplied detail (e.g. where the request landed).
    pub detail: Option<String>,
}

/// External bulk-create collaborator.
pub trait BulkCreateCustomers {
    fn bulk_create(&self, request: &BulkCreateRequest<'_>) -> Result<BulkCreateAck>;
}

/// Aggregate outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub created: usize,
    pub idempotency_key: Uuid,
    pub detail: Option<String>,
}

/// Submit a clean batch to the collaborator.
///
/// Refuses unclean or empty batches without contacting the collaborator.
/// The batch is borrowed, never consumed: after a [`SubmitError::Rejected`]
/// the caller still holds it and may retry with the same idempotency key.
pub fn submit_batch<C: BulkCreateCustomers>(
    collaborator: &C,
    batch: &ImportBatch,
) -> Result<SubmitOutcome> {
    if batch.has_errors() {
        warn!(
            batch_id = %batch.batch_id,
            errors = batch.error_count(),
            "submission refused: batch has validation errors"
        );
        return Err(SubmitError::ValidationPending {
            count: batch.error_count(),
        });
    }
    if batch.records.is_empty() {
        return Err(SubmitError::EmptyBatch);
    }

    let request = BulkCreateRequest {
        idempotency_key: batch.batch_id,
        customers: &batch.records,
    };
    let ack = collaborator.bulk_create(&request)?;
    info!(
        batch_id = %batch.batch_id,
        created = ack.created,
        "batch submitted"
    );
    Ok(SubmitOutcome {
        created: ack.created,
        idempotency_key: batch.batch_id,
        detail: ack.detail,
    })
}
