//! Bulk-create request staging.
//!
//! The bundled collaborator does not speak to the CRM directly: it stages
//! the request as a JSON artifact for the ingestion endpoint to pick up,
//! which keeps the concrete transport outside this crate.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::{BulkCreateAck, BulkCreateCustomers, BulkCreateRequest};

const REQUEST_SCHEMA: &str = "crm-import.bulk-create-request";
const REQUEST_SCHEMA_VERSION: u32 = 1;

/// Conventional file name for the staged request.
pub const REQUEST_FILE_NAME: &str = "bulk_create_request.json";

#[derive(Debug, Serialize)]
struct BulkRequestPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    idempotency_key: String,
    customer_count: usize,
    customers: &'a [crm_model::ParsedCustomer],
}

/// Write the request as pretty JSON under `output_dir`, returning the path.
pub fn write_bulk_request_json(output_dir: &Path, request: &BulkCreateRequest<'_>) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(REQUEST_FILE_NAME);
    let payload = BulkRequestPayload {
        schema: REQUEST_SCHEMA,
        schema_version: REQUEST_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        idempotency_key: request.idempotency_key.to_string(),
        customer_count: request.customers.len(),
        customers: request.customers,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

/// Collaborator that stages requests on disk for the CRM's bulk-create
/// endpoint, acknowledging with the staged path.
#[derive(Debug, Clone)]
pub struct JsonDropCollaborator {
    output_dir: PathBuf,
}

impl JsonDropCollaborator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl BulkCreateCustomers for JsonDropCollaborator {
    fn bulk_create(&self, request: &BulkCreateRequest<'_>) -> Result<BulkCreateAck> {
        let path = write_bulk_request_json(&self.output_dir, request)?;
        info!(
            idempotency_key = %request.idempotency_key,
            customers = request.customers.len(),
            path = %path.display(),
            "bulk-create request staged"
        );
        Ok(BulkCreateAck {
            created: request.customers.len(),
            detail: Some(path.display().to_string()),
        })
    }
}
