//! Unit tests for the submission gate and the bundled collaborator.

use std::cell::RefCell;

use chrono::NaiveDate;
use uuid::Uuid;

use crm_model::{CustomerStatus, Floor, ImportBatch, ParsedCustomer, RowError};
use crm_submit::{
    submit_batch, BulkCreateAck, BulkCreateCustomers, BulkCreateRequest, JsonDropCollaborator,
    SubmitError, REQUEST_FILE_NAME,
};

fn customer(name: &str) -> ParsedCustomer {
    ParsedCustomer {
        name: name.to_string(),
        phone: "9998887776".to_string(),
        interest: None,
        floor: Floor::new(2).expect("floor in range"),
        visited_date: NaiveDate::from_ymd_opt(2024, 1, 5),
        status: CustomerStatus::Lead,
        notes: None,
        assigned_to: None,
        email: None,
        address: None,
        city: None,
        state: None,
        country: None,
        postal_code: None,
        date_of_birth: None,
        anniversary_date: None,
        community: None,
        mother_tongue: None,
        reason_for_visit: None,
        age_of_end_user: None,
        saving_scheme: None,
        catchment_area: None,
        next_follow_up: None,
        summary_notes: None,
        ring_size: None,
        customer_interests: None,
    }
}

fn clean_batch(records: usize) -> ImportBatch {
    let mut batch = ImportBatch::new();
    for index in 0..records {
        batch.records.push(customer(&format!("Customer {index}")));
    }
    batch
}

/// Records every request it sees; fails when primed with a message.
#[derive(Default)]
struct RecordingCollaborator {
    fail_with: Option<String>,
    seen_keys: RefCell<Vec<Uuid>>,
}

impl BulkCreateCustomers for RecordingCollaborator {
    fn bulk_create(
        &self,
        request: &BulkCreateRequest<'_>,
    ) -> Result<BulkCreateAck, SubmitError> {
        self.seen_keys.borrow_mut().push(request.idempotency_key);
        if let Some(message) = &self.fail_with {
            return Err(SubmitError::Rejected {
                message: message.clone(),
            });
        }
        Ok(BulkCreateAck {
            created: request.customers.len(),
            detail: None,
        })
    }
}

#[test]
fn test_unclean_batch_is_refused_before_the_collaborator() {
    let collaborator = RecordingCollaborator::default();
    let mut batch = clean_batch(2);
    batch
        .errors
        .push(RowError::new(3, "Invalid floor number (must be 1-10)"));

    let error = submit_batch(&collaborator, &batch).expect_err("gate refuses");
    assert!(matches!(error, SubmitError::ValidationPending { count: 1 }));
    assert!(collaborator.seen_keys.borrow().is_empty());
}

#[test]
fn test_empty_batch_is_refused() {
    let collaborator = RecordingCollaborator::default();
    let batch = clean_batch(0);
    let error = submit_batch(&collaborator, &batch).expect_err("gate refuses");
    assert!(matches!(error, SubmitError::EmptyBatch));
    assert!(collaborator.seen_keys.borrow().is_empty());
}

#[test]
fn test_success_reports_created_count_and_key() {
    let collaborator = RecordingCollaborator::default();
    let batch = clean_batch(3);
    let outcome = submit_batch(&collaborator, &batch).expect("submits");
    assert_eq!(outcome.created, 3);
    assert_eq!(outcome.idempotency_key, batch.batch_id);
}

#[test]
fn test_failure_message_is_surfaced_verbatim_and_retry_reuses_key() {
    let mut collaborator = RecordingCollaborator {
        fail_with: Some("tenant quota exceeded".to_string()),
        ..Default::default()
    };
    let batch = clean_batch(1);

    let error = submit_batch(&collaborator, &batch).expect_err("collaborator fails");
    assert_eq!(error.to_string(), "tenant quota exceeded");
    assert!(error.is_retryable());

    // The batch is untouched; a retry carries the same idempotency key.
    collaborator.fail_with = None;
    let outcome = submit_batch(&collaborator, &batch).expect("retry succeeds");
    assert_eq!(outcome.idempotency_key, batch.batch_id);
    let keys = collaborator.seen_keys.borrow();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0], keys[1]);
}

#[test]
fn test_json_drop_collaborator_stages_the_request() {
    let dir = tempfile::tempdir().expect("temp dir");
    let collaborator = JsonDropCollaborator::new(dir.path());
    let batch = clean_batch(2);

    let outcome = submit_batch(&collaborator, &batch).expect("submits");
    assert_eq!(outcome.created, 2);

    let path = dir.path().join(REQUEST_FILE_NAME);
    assert_eq!(outcome.detail.as_deref(), Some(path.display().to_string().as_str()));

    let raw = std::fs::read_to_string(&path).expect("read staged request");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["schema"], "crm-import.bulk-create-request");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["idempotency_key"], batch.batch_id.to_string());
    assert_eq!(value["customer_count"], 2);
    assert_eq!(value["customers"][0]["name"], "Customer 0");
    assert_eq!(value["customers"][0]["visited_date"], "2024-01-05");
}
