//! Integration tests for the import pipeline: parsing plus per-row rules.

use chrono::NaiveDate;

use crm_ingest::template_csv;
use crm_model::{CustomerStatus, RawRow, RowError};
use crm_validate::{import_batch, validate_row, validate_rows};

fn row(fields: &[(&'static str, &str)]) -> RawRow {
    let mut row = RawRow::new(2);
    for (field, value) in fields.iter().copied() {
        row.insert(field, value.to_string());
    }
    row
}

fn complete_row() -> RawRow {
    row(&[
        ("name", "Asha Rao"),
        ("phone", "9998887776"),
        ("floor", "2"),
    ])
}

#[test]
fn test_template_round_trip_is_valid_but_vacuous() {
    let batch = import_batch(&template_csv()).expect("template parses");
    assert!(batch.records.is_empty());
    assert!(batch.errors.is_empty());
    assert!(!batch.is_submittable());
}

#[test]
fn test_missing_required_fields_yield_one_error() {
    for missing in ["name", "phone", "floor"] {
        let mut raw = complete_row();
        raw.insert(missing, String::new());
        let error = validate_row(&raw).expect_err("required field enforced");
        assert_eq!(error.row, 2);
        assert_eq!(error.message, "Missing required fields (name, phone, floor)");
    }
}

#[test]
fn test_floor_boundaries() {
    for accepted in ["1", "5", "10"] {
        let mut raw = complete_row();
        raw.insert("floor", accepted.to_string());
        let record = validate_row(&raw).expect("in-range floor accepted");
        assert_eq!(record.floor.to_string(), accepted);
    }
    for rejected in ["0", "11", "abc"] {
        let mut raw = complete_row();
        raw.insert("floor", rejected.to_string());
        let error = validate_row(&raw).expect_err("out-of-range floor rejected");
        assert_eq!(error.message, "Invalid floor number (must be 1-10)");
    }
    // An empty floor is caught by the required-fields rule first.
    let mut raw = complete_row();
    raw.insert("floor", String::new());
    let error = validate_row(&raw).expect_err("empty floor rejected");
    assert_eq!(error.message, "Missing required fields (name, phone, floor)");
}

#[test]
fn test_status_enumeration() {
    for (cell, expected) in [
        ("VIP", CustomerStatus::Vip),
        ("Lead", CustomerStatus::Lead),
        ("", CustomerStatus::Active),
    ] {
        let mut raw = complete_row();
        raw.insert("status", cell.to_string());
        let record = validate_row(&raw).expect("status accepted");
        assert_eq!(record.status, expected);
    }

    let mut raw = complete_row();
    raw.insert("status", "unknown".to_string());
    let error = validate_row(&raw).expect_err("unknown status rejected");
    assert_eq!(
        error.message,
        "Invalid status 'unknown' (must be one of: active, inactive, lead, prospect, customer, vip)"
    );
}

#[test]
fn test_date_normalization_is_convergent() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
    for cell in ["2024-01-05", "01/05/2024", "2024-01-05T14:30:00"] {
        let mut raw = complete_row();
        raw.insert("visited_date", cell.to_string());
        let record = validate_row(&raw).expect("date accepted");
        assert_eq!(record.visited_date, expected);
    }
}

#[test]
fn test_invalid_date_names_the_field() {
    let mut raw = complete_row();
    raw.insert("date_of_birth", "31/31/1990".to_string());
    let error = validate_row(&raw).expect_err("invalid date rejected");
    assert_eq!(
        error.message,
        "Invalid date_of_birth '31/31/1990' (expected a date such as 2024-01-31)"
    );
}

#[test]
fn test_rules_short_circuit_in_order() {
    // Missing required field and a bad floor: only the required error fires.
    let raw = row(&[("name", ""), ("phone", "9991112223"), ("floor", "99")]);
    let error = validate_row(&raw).expect_err("first rule wins");
    assert_eq!(error.message, "Missing required fields (name, phone, floor)");

    // Bad floor and a bad status: the floor error fires.
    let raw = row(&[
        ("name", "Kiran Shah"),
        ("phone", "9994445556"),
        ("floor", "0"),
        ("status", "unknown"),
    ]);
    let error = validate_row(&raw).expect_err("floor rule precedes status");
    assert_eq!(error.message, "Invalid floor number (must be 1-10)");
}

#[test]
fn test_all_or_nothing_gate() {
    let content = "name,phone,floor\n\
                   A One,9000000001,1\n\
                   A Two,9000000002,2\n\
                   A Three,9000000003,3\n\
                   A Four,9000000004,4\n\
                   A Five,9000000005,99\n";
    let batch = import_batch(content).expect("parses");
    assert_eq!(batch.record_count(), 4);
    assert_eq!(batch.error_count(), 1);
    assert!(!batch.is_submittable());
}

#[test]
fn test_end_to_end_scenario() {
    let content = "name,phone,floor,status\n\
                   Asha Rao,9998887776,2,lead\n\
                   ,9991112223,3,lead\n\
                   Kiran Shah,9994445556,12,customer\n";
    let batch = import_batch(content).expect("parses");

    assert_eq!(batch.record_count(), 1);
    assert_eq!(batch.records[0].name, "Asha Rao");
    assert_eq!(batch.records[0].status, CustomerStatus::Lead);

    assert_eq!(
        batch.errors,
        vec![
            RowError::new(3, "Missing required fields (name, phone, floor)"),
            RowError::new(4, "Invalid floor number (must be 1-10)"),
        ]
    );
    assert!(!batch.is_submittable());
}

#[test]
fn test_structural_and_rule_errors_merge_in_file_order() {
    let content = "name,phone,floor\n\
                   ,9991112223,3\n\
                   Short Row,900\n\
                   Asha Rao,9998887776,2\n";
    let batch = import_batch(content).expect("parses");
    assert_eq!(batch.record_count(), 1);
    let rows: Vec<usize> = batch.errors.iter().map(|error| error.row).collect();
    assert_eq!(rows, vec![2, 3]);
    assert!(batch.errors[1].message.starts_with("Insufficient columns"));
}

#[test]
fn test_whitespace_only_required_field_is_missing() {
    let content = "name,phone,floor\n   ,9991112223,3\n";
    let batch = import_batch(content).expect("parses");
    assert_eq!(batch.record_count(), 0);
    assert_eq!(
        batch.errors,
        vec![RowError::new(
            2,
            "Missing required fields (name, phone, floor)"
        )]
    );
}

#[test]
fn test_validate_rows_is_pure_partitioning() {
    let good = complete_row();
    let mut bad = complete_row();
    bad.insert("floor", "12".to_string());

    let rows = vec![good, bad];
    let (records, errors) = validate_rows(&rows);
    assert_eq!(records.len(), 1);
    assert_eq!(errors.len(), 1);

    // A second pass over the same input yields the same result.
    let (records_again, errors_again) = validate_rows(&rows);
    assert_eq!(records_again, records);
    assert_eq!(errors_again, errors);
}

#[test]
fn test_optional_columns_flow_into_the_record() {
    let content = "name,phone,floor,email,city,ring_size,next_follow_up\n\
                   Asha Rao,9998887776,2,asha@example.com,Mumbai,12,2024-02-10\n";
    let batch = import_batch(content).expect("parses");
    let record = &batch.records[0];
    assert_eq!(record.email.as_deref(), Some("asha@example.com"));
    assert_eq!(record.city.as_deref(), Some("Mumbai"));
    assert_eq!(record.ring_size.as_deref(), Some("12"));
    assert_eq!(record.next_follow_up, NaiveDate::from_ymd_opt(2024, 2, 10));
    assert_eq!(record.notes, None);
}
