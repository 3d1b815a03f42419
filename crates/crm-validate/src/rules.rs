//! Per-row validation rules.
//!
//! Rules run in a fixed order and stop at the first failure, so a failing
//! row contributes exactly one error and is excluded from the parsed set.
//! Order: required fields, floor range, status enumeration, date fields.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dates::parse_flexible_date;
use crm_model::schema::{date_fields, REQUIRED_FIELDS};
use crm_model::{CustomerStatus, Floor, ParsedCustomer, RawRow, RowError};

/// Validate one raw row, producing either a fully typed record or the first
/// rule failure. Never both, never neither.
pub fn validate_row(row: &RawRow) -> Result<ParsedCustomer, RowError> {
    if REQUIRED_FIELDS
        .iter()
        .any(|&field| row.value(field).is_empty())
    {
        return Err(RowError::new(
            row.line(),
            "Missing required fields (name, phone, floor)",
        ));
    }

    let Some(floor) = Floor::parse(row.value("floor")) else {
        return Err(RowError::new(
            row.line(),
            "Invalid floor number (must be 1-10)",
        ));
    };

    let status_cell = row.value("status");
    let status = if status_cell.is_empty() {
        CustomerStatus::default()
    } else {
        status_cell.parse().map_err(|_| {
            RowError::new(
                row.line(),
                format!(
                    "Invalid status '{status_cell}' (must be one of: {})",
                    CustomerStatus::legal_values()
                ),
            )
        })?
    };

    let mut dates: BTreeMap<&'static str, NaiveDate> = BTreeMap::new();
    for spec in date_fields() {
        let cell = row.value(spec.name);
        if cell.is_empty() {
            continue;
        }
        let Some(date) = parse_flexible_date(cell) else {
            return Err(RowError::new(
                row.line(),
                format!(
                    "Invalid {} '{cell}' (expected a date such as 2024-01-31)",
                    spec.name
                ),
            ));
        };
        dates.insert(spec.name, date);
    }

    Ok(ParsedCustomer {
        name: row.value("name").to_string(),
        phone: row.value("phone").to_string(),
        interest: row.optional("interest"),
        floor,
        visited_date: dates.get("visited_date").copied(),
        status,
        notes: row.optional("notes"),
        assigned_to: row.optional("assigned_to"),
        email: row.optional("email"),
        address: row.optional("address"),
        city: row.optional("city"),
        state: row.optional("state"),
        country: row.optional("country"),
        postal_code: row.optional("postal_code"),
        date_of_birth: dates.get("date_of_birth").copied(),
        anniversary_date: dates.get("anniversary_date").copied(),
        community: row.optional("community"),
        mother_tongue: row.optional("mother_tongue"),
        reason_for_visit: row.optional("reason_for_visit"),
        age_of_end_user: row.optional("age_of_end_user"),
        saving_scheme: row.optional("saving_scheme"),
        catchment_area: row.optional("catchment_area"),
        next_follow_up: dates.get("next_follow_up").copied(),
        summary_notes: row.optional("summary_notes"),
        ring_size: row.optional("ring_size"),
        customer_interests: row.optional("customer_interests"),
    })
}

/// Validate every row, partitioning into parsed records and row errors.
///
/// Pure: the result is built fresh per call; no accumulator state is shared
/// across invocations.
pub fn validate_rows(rows: &[RawRow]) -> (Vec<ParsedCustomer>, Vec<RowError>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    for row in rows {
        match validate_row(row) {
            Ok(record) => records.push(record),
            Err(error) => errors.push(error),
        }
    }
    (records, errors)
}
