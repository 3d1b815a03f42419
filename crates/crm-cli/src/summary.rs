use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crm_model::ImportBatch;

use crate::types::{CheckResult, ImportResult};

/// How many parsed records the preview table shows.
const PREVIEW_ROWS: usize = 10;

pub fn print_check_summary(result: &CheckResult) {
    println!("File: {}", result.file.display());
    if let Some(path) = &result.report_path {
        println!("Validation report: {}", path.display());
    }
    print_batch(&result.batch);
    if result.batch.has_errors() {
        println!();
        println!(
            "Import blocked: {} validation error(s). Fix the listed rows and re-check.",
            result.batch.error_count()
        );
    }
}

pub fn print_import_summary(result: &ImportResult) {
    println!("File: {}", result.file.display());
    print_batch(&result.batch);
    println!();
    match &result.outcome {
        Some(outcome) => {
            println!(
                "{} customers imported (batch {})",
                outcome.created, outcome.idempotency_key
            );
            if let Some(detail) = &outcome.detail {
                println!("Request staged at: {detail}");
            }
        }
        None if result.dry_run => println!("Dry run: submission skipped."),
        None => println!(
            "Import blocked: {} validation error(s). Fix the listed rows and retry.",
            result.batch.error_count()
        ),
    }
}

fn print_batch(batch: &ImportBatch) {
    println!(
        "Records: {} parsed, {} error(s)",
        batch.record_count(),
        batch.error_count()
    );
    print_error_table(batch);
    print_preview(batch);
}

fn print_error_table(batch: &ImportBatch) {
    if batch.errors.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Problem")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in &batch.errors {
        table.add_row(vec![
            Cell::new(error.row).fg(Color::Red),
            Cell::new(&error.message),
        ]);
    }
    println!();
    println!("Errors:");
    println!("{table}");
}

fn print_preview(batch: &ImportBatch) {
    if batch.records.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Phone"),
        header_cell("Floor"),
        header_cell("Status"),
        header_cell("Visited"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in batch.records.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(&record.phone),
            Cell::new(record.floor),
            Cell::new(record.status),
            date_cell(record.visited_date),
        ]);
    }
    println!();
    println!("Preview:");
    println!("{table}");
    if batch.records.len() > PREVIEW_ROWS {
        println!(
            "... and {} more record(s)",
            batch.records.len() - PREVIEW_ROWS
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn date_cell(date: Option<NaiveDate>) -> Cell {
    match date {
        Some(date) => Cell::new(date),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
