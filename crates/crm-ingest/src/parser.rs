//! Delimited record parsing.
//!
//! Turns the textual content of an uploaded file into header-mapped raw
//! rows. The header row determines positional binding, not the catalog:
//! whatever order the header declares is the order values are read in.
//! Structural problems (a data line shorter than the header) are accumulated
//! as row errors; a malformed header fails the whole parse.

use std::collections::BTreeSet;

use csv::ReaderBuilder;
use tracing::debug;

use crm_model::schema::canonical_name;
use crm_model::{ImportError, RawRow, Result, RowError};

/// Parser output: the resolved header, the mapped rows, and any structural
/// row errors, in file order.
#[derive(Debug)]
pub struct ParsedRows {
    /// Canonical field names in the order the header declared them.
    pub header: Vec<&'static str>,
    pub rows: Vec<RawRow>,
    pub errors: Vec<RowError>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse the complete content of an import file into raw rows.
///
/// The first non-blank line is the header; each column name is resolved
/// case-insensitively against the field schema. An unrecognized or
/// duplicated column name fails the parse, so a malformed template is
/// caught before any row is read. Rows whose cells are all empty are
/// discarded as blank. Line numbers come from the reader's position
/// tracking and count against the original file, header included.
pub fn parse_rows(content: &str) -> Result<ParsedRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut raw_rows: Vec<(usize, Vec<String>)> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ImportError::Malformed(error.to_string()))?;
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push((line, cells));
    }

    let mut remaining = raw_rows.into_iter();
    let Some((_, header_cells)) = remaining.next() else {
        return Err(ImportError::EmptyFile);
    };

    let mut header = Vec::with_capacity(header_cells.len());
    let mut seen = BTreeSet::new();
    for cell in &header_cells {
        let Some(name) = canonical_name(cell) else {
            return Err(ImportError::UnknownColumn {
                column: cell.clone(),
            });
        };
        if !seen.insert(name) {
            return Err(ImportError::DuplicateColumn {
                column: name.to_string(),
            });
        }
        header.push(name);
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (line, cells) in remaining {
        if cells.len() < header.len() {
            errors.push(RowError::new(
                line,
                format!(
                    "Insufficient columns (expected {}, found {})",
                    header.len(),
                    cells.len()
                ),
            ));
            continue;
        }
        // Cells beyond the header's column count are ignored.
        let mut row = RawRow::new(line);
        for (field, cell) in header.iter().copied().zip(cells) {
            row.insert(field, cell);
        }
        rows.push(row);
    }

    debug!(
        columns = header.len(),
        rows = rows.len(),
        structural_errors = errors.len(),
        "parsed raw rows"
    );
    Ok(ParsedRows {
        header,
        rows,
        errors,
    })
}
