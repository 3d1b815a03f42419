//! Import template generation.
//!
//! The template is a header-only delimited file describing the expected
//! schema: the catalog field names in canonical order, comma-joined, with a
//! trailing newline. Generation is a pure function of the static schema, so
//! two calls yield byte-identical output.

use std::path::Path;

use crm_model::schema::canonical_header;
use crm_model::Result;

/// Conventional file name for the downloadable template.
pub const TEMPLATE_FILE_NAME: &str = "customers_import_template.csv";

/// The template content: one header line plus a trailing newline, no data
/// rows.
pub fn template_csv() -> String {
    let mut content = canonical_header();
    content.push('\n');
    content
}

/// Write the template to `path`.
pub fn write_template(path: &Path) -> Result<()> {
    std::fs::write(path, template_csv())?;
    Ok(())
}
