use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use crm_ingest::{write_template, TEMPLATE_FILE_NAME};
use crm_model::schema::FIELDS;
use crm_model::ImportBatch;
use crm_submit::{submit_batch, JsonDropCollaborator};
use crm_validate::{import_batch, write_validation_report_json};

use crate::cli::{CheckArgs, ImportArgs, TemplateArgs};
use crate::summary::apply_table_style;
use crate::types::{CheckResult, ImportResult};

pub fn run_template(args: &TemplateArgs) -> Result<PathBuf> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME));
    write_template(&path).with_context(|| format!("write template: {}", path.display()))?;
    info!(path = %path.display(), "template written");
    Ok(path)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check", file = %args.file.display());
    let _guard = span.enter();

    let batch = load_batch(&args.file)?;
    let report_path = match &args.report_dir {
        Some(dir) => Some(
            write_validation_report_json(dir, &batch).context("write validation report")?,
        ),
        None => None,
    };
    Ok(CheckResult {
        file: args.file.clone(),
        batch,
        report_path,
    })
}

pub fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let span = info_span!("import", file = %args.file.display());
    let _guard = span.enter();

    let batch = load_batch(&args.file)?;
    if batch.has_errors() || args.dry_run {
        return Ok(ImportResult {
            file: args.file.clone(),
            batch,
            outcome: None,
            dry_run: args.dry_run,
        });
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.file));
    let collaborator = JsonDropCollaborator::new(output_dir);
    let outcome = submit_batch(&collaborator, &batch)?;
    Ok(ImportResult {
        file: args.file.clone(),
        batch,
        outcome: Some(outcome),
        dry_run: false,
    })
}

pub fn run_fields() {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Required", "Kind"]);
    apply_table_style(&mut table);
    for spec in FIELDS {
        table.add_row(vec![
            spec.name.to_string(),
            if spec.required { "yes" } else { "" }.to_string(),
            spec.kind.label().to_string(),
        ]);
    }
    println!("{table}");
}

fn load_batch(file: &Path) -> Result<ImportBatch> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("read import file: {}", file.display()))?;
    let batch =
        import_batch(&content).with_context(|| format!("parse import file: {}", file.display()))?;
    Ok(batch)
}

fn default_output_dir(file: &Path) -> PathBuf {
    file.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
