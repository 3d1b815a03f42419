//! CLI argument definitions for the customer importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "crm-import",
    version,
    about = "Bulk customer import for the jewellery retail CRM",
    long_about = "Parse, validate, and stage bulk customer imports.\n\n\
                  Reads comma-separated files built from the import template, validates\n\
                  every row against the field catalog, and stages clean batches for the\n\
                  CRM's bulk-create endpoint. Submission is all-or-nothing: any\n\
                  validation error blocks the whole batch."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the header-only import template.
    Template(TemplateArgs),

    /// Parse and validate an import file without submitting.
    Check(CheckArgs),

    /// Parse, validate, and submit an import file.
    Import(ImportArgs),

    /// List the recognized import columns.
    Fields,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template (default: ./customers_import_template.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the import file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also write validation_report.json into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the import file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Directory where the bulk-create request is staged (default: next to FILE).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and preview without staging the request.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
