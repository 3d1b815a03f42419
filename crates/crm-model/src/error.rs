use thiserror::Error;

/// Top-level import failures. Per-row problems are accumulated as
/// [`RowError`](crate::RowError)s instead and never surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed delimited input: {0}")]
    Malformed(String),
    #[error("import file is empty (no header line)")]
    EmptyFile,
    #[error("unrecognized column in header: '{column}'")]
    UnknownColumn { column: String },
    #[error("duplicate column in header: '{column}'")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
