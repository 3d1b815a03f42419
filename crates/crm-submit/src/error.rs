//! Error types for batch submission.

use thiserror::Error;

/// Why a batch could not be submitted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The batch still carries validation errors; submission is refused
    /// before the collaborator is contacted.
    #[error("batch has {count} validation error(s); fix the file and re-import")]
    ValidationPending {
        /// Number of outstanding row errors.
        count: usize,
    },

    /// The batch parsed cleanly but contains no records.
    #[error("batch has no records to import")]
    EmptyBatch,

    /// The bulk-create collaborator reported failure. The message is
    /// surfaced verbatim; the batch is retained so the caller may retry.
    #[error("{message}")]
    Rejected {
        /// Collaborator-supplied failure message.
        message: String,
    },

    /// I/O error while staging the request.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while staging the request.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SubmitError {
    /// Whether retrying the same batch can succeed without editing the file.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Io(_))
    }

    /// A user-facing hint for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ValidationPending { .. } => {
                Some("Fix the listed rows in the spreadsheet and re-select the file.")
            }
            Self::EmptyBatch => Some("Add at least one data row below the header."),
            Self::Rejected { .. } => {
                Some("The batch was kept; retry the import without re-uploading.")
            }
            Self::Io(_) => Some("Check that the output directory is writable."),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
