use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

/// The main error type for cocoset operations.
#[derive(Debug, Error)]
pub enum CocoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed with {} error(s) and {} warning(s)", .report.error_count(), .report.warning_count())]
    Validation { report: ValidationReport },
}
