//! Simulator error types.

use padzone_harness::HarnessError;
use thiserror::Error;

/// Errors that can occur while producing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Simulation failed.
    #[error("simulation error: {0}")]
    Harness(#[from] HarnessError),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
