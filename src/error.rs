//! Error types for libdevice-check.
//!
//! The availability check itself is total and converts every condition
//! (unset variable, missing file, unreadable directory) into its report;
//! these errors cover only the CLI rendering surface.

use thiserror::Error;

/// Error type for CLI-level operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Failed to encode the report for machine-readable output.
    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for libdevice-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
