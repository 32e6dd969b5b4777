//! libdevice-check - CUDA libdevice availability diagnostic.
//!
//! Verifies that the libdevice bitcode library (`libdevice.10.bc`) is present
//! at one of the two conventional locations beneath the directory named by
//! `CUDA_PATH`, reports the outcome on stdout, and reflects it in the process
//! exit status so the check composes in scripts and CI pipelines.
//!
//! # Modules
//!
//! - [`check`] - The availability check and its report type
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`output`] - Output mode and gated writer
//!
//! # Example
//!
//! ```
//! use libdevice_check::check::check_with_env;
//!
//! // No CUDA_PATH in the environment: libdevice is not available.
//! let report = check_with_env(|_| Err(std::env::VarError::NotPresent));
//! assert!(!report.available);
//! assert!(report.candidates.is_empty());
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod output;

pub use check::{check, CheckReport};
pub use error::{CheckError, Result};
