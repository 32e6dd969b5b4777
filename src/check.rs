//! The libdevice availability check.
//!
//! Reads `CUDA_PATH`, derives the two conventional libdevice locations
//! beneath it, and probes them in order. The check is total: a missing
//! variable, a missing file, or an unreadable directory all resolve into a
//! negative [`CheckReport`], never an error.

use std::env::VarError;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variable naming the CUDA toolkit installation root.
pub const CUDA_PATH_VAR: &str = "CUDA_PATH";

/// File name of the libdevice bitcode library.
pub const LIBDEVICE_FILE: &str = "libdevice.10.bc";

/// Result of a libdevice availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Value of `CUDA_PATH`, when set to a non-empty string.
    pub base_path: Option<PathBuf>,

    /// Candidate locations probed, in order. Empty when no base path is
    /// configured (candidates are never derived without one).
    pub candidates: Vec<PathBuf>,

    /// First candidate, in declared order, that exists on the filesystem.
    pub found: Option<PathBuf>,

    /// Whether libdevice was found at any candidate location.
    pub available: bool,
}

impl CheckReport {
    fn not_configured() -> Self {
        Self {
            base_path: None,
            candidates: Vec::new(),
            found: None,
            available: false,
        }
    }
}

/// Candidate libdevice locations beneath a CUDA installation root, in probe
/// order. The nvvm layout wins over the flat lib64 layout when both exist.
pub fn candidate_paths(base: &Path) -> Vec<PathBuf> {
    vec![
        base.join("nvvm").join("libdevice").join(LIBDEVICE_FILE),
        base.join("lib64").join(LIBDEVICE_FILE),
    ]
}

/// Run the availability check against the process environment.
pub fn check() -> CheckReport {
    check_with_env(|key| std::env::var(key))
}

/// Run the availability check with an injected environment reader.
///
/// Tests use this to pin `CUDA_PATH` without mutating process state.
pub fn check_with_env<F>(env: F) -> CheckReport
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let base = match env(CUDA_PATH_VAR) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        // Unset, empty, and non-Unicode all mean "not configured".
        Ok(_) | Err(_) => {
            tracing::debug!("{} is not set", CUDA_PATH_VAR);
            return CheckReport::not_configured();
        }
    };

    let candidates = candidate_paths(&base);

    // Path::exists folds stat failures (permission denial included) into
    // false, so the probe cannot abort.
    let found = candidates.iter().find(|p| p.exists()).cloned();

    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "libdevice located"),
        None => tracing::debug!(base = %base.display(), "no candidate path exists"),
    }

    CheckReport {
        base_path: Some(base),
        available: found.is_some(),
        candidates,
        found,
    }
}
