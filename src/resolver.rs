// SPDX-License-Identifier: MIT
//! Input resolution: glob expansion with deterministic ordering

use std::path::PathBuf;

/// Errors that can occur during input resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read matched path: {0}")]
    Read(#[from] glob::GlobError),
}

/// Expand a search pattern into the matching paths, sorted ascending by
/// their path string.
///
/// The explicit sort makes the result independent of the platform's native
/// directory enumeration order: an unchanged filesystem yields the same
/// list on every run. Zero matches is not an error and returns an empty
/// list. Matches are not filtered by file type; a matched directory
/// surfaces later as a read failure in the writer pass.
pub fn resolve_inputs(pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort_unstable_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(paths)
}
