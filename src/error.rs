//! Error types for sitebuild
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitebuild operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Main error type for sitebuild operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Source page missing at the expected path. Checked before any
    /// filesystem mutation, so the output directory is left untouched.
    #[error("source {path} not found - build aborted")]
    MissingSource { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
