//! Filesystem helpers for the build step
//!
//! Writes go through tempfile + rename so a crash mid-write never leaves a
//! truncated page at the output path.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::SiteResult;

/// Write content to a file atomically.
///
/// The content is written to a temporary file in the destination directory,
/// then renamed over the target path.
pub fn atomic_write(path: &Path, content: &str) -> SiteResult<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Remove a directory tree if it exists, then recreate it empty.
///
/// Missing directories are not an error; intermediate directories are
/// created as needed.
pub fn reset_dir(path: &Path) -> SiteResult<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}
