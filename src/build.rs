//! The build step
//!
//! A build is a strict sequence: check the source page exists, read it,
//! inject the API base, reset the output directory, write the result. The
//! output directory is owned by the build and is deleted and recreated on
//! every run, so nothing may rely on its prior contents surviving.

use std::fs;
use std::path::PathBuf;

use crate::config::{ApiBase, PLACEHOLDER_TOKEN};
use crate::error::{SiteError, SiteResult};

/// Name of the page, both as source and inside the output directory.
pub const PAGE_NAME: &str = "index.html";

/// Default output directory.
pub const DIST_DIR: &str = "dist";

/// Options for a single build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the source page
    pub source: PathBuf,
    /// Output directory, deleted and recreated on every run
    pub out_dir: PathBuf,
    /// Compute and report without touching the filesystem
    pub dry_run: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(PAGE_NAME),
            out_dir: PathBuf::from(DIST_DIR),
            dry_run: false,
        }
    }
}

/// Outcome of a successful build run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The value injected in place of the marker
    pub api_base: ApiBase,
    /// Path of the generated page
    pub output: PathBuf,
    /// Whether the run was a dry run (nothing written)
    pub dry_run: bool,
}

/// Replace every literal occurrence of the `__API_BASE__` marker.
///
/// Plain, global, non-overlapping substring replacement; no other text is
/// altered.
pub fn inject(html: &str, api_base: &str) -> String {
    html.replace(PLACEHOLDER_TOKEN, api_base)
}

/// Run the build step.
///
/// Fails with [`SiteError::MissingSource`] before any filesystem mutation if
/// the source page is absent. Every other I/O fault propagates unclassified;
/// there is no retry or partial-success state.
pub fn run_build(options: &BuildOptions, api_base: &ApiBase) -> SiteResult<BuildReport> {
    if !options.source.exists() {
        return Err(SiteError::MissingSource {
            path: options.source.clone(),
        });
    }

    let html = fs::read_to_string(&options.source)?;
    let rendered = inject(&html, api_base.as_str());

    let output = options.out_dir.join(PAGE_NAME);
    if !options.dry_run {
        crate::fs::reset_dir(&options.out_dir)?;
        crate::fs::atomic_write(&output, &rendered)?;
    }

    Ok(BuildReport {
        api_base: api_base.clone(),
        output,
        dry_run: options.dry_run,
    })
}
