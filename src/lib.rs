//! Sitebuild - static site build tool
//!
//! Sitebuild produces the deployable copy of a site's entry page. The source
//! page carries a literal `__API_BASE__` marker wherever client-side code
//! needs to reach the backend; the build step replaces the marker with the
//! value of `API_BASE_URL` and writes the result into a fresh output
//! directory.

pub mod build;
pub mod config;
pub mod error;
pub mod fs;

// Re-exports for convenience
pub use build::{inject, run_build, BuildOptions, BuildReport};
pub use config::{ApiBase, API_BASE_ENV, PLACEHOLDER_TOKEN};
pub use error::{SiteError, SiteResult};
