//! API base resolution
//!
//! The deployed page needs to know where the backend lives. Rather than
//! resolving it at runtime, the build bakes the URL in: the source page
//! carries a literal `__API_BASE__` marker, and the build step replaces it
//! with the value of the `API_BASE_URL` environment variable.

use std::env;

use serde::Serialize;

/// Environment variable holding the backend URL.
pub const API_BASE_ENV: &str = "API_BASE_URL";

/// Marker replaced in the source page at build time.
pub const PLACEHOLDER_TOKEN: &str = "__API_BASE__";

/// Display form used in build reports when the resolved value is empty.
const PLACEHOLDER_LABEL: &str = "[placeholder]";

/// Resolved API base value for a single build run.
///
/// Immutable once resolved; both the substitution and the console report
/// read from the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiBase {
    value: String,
}

impl ApiBase {
    /// Resolve from the `API_BASE_URL` environment variable.
    pub fn from_env() -> Self {
        Self::resolve(env::var(API_BASE_ENV).ok().as_deref())
    }

    /// Resolve from a raw environment value.
    ///
    /// Surrounding whitespace is trimmed. A value that is still non-empty has
    /// all trailing `/` characters stripped, so the page can append paths
    /// like `{base}/v1` without producing a double slash. An absent or blank
    /// value falls back to the literal `__API_BASE__` token, leaving the
    /// marker in place for a later environment-specific build.
    ///
    /// A value that trims non-empty but consists only of slashes (`"///"`)
    /// resolves to the empty string, not the token.
    pub fn resolve(raw: Option<&str>) -> Self {
        let trimmed = raw.unwrap_or("").trim();
        let value = if trimmed.is_empty() {
            PLACEHOLDER_TOKEN.to_string()
        } else {
            trimmed.trim_end_matches('/').to_string()
        };
        Self { value }
    }

    /// The value substituted into the page.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Human-readable form for the build report.
    ///
    /// The empty value displays as `[placeholder]`; everything else,
    /// including the `__API_BASE__` token itself, displays verbatim.
    pub fn label(&self) -> &str {
        if self.value.is_empty() {
            PLACEHOLDER_LABEL
        } else {
            &self.value
        }
    }
}
