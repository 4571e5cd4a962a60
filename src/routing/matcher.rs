//! Path normalisation for route matching.
//!
//! # Responsibilities
//! - Reduce a path to the key used for table lookup
//! - Apply trailing-slash and case rules consistently for matching and
//!   for duplicate detection
//!
//! # Design Decisions
//! - Non-strict by default: "/gantt-chart/" matches "/gantt-chart"
//! - Case-insensitive by default (ASCII only)
//! - Exact comparison of keys, no wildcards, O(1) lookup

use serde::{Deserialize, Serialize};

/// Matching rules shared by every route in a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Treat a trailing slash as significant.
    pub strict: bool,

    /// Compare paths case-sensitively.
    pub sensitive: bool,
}

impl MatchOptions {
    /// Lookup key for `path` under these options.
    pub fn key(&self, path: &str) -> String {
        let mut key = if path.is_empty() { "/" } else { path };

        if !self.strict {
            let trimmed = key.trim_end_matches('/');
            key = if trimmed.is_empty() { "/" } else { trimmed };
        }

        if self.sensitive {
            key.to_string()
        } else {
            key.to_ascii_lowercase()
        }
    }

    /// Returns true if `requested` refers to the declared path.
    pub fn matches(&self, declared: &str, requested: &str) -> bool {
        self.key(declared) == self.key(requested)
    }
}
