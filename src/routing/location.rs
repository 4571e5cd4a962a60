//! Split locations into path, query and hash.

use std::fmt;

use serde::Serialize;

/// A base-relative location: the part of a URL the route table sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,

    /// Raw query string without the leading '?'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Raw fragment without the leading '#'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Location {
    /// Parse `raw` ("/path?query#hash"). A missing leading '/' is added and
    /// an empty path becomes "/". Empty query or hash parts are dropped.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: normalize_path(path),
            query,
            hash,
        }
    }

    /// Same query and hash, different path.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            query: self.query.clone(),
            hash: self.hash.clone(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

fn non_empty(part: &str) -> Option<String> {
    if part.is_empty() {
        None
    } else {
        Some(part.to_string())
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
