//! Deployment base path.
//!
//! The base comes from the environment and is treated as an opaque prefix:
//! stripped from incoming locations, prepended to outgoing hrefs.

use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasePathError {
    #[error("invalid base URL {0:?}: {1}")]
    InvalidUrl(String, String),

    #[error("base path {0:?} must not contain a query or fragment")]
    QueryOrFragment(String),
}

/// Normalised base path. Stored without a trailing slash; the root base is
/// the empty prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    /// The root base ("/").
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a base from a path ("/app/") or an absolute URL
    /// ("https://host/app/"), in which case only its path is kept.
    pub fn parse(raw: &str) -> Result<Self, BasePathError> {
        let raw = raw.trim();

        let path = if raw.contains("://") {
            let url = Url::parse(raw)
                .map_err(|e| BasePathError::InvalidUrl(raw.to_string(), e.to_string()))?;
            if url.query().is_some() || url.fragment().is_some() {
                return Err(BasePathError::QueryOrFragment(raw.to_string()));
            }
            url.path().to_string()
        } else {
            if raw.contains('?') || raw.contains('#') {
                return Err(BasePathError::QueryOrFragment(raw.to_string()));
            }
            raw.to_string()
        };

        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            Ok(Self::root())
        } else {
            Ok(Self {
                prefix: format!("/{}", trimmed),
            })
        }
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Remove the base from an absolute path. Returns None if the path lies
    /// outside the base. The prefix is compared ASCII case-insensitively.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }

        let head = path.get(..self.prefix.len())?;
        if !head.eq_ignore_ascii_case(&self.prefix) {
            return None;
        }

        let rest = &path[self.prefix.len()..];
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            // "/application" is not under "/app"
            None
        }
    }

    /// Prefix a base-relative path (which starts with '/').
    pub fn prepend(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert!(BasePath::parse("/").unwrap().is_root());
        assert!(BasePath::parse("").unwrap().is_root());
        assert_eq!(BasePath::parse("/app/").unwrap().to_string(), "/app/");
        assert_eq!(BasePath::parse("app").unwrap().to_string(), "/app/");
        assert_eq!(
            BasePath::parse("https://example.com/tools/graph/").unwrap().to_string(),
            "/tools/graph/"
        );
    }

    #[test]
    fn test_parse_rejects_query() {
        assert!(matches!(
            BasePath::parse("/app/?x=1"),
            Err(BasePathError::QueryOrFragment(_))
        ));
        assert!(matches!(
            BasePath::parse("http://"),
            Err(BasePathError::InvalidUrl(_, _))
        ));
    }

    #[test]
    fn test_strip_and_prepend() {
        let base = BasePath::parse("/app/").unwrap();

        assert_eq!(base.strip("/app/gantt-chart"), Some("/gantt-chart"));
        assert_eq!(base.strip("/app"), Some("/"));
        assert_eq!(base.strip("/app/"), Some("/"));
        assert_eq!(base.strip("/application"), None);
        assert_eq!(base.strip("/gantt-chart"), None);
        assert_eq!(base.prepend("/gantt-chart"), "/app/gantt-chart");

        let root = BasePath::root();
        assert_eq!(root.strip("/gantt-chart"), Some("/gantt-chart"));
        assert_eq!(root.prepend("/gantt-chart"), "/gantt-chart");
    }

    #[test]
    fn test_strip_ignores_case() {
        let base = BasePath::parse("/App/").unwrap();

        assert_eq!(base.strip("/app/gantt-chart"), Some("/gantt-chart"));
        assert_eq!(base.strip("/APP"), Some("/"));
        assert_eq!(base.strip("/APPLICATION"), None);
        assert_eq!(base.strip("/ap"), None);
        assert_eq!(base.strip("/äpp/x"), None);
        assert_eq!(base.prepend("/gantt-chart"), "/App/gantt-chart");
    }
}
