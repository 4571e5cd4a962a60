//! Routing error types.

use thiserror::Error;

/// Route table invariant violations, detected when the table is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("route path {0:?} must start with '/' and have no query or fragment")]
    InvalidPath(String),

    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("no route is declared for \"/\"")]
    MissingRootRedirect,

    #[error("the \"/\" route must be a redirect")]
    RootNotRedirect,

    #[error("redirect from {from:?} points to unknown path {to:?}")]
    DanglingRedirect { from: String, to: String },

    #[error("redirect cycle: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),
}

/// Failures surfaced by lookups and navigation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("unknown route name {0:?}")]
    UnknownRouteName(String),

    #[error("no route matches {0:?}")]
    NotFound(String),

    #[error("redirect loop: {}", .0.join(" -> "))]
    RedirectLoop(Vec<String>),

    #[error("already at {0:?}")]
    Duplicated(String),
}

/// Joins a list of errors into one line for display.
pub(crate) fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
