//! Route entries and view references.

use std::fmt;

use serde::Serialize;

/// Opaque identifier of a view component owned by the host.
///
/// The router never looks inside it; the host's composition root maps it
/// to a concrete component when mounting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewRef(String);

impl ViewRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What a route leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// Mount this view.
    View(ViewRef),
    /// Send the caller to another route path.
    Redirect(String),
}

/// One navigable path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Base-relative path, e.g. "/gantt-chart".
    pub path: String,

    /// Name used for programmatic navigation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub target: RouteTarget,
}

impl Route {
    /// A named route that mounts `view`.
    pub fn view(path: impl Into<String>, name: impl Into<String>, view: impl Into<ViewRef>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            target: RouteTarget::View(view.into()),
        }
    }

    /// An unnamed route redirecting to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    /// The view this route mounts, if it is not a redirect.
    pub fn view_ref(&self) -> Option<&ViewRef> {
        match &self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }

    /// The redirect destination, if this is a redirect.
    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }
}
