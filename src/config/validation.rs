//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route entry names exactly one target
//! - Validate the base URL, bind address and timeouts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Table invariants (uniqueness, redirects) are checked by RouteTable

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::base::{BasePath, BasePathError};
use crate::routing::route::{Route, RouteTarget, ViewRef};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("route {path:?} sets both view and redirect")]
    ConflictingTarget { path: String },

    #[error("route {path:?} needs a view, a redirect or a name")]
    MissingTarget { path: String },

    #[error("route {path:?} has an empty {field}")]
    EmptyField { path: String, field: &'static str },

    #[error(transparent)]
    BaseUrl(#[from] BasePathError),

    #[error("invalid bind address {0:?}")]
    BindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

impl RouteConfig {
    /// Convert this entry into a route.
    pub fn to_route(&self) -> Result<Route, ValidationError> {
        let path = self.path.clone();
        for (field, value) in [
            ("path", Some(&self.path)),
            ("name", self.name.as_ref()),
            ("view", self.view.as_ref()),
            ("redirect", self.redirect.as_ref()),
        ] {
            if value.is_some_and(|v| v.trim().is_empty()) {
                return Err(ValidationError::EmptyField { path, field });
            }
        }

        let target = match (&self.view, &self.redirect, &self.name) {
            (Some(_), Some(_), _) => return Err(ValidationError::ConflictingTarget { path }),
            (None, Some(to), _) => RouteTarget::Redirect(to.clone()),
            (Some(view), None, _) => RouteTarget::View(ViewRef::new(view.as_str())),
            (None, None, Some(name)) => RouteTarget::View(ViewRef::new(name.as_str())),
            (None, None, None) => return Err(ValidationError::MissingTarget { path }),
        };

        Ok(Route {
            path,
            name: self.name.clone(),
            target,
        })
    }
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    errors.extend(config.routes.iter().filter_map(|entry| entry.to_route().err()));

    if let Err(e) = BasePath::parse(&config.base_url) {
        errors.push(e.into());
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
