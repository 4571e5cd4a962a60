//! Route table storage and invariant checks.
//!
//! # Responsibilities
//! - Store routes in declaration order
//! - Index routes by normalised path and by name
//! - Reject tables that break the invariants, reporting every problem
//!
//! # Invariants
//! - Every path starts with '/' and has no query or fragment
//! - Paths (after normalisation) and names are unique
//! - "/" is declared and is a redirect
//! - Every redirect chain ends at a view route

use std::collections::{HashMap, HashSet};

use super::error::TableError;
use super::location::Location;
use super::matcher::MatchOptions;
use super::route::Route;

/// Immutable, validated set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    options: MatchOptions,
}

impl RouteTable {
    /// Build a table, returning every invariant violation found.
    pub fn new(routes: Vec<Route>, options: MatchOptions) -> Result<Self, Vec<TableError>> {
        let mut errors = Vec::new();
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') || route.path.contains(['?', '#']) {
                errors.push(TableError::InvalidPath(route.path.clone()));
                continue;
            }

            if by_path.insert(options.key(&route.path), idx).is_some() {
                errors.push(TableError::DuplicatePath(route.path.clone()));
            }

            if let Some(name) = &route.name {
                if by_name.insert(name.clone(), idx).is_some() {
                    errors.push(TableError::DuplicateName(name.clone()));
                }
            }
        }

        let table = Self {
            routes,
            by_path,
            by_name,
            options,
        };

        match table.find_by_path("/") {
            None => errors.push(TableError::MissingRootRedirect),
            Some(root) if !root.is_redirect() => errors.push(TableError::RootNotRedirect),
            Some(_) => {}
        }

        errors.extend(table.check_redirects());

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(errors)
        }
    }

    /// Follow every redirect chain and report the ones that do not end at a view.
    fn check_redirects(&self) -> Vec<TableError> {
        let mut errors = Vec::new();

        for route in self.routes.iter().filter(|r| r.is_redirect()) {
            let mut seen = HashSet::new();
            let mut chain = vec![route.path.clone()];
            let mut current = route;
            seen.insert(self.options.key(&route.path));

            while let Some(to) = current.redirect_to() {
                let target_path = Location::parse(to).path;
                let Some(next) = self.find_by_path(&target_path) else {
                    errors.push(TableError::DanglingRedirect {
                        from: current.path.clone(),
                        to: to.to_string(),
                    });
                    break;
                };

                chain.push(next.path.clone());
                if !seen.insert(self.options.key(&next.path)) {
                    errors.push(TableError::RedirectCycle(chain));
                    break;
                }
                current = next;
            }
        }

        errors
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Route declared for `path`, using the table's matching rules.
    pub fn find_by_path(&self, path: &str) -> Option<&Route> {
        self.by_path
            .get(&self.options.key(path))
            .map(|&idx| &self.routes[idx])
    }

    /// Route with the given name. Names are case-sensitive.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }
}
