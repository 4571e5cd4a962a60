//! Route resolution and reverse lookup.
//!
//! # Responsibilities
//! - Strip the base path (and hash prefix in hash mode) from browser locations
//! - Resolve a location to a view, a redirect or an explicit NotFound
//! - Follow redirect chains without looping
//! - Map route names back to paths and hrefs
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Pure and synchronous: no I/O, no state between calls
//! - Redirects keep the original query and hash unless the target sets its own

use serde::{Deserialize, Serialize};

use super::base::BasePath;
use super::error::NavigationError;
use super::location::Location;
use super::route::{Route, RouteTarget, ViewRef};
use super::table::RouteTable;
use crate::config::loader::ConfigError;
use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// How route paths appear in browser URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Real paths: "/base/gantt-chart". Needs a server-side fallback.
    #[default]
    History,
    /// Paths in the fragment: "/base/#/gantt-chart".
    Hash,
}

/// A route that mounts a view, together with the location that matched it.
#[derive(Debug, Clone, Serialize)]
pub struct Matched<'a> {
    pub route: &'a Route,
    pub view: &'a ViewRef,
    pub location: Location,
}

/// Instruction to re-resolve against another location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Declared path of the redirect route that matched.
    pub from: String,
    pub to: Location,
}

/// Outcome of a single resolution step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution<'a> {
    View(Matched<'a>),
    Redirect(Redirect),
    NotFound(Location),
}

/// Outcome of following redirects to a view.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<'a> {
    pub route: &'a Route,
    pub view: &'a ViewRef,
    pub location: Location,

    /// Redirect routes passed through, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirected_from: Vec<String>,
}

/// A compiled route table bound to a base path and history mode.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    base: BasePath,
    mode: HistoryMode,
}

impl Router {
    pub fn new(table: RouteTable, base: BasePath, mode: HistoryMode) -> Self {
        Self { table, base, mode }
    }

    /// Validate a configuration and compile it into a router.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let routes = config
            .routes
            .iter()
            .map(|entry| entry.to_route())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Validation(vec![e]))?;
        let table = RouteTable::new(routes, config.matching).map_err(ConfigError::Table)?;
        let base = BasePath::parse(&config.base_url)
            .map_err(|e| ConfigError::Validation(vec![ValidationError::BaseUrl(e)]))?;

        tracing::info!(
            routes = table.len(),
            base = %base,
            mode = ?config.mode,
            "Route table compiled"
        );

        Ok(Self::new(table, base, config.mode))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Turn a browser location into a base-relative location.
    /// Returns None if it lies outside the base path.
    pub fn locate(&self, browser_location: &str) -> Option<Location> {
        match self.mode {
            HistoryMode::History => {
                let location = Location::parse(browser_location);
                let path = self.base.strip(&location.path)?.to_string();
                Some(Location { path, ..location })
            }
            HistoryMode::Hash => {
                let (outer, fragment) = browser_location
                    .split_once('#')
                    .unwrap_or((browser_location, ""));
                self.base.strip(&Location::parse(outer).path)?;
                Some(Location::parse(fragment))
            }
        }
    }

    /// Resolve a browser location one step.
    pub fn resolve(&self, browser_location: &str) -> Resolution<'_> {
        match self.locate(browser_location) {
            Some(location) => self.match_location(location),
            None => {
                tracing::trace!(location = %browser_location, base = %self.base, "Outside base path");
                Resolution::NotFound(Location::parse(browser_location))
            }
        }
    }

    /// Resolve a browser location, following redirects to a view.
    pub fn resolve_final(&self, browser_location: &str) -> Result<Resolved<'_>, NavigationError> {
        let location = self
            .locate(browser_location)
            .ok_or_else(|| NavigationError::NotFound(browser_location.to_string()))?;
        self.follow(location)
    }

    /// Resolve a base-relative location one step.
    pub fn match_location(&self, location: Location) -> Resolution<'_> {
        let Some(route) = self.table.find_by_path(&location.path) else {
            tracing::trace!(path = %location.path, "No route matched");
            return Resolution::NotFound(location);
        };

        match &route.target {
            RouteTarget::View(view) => {
                tracing::trace!(path = %location.path, view = %view, "Route matched");
                Resolution::View(Matched {
                    route,
                    view,
                    location,
                })
            }
            RouteTarget::Redirect(to) => {
                let target = Location::parse(to);
                let to = Location {
                    path: target.path,
                    query: target.query.or(location.query),
                    hash: target.hash.or(location.hash),
                };
                tracing::trace!(from = %route.path, to = %to, "Redirect matched");
                Resolution::Redirect(Redirect {
                    from: route.path.clone(),
                    to,
                })
            }
        }
    }

    /// Resolve a base-relative location, following redirects to a view.
    ///
    /// Tables reject redirect cycles when built; the loop check here stops
    /// after visiting a redirect twice or taking more hops than there are
    /// routes.
    pub fn follow(&self, location: Location) -> Result<Resolved<'_>, NavigationError> {
        let mut current = location;
        let mut chain: Vec<String> = Vec::new();

        loop {
            match self.match_location(current) {
                Resolution::View(matched) => {
                    return Ok(Resolved {
                        route: matched.route,
                        view: matched.view,
                        location: matched.location,
                        redirected_from: chain,
                    });
                }
                Resolution::NotFound(location) => {
                    return Err(NavigationError::NotFound(location.path));
                }
                Resolution::Redirect(redirect) => {
                    let looped =
                        chain.contains(&redirect.from) || chain.len() >= self.table.len();
                    chain.push(redirect.from);
                    if looped {
                        return Err(NavigationError::RedirectLoop(chain));
                    }
                    current = redirect.to;
                }
            }
        }
    }

    /// Path of the route called `name`.
    pub fn navigate(&self, name: &str) -> Result<&str, NavigationError> {
        self.table
            .find_by_name(name)
            .map(|route| route.path.as_str())
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_string()))
    }

    /// Browser href for a base-relative location.
    pub fn href(&self, location: &Location) -> String {
        match self.mode {
            HistoryMode::History => self.base.prepend(&location.to_string()),
            HistoryMode::Hash => format!("{}#{}", self.base, location),
        }
    }

    /// Browser href of the route called `name`.
    pub fn href_for(&self, name: &str) -> Result<String, NavigationError> {
        let path = self.navigate(name)?;
        Ok(self.href(&Location::parse(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::MatchOptions;

    fn router(base: &str, mode: HistoryMode) -> Router {
        let table = RouteTable::new(
            vec![
                Route::redirect("/", "/structure-graph"),
                Route::view("/gantt-chart", "GanttChart", "GanttChart"),
                Route::view("/structure-graph", "StructureGraph", "StructureGraph"),
            ],
            MatchOptions::default(),
        )
        .unwrap();
        Router::new(table, BasePath::parse(base).unwrap(), mode)
    }

    #[test]
    fn test_every_view_route_resolves_to_itself() {
        let router = router("/", HistoryMode::History);

        for route in router.table().routes().iter().filter(|r| !r.is_redirect()) {
            match router.resolve(&route.path) {
                Resolution::View(m) => assert_eq!(m.route, route),
                other => panic!("expected view for {}, got {:?}", route.path, other),
            }
            let name = route.name.as_deref().unwrap();
            assert_eq!(router.navigate(name).unwrap(), route.path);
        }
    }

    #[test]
    fn test_root_redirect_then_view() {
        let router = router("/", HistoryMode::History);

        let Resolution::Redirect(redirect) = router.resolve("/") else {
            panic!("expected redirect");
        };
        assert_eq!(redirect.from, "/");
        assert_eq!(redirect.to.path, "/structure-graph");

        match router.match_location(redirect.to) {
            Resolution::View(m) => assert_eq!(m.view.as_str(), "StructureGraph"),
            other => panic!("expected view, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_final_records_redirects() {
        let router = router("/", HistoryMode::History);

        let resolved = router.resolve_final("/?tab=deps").unwrap();
        assert_eq!(resolved.view.as_str(), "StructureGraph");
        assert_eq!(resolved.redirected_from, vec!["/".to_string()]);
        assert_eq!(resolved.location.to_string(), "/structure-graph?tab=deps");
    }

    #[test]
    fn test_query_and_trailing_slash_ignored_for_matching() {
        let router = router("/", HistoryMode::History);

        match router.resolve("/gantt-chart/?week=12#today") {
            Resolution::View(m) => {
                assert_eq!(m.view.as_str(), "GanttChart");
                assert_eq!(m.location.query.as_deref(), Some("week=12"));
            }
            other => panic!("expected view, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let router = router("/", HistoryMode::History);

        assert!(matches!(router.resolve("/missing"), Resolution::NotFound(_)));
        assert_eq!(
            router.resolve_final("/missing").unwrap_err(),
            NavigationError::NotFound("/missing".into())
        );
    }

    #[test]
    fn test_unknown_route_name() {
        let router = router("/", HistoryMode::History);
        assert_eq!(
            router.navigate("NoSuchRoute").unwrap_err(),
            NavigationError::UnknownRouteName("NoSuchRoute".into())
        );
    }

    #[test]
    fn test_base_path_is_stripped_and_prepended() {
        let router = router("/tools/", HistoryMode::History);

        match router.resolve("/tools/gantt-chart") {
            Resolution::View(m) => assert_eq!(m.location.path, "/gantt-chart"),
            other => panic!("expected view, got {:?}", other),
        }
        assert!(matches!(router.resolve("/gantt-chart"), Resolution::NotFound(_)));
        assert!(matches!(router.resolve("/tools"), Resolution::Redirect(_)));

        assert_eq!(router.navigate("GanttChart").unwrap(), "/gantt-chart");
        assert_eq!(router.href_for("GanttChart").unwrap(), "/tools/gantt-chart");
    }

    #[test]
    fn test_hash_mode() {
        let router = router("/tools/", HistoryMode::Hash);

        match router.resolve("/tools/#/gantt-chart") {
            Resolution::View(m) => assert_eq!(m.view.as_str(), "GanttChart"),
            other => panic!("expected view, got {:?}", other),
        }
        assert!(matches!(router.resolve("/tools/"), Resolution::Redirect(_)));
        assert!(matches!(router.resolve("/elsewhere/#/gantt-chart"), Resolution::NotFound(_)));
        assert_eq!(router.href_for("GanttChart").unwrap(), "/tools/#/gantt-chart");
    }

    #[test]
    fn test_resolution_serializes_with_outcome_tag() {
        let router = router("/", HistoryMode::History);
        let json = serde_json::to_value(router.resolve("/")).unwrap();
        assert_eq!(json["outcome"], "redirect");
        assert_eq!(json["to"]["path"], "/structure-graph");
    }
}
