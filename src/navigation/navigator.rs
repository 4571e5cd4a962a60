//! History stack and navigation events.

use std::sync::Arc;

use crate::navigation::view::ViewMount;
use crate::routing::{Location, NavigationError, Router, ViewRef};

/// One visited location, after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Base-relative location of the view route.
    pub location: Location,
    pub route_name: Option<String>,
    pub view: ViewRef,
}

/// Drives a [`ViewMount`] from navigation events.
///
/// The history always holds at least one entry: the one created by
/// [`Navigator::start`].
pub struct Navigator<M> {
    router: Arc<Router>,
    mount: M,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl<M: ViewMount> Navigator<M> {
    /// Resolve the initial browser location (base path included) and mount it.
    pub fn start(
        router: Arc<Router>,
        mount: M,
        browser_location: &str,
    ) -> Result<Self, NavigationError> {
        let entry = {
            let resolved = router.resolve_final(browser_location)?;
            HistoryEntry {
                location: resolved.location,
                route_name: resolved.route.name.clone(),
                view: resolved.view.clone(),
            }
        };

        let mut navigator = Self {
            router,
            mount,
            entries: vec![entry],
            cursor: 0,
        };
        navigator.mount_current();
        Ok(navigator)
    }

    /// Navigate to a base-relative location, adding a history entry.
    /// Forward entries are discarded.
    pub fn push(&mut self, to: &str) -> Result<&HistoryEntry, NavigationError> {
        let entry = self.resolve_new(to)?;

        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        self.mount_current();
        Ok(self.current())
    }

    /// Navigate to the route called `name`.
    pub fn push_named(&mut self, name: &str) -> Result<&HistoryEntry, NavigationError> {
        let path = self.router.navigate(name)?.to_string();
        self.push(&path)
    }

    /// Navigate to a base-relative location, replacing the current entry.
    pub fn replace(&mut self, to: &str) -> Result<&HistoryEntry, NavigationError> {
        let entry = self.resolve_new(to)?;

        self.entries[self.cursor] = entry;
        self.mount_current();
        Ok(self.current())
    }

    /// Move `delta` entries through the history. Returns false, without
    /// doing anything, if that would leave the history.
    pub fn go(&mut self, delta: isize) -> Result<bool, NavigationError> {
        let Some(target) = self.cursor.checked_add_signed(delta) else {
            return Ok(false);
        };
        if delta == 0 || target >= self.entries.len() {
            return Ok(false);
        }

        let entry = self.resolve_entry(self.entries[target].location.clone())?;
        self.entries[target] = entry;
        self.cursor = target;
        self.mount_current();
        Ok(true)
    }

    pub fn back(&mut self) -> Result<bool, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<bool, NavigationError> {
        self.go(1)
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Browser href of the current entry.
    pub fn current_href(&self) -> String {
        self.router.href(&self.current().location)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub fn into_mount(self) -> M {
        self.mount
    }

    fn resolve_new(&self, to: &str) -> Result<HistoryEntry, NavigationError> {
        let entry = self.resolve_entry(Location::parse(to))?;
        if self.same_location(&entry.location, &self.current().location) {
            return Err(NavigationError::Duplicated(entry.location.to_string()));
        }
        Ok(entry)
    }

    /// Locations are the same if their paths match under the table's rules
    /// and their query and hash are identical.
    fn same_location(&self, a: &Location, b: &Location) -> bool {
        let options = self.router.table().options();
        options.key(&a.path) == options.key(&b.path) && a.query == b.query && a.hash == b.hash
    }

    fn resolve_entry(&self, location: Location) -> Result<HistoryEntry, NavigationError> {
        let resolved = self.router.follow(location)?;
        Ok(HistoryEntry {
            location: resolved.location,
            route_name: resolved.route.name.clone(),
            view: resolved.view.clone(),
        })
    }

    fn mount_current(&mut self) {
        let entry = &self.entries[self.cursor];
        tracing::debug!(
            location = %entry.location,
            view = %entry.view,
            position = self.cursor,
            "Mounting view"
        );
        self.mount.mount(&entry.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl ViewMount for Recorder {
        fn mount(&mut self, view: &ViewRef) {
            self.0.push(view.to_string());
        }
    }

    fn start(location: &str) -> Navigator<Recorder> {
        let router = Arc::new(Router::from_config(&Preset::StructureGraph.config()).unwrap());
        Navigator::start(router, Recorder::default(), location).unwrap()
    }

    #[test]
    fn test_start_follows_root_redirect() {
        let nav = start("/");

        assert_eq!(nav.current().location.path, "/structure-graph");
        assert_eq!(nav.current().route_name.as_deref(), Some("StructureGraph"));
        assert_eq!(nav.mount().0, vec!["StructureGraph"]);
        assert_eq!(nav.current_href(), "/structure-graph");
    }

    #[test]
    fn test_start_not_found() {
        let router = Arc::new(Router::from_config(&Preset::StructureGraph.config()).unwrap());
        let err = Navigator::start(router, Recorder::default(), "/missing").err();
        assert_eq!(err, Some(NavigationError::NotFound("/missing".into())));
    }

    #[test]
    fn test_push_back_forward() {
        let mut nav = start("/");

        nav.push_named("GanttChart").unwrap();
        assert_eq!(nav.current().view.as_str(), "GanttChart");

        assert!(nav.back().unwrap());
        assert_eq!(nav.current().view.as_str(), "StructureGraph");
        assert!(!nav.back().unwrap());

        assert!(nav.forward().unwrap());
        assert_eq!(nav.current().view.as_str(), "GanttChart");
        assert!(!nav.forward().unwrap());

        assert_eq!(
            nav.mount().0,
            vec!["StructureGraph", "GanttChart", "StructureGraph", "GanttChart"]
        );
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut nav = start("/gantt-chart");
        nav.push("/structure-graph").unwrap();
        nav.back().unwrap();

        nav.push("/structure-graph?focus=7").unwrap();
        assert_eq!(nav.entries().len(), 2);
        assert_eq!(nav.current().location.query.as_deref(), Some("focus=7"));
    }

    #[test]
    fn test_failed_navigation_changes_nothing() {
        let mut nav = start("/");

        assert_eq!(
            nav.push("/missing").unwrap_err(),
            NavigationError::NotFound("/missing".into())
        );
        assert_eq!(
            nav.push_named("NoSuchRoute").unwrap_err(),
            NavigationError::UnknownRouteName("NoSuchRoute".into())
        );
        assert_eq!(
            nav.push("/").unwrap_err(),
            NavigationError::Duplicated("/structure-graph".into())
        );

        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.mount().0.len(), 1);
    }

    #[test]
    fn test_duplicate_ignores_trailing_slash_and_case() {
        let mut nav = start("/gantt-chart");

        assert_eq!(
            nav.push("/gantt-chart/").unwrap_err(),
            NavigationError::Duplicated("/gantt-chart/".into())
        );
        assert_eq!(
            nav.push("/Gantt-Chart").unwrap_err(),
            NavigationError::Duplicated("/Gantt-Chart".into())
        );
        assert_eq!(
            nav.replace("/gantt-chart/").unwrap_err(),
            NavigationError::Duplicated("/gantt-chart/".into())
        );
        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.mount().0.len(), 1);

        // A different query is a different location
        nav.push("/gantt-chart/?week=2").unwrap();
        assert_eq!(nav.entries().len(), 2);
    }

    #[test]
    fn test_replace() {
        let mut nav = start("/");
        nav.replace("/gantt-chart").unwrap();

        assert_eq!(nav.entries().len(), 1);
        assert_eq!(nav.current().view.as_str(), "GanttChart");
        assert!(!nav.back().unwrap());
    }

    #[test]
    fn test_go_out_of_range() {
        let mut nav = start("/");
        assert!(!nav.go(0).unwrap());
        assert!(!nav.go(-5).unwrap());
        assert!(!nav.go(5).unwrap());
    }

    #[test]
    fn test_closure_mount() {
        let mut mounted = Vec::new();
        {
            let router = Arc::new(Router::from_config(&Preset::TaskDependencyGraph.config()).unwrap());
            let mut nav =
                Navigator::start(router, |view: &ViewRef| mounted.push(view.clone()), "/").unwrap();
            nav.push_named("GanttChart").unwrap();
        }
        assert_eq!(
            mounted,
            vec![ViewRef::new("TaskDependencyGraph"), ViewRef::new("GanttChart")]
        );
    }
}
