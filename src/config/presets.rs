//! Built-in route tables.
//!
//! Both presets share the Gantt chart view and differ in the graph view
//! that `/` redirects to.

use clap::ValueEnum;

use crate::config::schema::{RouteConfig, RouterConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Gantt chart + structure graph (default view).
    #[default]
    StructureGraph,
    /// Gantt chart + task dependency graph (default view).
    TaskDependencyGraph,
}

impl Preset {
    /// Path and name of the graph view `/` redirects to.
    fn graph_route(self) -> (&'static str, &'static str) {
        match self {
            Preset::StructureGraph => ("/structure-graph", "StructureGraph"),
            Preset::TaskDependencyGraph => ("/task-dependency-graph", "TaskDependencyGraph"),
        }
    }

    /// Route entries of this preset.
    pub fn routes(self) -> Vec<RouteConfig> {
        let (graph_path, graph_name) = self.graph_route();

        vec![
            RouteConfig {
                path: "/".into(),
                redirect: Some(graph_path.into()),
                ..Default::default()
            },
            RouteConfig {
                path: "/gantt-chart".into(),
                name: Some("GanttChart".into()),
                view: Some("GanttChart".into()),
                ..Default::default()
            },
            RouteConfig {
                path: graph_path.into(),
                name: Some(graph_name.into()),
                view: Some(graph_name.into()),
                ..Default::default()
            },
        ]
    }

    /// A default configuration carrying this preset's routes.
    pub fn config(self) -> RouterConfig {
        RouterConfig {
            routes: self.routes(),
            ..Default::default()
        }
    }
}
