//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{HistoryMode, MatchOptions};

/// Root configuration for a router and its shell server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path (or absolute URL) the application is deployed under.
    /// Replaced by `BASE_URL` when that is set.
    pub base_url: String,

    /// How route paths appear in browser URLs.
    pub mode: HistoryMode,

    /// Trailing-slash and case rules.
    pub matching: MatchOptions,

    /// Route definitions, in declaration order.
    pub routes: Vec<RouteConfig>,

    /// Shell server settings.
    pub server: ServerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            mode: HistoryMode::default(),
            matching: MatchOptions::default(),
            routes: Vec::new(),
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One `[[routes]]` entry.
///
/// Exactly one of `view` and `redirect` applies. When both are missing the
/// route mounts a view named after the route.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Base-relative path, e.g. "/gantt-chart".
    pub path: String,

    /// Name for programmatic navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View identifier to mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    /// Path to redirect to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// History-mode shell server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// HTML file served for every path under the base.
    /// A minimal built-in document is used when unset.
    pub shell_path: Option<String>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            shell_path: None,
            request_timeout_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/"
            redirect = "/gantt-chart"

            [[routes]]
            path = "/gantt-chart"
            name = "GanttChart"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "/");
        assert_eq!(config.mode, HistoryMode::History);
        assert!(!config.matching.strict);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].redirect.as_deref(), Some("/gantt-chart"));
        assert_eq!(config.routes[1].view, None);
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_full_config() {
        let config: RouterConfig = toml::from_str(
            r#"
            base_url = "/graph/"
            mode = "hash"

            [matching]
            strict = true

            [server]
            bind_address = "0.0.0.0:3000"
            shell_path = "dist/index.html"

            [observability]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, HistoryMode::Hash);
        assert!(config.matching.strict);
        assert!(!config.matching.sensitive);
        assert_eq!(config.server.shell_path.as_deref(), Some("dist/index.html"));
        assert_eq!(config.server.request_timeout_secs, 10);
        assert!(config.observability.json);
    }
}
