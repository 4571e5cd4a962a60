//! Route table resolution for history-mode single-page applications.
//!
//! A [`Router`](routing::Router) maps browser locations to opaque view
//! references, redirects, or an explicit not-found outcome, and maps route
//! names back to paths. The table is validated once and never mutated.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use navigation::{Navigator, ViewMount};
pub use routing::{Resolution, Route, RouteTable, Router, ViewRef};
