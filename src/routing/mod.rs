//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Browser location (base + path + query + hash)
//!     → base.rs (strip the deployment base path)
//!     → location.rs (split path / query / hash)
//!     → table.rs + matcher.rs (normalised exact lookup)
//!     → Return: View, Redirect or NotFound
//!
//! Table Compilation (at startup):
//!     Route[]
//!     → Check paths, names, root redirect, redirect chains
//!     → Index by normalised path and by name
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Tables compiled at startup, immutable at runtime
//! - Exact matching only, no patterns or regex
//! - Explicit NotFound rather than silent default
//! - Redirects are single hops; callers re-resolve (or use `resolve_final`)

pub mod base;
pub mod error;
pub mod location;
pub mod matcher;
pub mod route;
pub mod router;
pub mod table;

pub use base::BasePath;
pub use error::{NavigationError, TableError};
pub use location::Location;
pub use matcher::MatchOptions;
pub use route::{Route, RouteTarget, ViewRef};
pub use router::{HistoryMode, Matched, Redirect, Resolution, Resolved, Router};
pub use table::RouteTable;
