//! History-mode shell server.
//!
//! # Data Flow
//! ```text
//! GET /base/some/path?query
//!     → server.rs (method check, current Router from the ArcSwap)
//!     → Router::resolve
//!         View      → 200 shell + x-route-name / x-route-view
//!         Redirect  → 302 Location: base + destination
//!         NotFound  → 404 shell
//!     → shell.rs (configured index.html or built-in document)
//! ```

pub mod server;
pub mod shell;

pub use server::{AppState, HttpServer, X_ROUTE_NAME, X_ROUTE_VIEW};
pub use shell::Shell;
