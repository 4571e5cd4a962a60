//! Navigation on top of a compiled router.
//!
//! # Data Flow
//! ```text
//! Host event (start, link click, back/forward, programmatic)
//!     → navigator.rs (resolve, follow redirects, update history)
//!     → view.rs (ViewMount::mount with the resolved ViewRef)
//!     → host renders the component
//! ```
//!
//! # Design Decisions
//! - The router is injected (Arc<Router>), never a global
//! - A failed navigation changes nothing: no mount, no history entry
//! - Back/forward re-resolve the stored location

pub mod navigator;
pub mod view;

pub use navigator::{HistoryEntry, Navigator};
pub use view::ViewMount;
