//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or built-in preset
//!     → loader.rs (parse & deserialize)
//!     → ConfigOverrides (BASE_URL from the environment, CLI flags)
//!     → validation.rs (semantic checks)
//!     → Router::from_config (route table invariants)
//!     → shared via Arc to the server / navigator
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config, overrides re-applied
//!     → server compiles a new Router
//!     → atomic swap, old router dropped
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod presets;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_with_overrides, parse_config, ConfigError, ConfigOverrides};
pub use presets::Preset;
pub use schema::{ObservabilityConfig, RouteConfig, RouterConfig, ServerConfig};
