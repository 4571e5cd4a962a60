//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured events through `tracing`; routing stays silent above trace
//! - Logs go to stderr so CLI output on stdout stays machine-readable
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;
