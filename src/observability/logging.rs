//! Structured logging.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
    Registry,
};

use crate::config::ObservabilityConfig;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_new(format!("view_router={level},tower_http={level}", level = config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("view_router=info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config));

    let format: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(format)
        .with(filter)
        .try_init()
}
