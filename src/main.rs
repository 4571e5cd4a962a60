//! view-router
//!
//! Resolves locations against a history-mode route table and serves the
//! application shell for it.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file / preset ──▶ config ──▶ routing::Router ──▶ resolve / navigate (CLI)
//!          ▲                  (BASE_URL       │
//!          │                   override)      ▼
//!    config::watcher ─────────────────▶ http::HttpServer ──▶ shell / 302 / 404
//!     (hot reload)                            ▲
//!                               lifecycle (signals → shutdown)
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use view_router::config::watcher::ConfigWatcher;
use view_router::config::{load_with_overrides, ConfigOverrides, Preset, RouterConfig};
use view_router::http::{HttpServer, Shell};
use view_router::lifecycle::{signals::shutdown_on_signal, Shutdown};
use view_router::observability::init_logging;
use view_router::routing::Router;

#[derive(Parser)]
#[command(name = "view-router", version)]
#[command(about = "Resolve and serve history-mode route tables", long_about = None)]
struct Cli {
    /// Route table config (TOML). Takes precedence over --preset.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Built-in route table used when no config file is given.
    #[arg(short, long, value_enum, default_value_t = Preset::StructureGraph, global = true)]
    preset: Preset,

    /// Base path; overrides BASE_URL and the config file.
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a browser location (base path included)
    Resolve {
        location: String,

        /// Stop at the first redirect instead of following it
        #[arg(long)]
        single_step: bool,
    },
    /// Look up the path and href of a named route
    Navigate { name: String },
    /// Print the compiled route table
    Routes,
    /// Validate the configuration and exit
    Check,
    /// Serve the application shell with history-mode fallback
    Serve {
        /// Bind address; overrides server.bind_address
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides::from_env().merge(ConfigOverrides {
        base_url: cli.base_url.clone(),
    });
    let config = match &cli.config {
        Some(path) => load_with_overrides(path, &overrides)?,
        None => {
            let mut config = cli.preset.config();
            overrides.apply(&mut config);
            config
        }
    };

    init_logging(&config.observability)?;

    let router = Router::from_config(&config)?;

    match cli.command {
        Commands::Resolve {
            location,
            single_step,
        } => {
            let outcome = if single_step {
                serde_json::to_value(router.resolve(&location))?
            } else {
                serde_json::to_value(router.resolve_final(&location)?)?
            };
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Navigate { name } => {
            let path = router.navigate(&name)?;
            let href = router.href_for(&name)?;
            let out = json!({ "name": name, "path": path, "href": href });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Routes => {
            let out = json!({
                "base": router.base().to_string(),
                "mode": router.mode(),
                "routes": router.table().routes(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Check => {
            println!(
                "OK: {} routes, base {}",
                router.table().len(),
                router.base()
            );
        }
        Commands::Serve { bind } => {
            serve(config, router, cli.config, overrides, bind).await?;
        }
    }

    Ok(())
}

async fn serve(
    config: RouterConfig,
    router: Router,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    bind: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let bind = bind.unwrap_or_else(|| config.server.bind_address.clone());
    let shell = Shell::load(&config.server)?;

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Hot reload only applies to config files; presets never change.
    let (_watcher, updates) = match &config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path, overrides);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown));

    let server = HttpServer::new(router, shell, &config.server);
    server.run(listener, updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
