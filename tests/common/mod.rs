//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use view_router::config::{Preset, RouterConfig};
use view_router::http::{HttpServer, Shell};
use view_router::lifecycle::Shutdown;
use view_router::routing::Router;

/// Preset config with the given base path.
pub fn preset_config(preset: Preset, base_url: &str) -> RouterConfig {
    let mut config = preset.config();
    config.base_url = base_url.to_string();
    config
}

/// A running shell server on an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub updates: mpsc::UnboundedSender<RouterConfig>,
}

/// Start a shell server for `config` on 127.0.0.1 with a random port.
#[allow(dead_code)]
pub async fn start_server(config: RouterConfig) -> TestServer {
    let router = Router::from_config(&config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let (updates, update_rx) = mpsc::unbounded_channel();

    let server = HttpServer::new(router, Shell::Builtin, &config.server);
    tokio::spawn(async move {
        let _ = server.run(listener, update_rx, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    TestServer {
        addr,
        shutdown,
        updates,
    }
}

/// HTTP client that does not follow redirects.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
