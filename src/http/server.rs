//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Serve the application shell for every path under the base (history mode)
//! - Answer the root redirect with a real HTTP redirect
//! - Return 404 for paths no route declares
//! - Swap in reloaded routes without restarting
//! - Wire up middleware (tracing, timeout)

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router as AxumRouter,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{RouterConfig, ServerConfig};
use crate::http::shell::Shell;
use crate::routing::{HistoryMode, Resolution, Router};

/// Response header carrying the matched route name.
pub const X_ROUTE_NAME: HeaderName = HeaderName::from_static("x-route-name");

/// Response header carrying the matched view reference.
pub const X_ROUTE_VIEW: HeaderName = HeaderName::from_static("x-route-view");

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ArcSwap<Router>>,
    pub shell: Arc<Shell>,
}

/// HTTP server answering history-mode navigations.
pub struct HttpServer {
    app: AxumRouter,
    router: Arc<ArcSwap<Router>>,
}

impl HttpServer {
    /// Create a new HTTP server around a compiled router.
    pub fn new(router: Router, shell: Shell, config: &ServerConfig) -> Self {
        let router = Arc::new(ArcSwap::from_pointee(router));
        let state = AppState {
            router: router.clone(),
            shell: Arc::new(shell),
        };

        let app = Self::build_app(config, state);
        Self { app, router }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> AxumRouter {
        AxumRouter::new()
            .fallback(shell_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.request_timeout_secs,
                    ))),
            )
    }

    /// Handle to the live router; storing into it replaces the routes.
    pub fn router_handle(&self) -> Arc<ArcSwap<Router>> {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    ///
    /// Configs received on `updates` are compiled and swapped in; invalid
    /// ones are logged and ignored.
    pub async fn run(
        self,
        listener: TcpListener,
        mut updates: mpsc::UnboundedReceiver<RouterConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let handle = self.router.clone();
        tokio::spawn(async move {
            while let Some(config) = updates.recv().await {
                match Router::from_config(&config) {
                    Ok(router) => {
                        tracing::info!(routes = router.table().len(), "Routes reloaded");
                        handle.store(Arc::new(router));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Rejected reloaded config, keeping current routes");
                    }
                }
            }
        });

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback handler: every request goes through the route table.
async fn shell_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let router = state.router.load();
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    // The fragment never reaches the server in hash mode, so there is
    // nothing to resolve beyond the base check.
    if router.mode() == HistoryMode::Hash {
        return match router.locate(target) {
            Some(_) => Html(state.shell.render(router.base())).into_response(),
            None => (StatusCode::NOT_FOUND, "Outside base path").into_response(),
        };
    }

    match router.resolve(target) {
        Resolution::View(matched) => {
            tracing::debug!(path = %uri.path(), view = %matched.view, "Serving shell");

            let mut headers = HeaderMap::new();
            if let Ok(value) = HeaderValue::from_str(matched.view.as_str()) {
                headers.insert(X_ROUTE_VIEW, value);
            }
            if let Some(Ok(value)) = matched.route.name.as_deref().map(HeaderValue::from_str) {
                headers.insert(X_ROUTE_NAME, value);
            }

            (headers, Html(state.shell.render(router.base()))).into_response()
        }
        Resolution::Redirect(redirect) => {
            let href = router.href(&redirect.to);
            tracing::debug!(from = %redirect.from, to = %href, "Redirecting");

            match HeaderValue::from_str(&href) {
                Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
                Err(_) => {
                    tracing::error!(href = %href, "Redirect target is not a valid header value");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
        Resolution::NotFound(location) => {
            tracing::warn!(path = %location.path, "No route matched");
            (StatusCode::NOT_FOUND, Html(state.shell.render(router.base()))).into_response()
        }
    }
}
