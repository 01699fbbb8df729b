//! HTTP server for the issue tracker.
//!
//! Routes:
//! - `GET /health`
//! - `POST /issues`, `GET /issues`
//! - `GET|PUT|DELETE /issues/{id}`
//!
//! All handlers share one [`Tracker`] behind a read/write lock: listings
//! and lookups share the lock, create/update/delete hold it exclusively.

pub mod params;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracker_lib::{Result, Tracker, TrackerError};

use crate::config::ServerConfig;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tracker: Arc<RwLock<Tracker>>,
}

impl AppState {
    #[must_use]
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(RwLock::new(tracker)),
        }
    }

    /// Fresh empty tracker using the configured ID prefix.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(Tracker::new().with_prefix(config.id_prefix.clone()))
    }
}

/// CORS policy for the configured frontend origins.
///
/// # Errors
///
/// Returns `Config` if an origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| TrackerError::Config(format!("cors origin '{origin}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    // Credentials rule out `*`, so methods and headers mirror the request.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the router without middleware.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/issues",
            get(routes::list_issues).post(routes::create_issue),
        )
        .route(
            "/issues/:id",
            get(routes::get_issue)
                .put(routes::update_issue)
                .delete(routes::delete_issue),
        )
        .with_state(state)
}

/// Build the full router: routes plus CORS and request tracing.
///
/// # Errors
///
/// Returns `Config` if the CORS origins are invalid.
pub fn router(state: AppState, config: &ServerConfig) -> Result<Router> {
    Ok(app(state)
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let app = router(AppState::from_config(config), config)?;
    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
