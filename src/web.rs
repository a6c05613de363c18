use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::TripAiConfig;

/// Bind the configured address and serve until shutdown.
pub async fn run(config: TripAiConfig) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    serve_on(listener, config).await
}

/// Serve the application on an already-bound listener.
///
/// Split out from [`run`] so tests can bind port 0 and learn the actual
/// port before the server starts.
pub async fn serve_on(listener: TcpListener, config: TripAiConfig) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(config);
    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = listener.local_addr().context("Failed to read local addr")?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")
}
