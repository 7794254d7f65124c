pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use flood_core::Dataset;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(dataset: Dataset) -> Router {
    let app_state = state::AppState::new(dataset);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/alert", get(routes::alert::get_alert))
        .route("/api/map/villages", get(routes::map::get_villages))
        .route("/api/info", get(routes::info::get_info))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Serve the flood alert API on a pre-bound listener until Ctrl-C.
///
/// The caller binds, so bind errors surface with its own context and
/// `port = 0` works.
pub async fn serve_on(dataset: Dataset, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router(dataset);

    tracing::info!("flood alert API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
