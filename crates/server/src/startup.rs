use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};
use common::env::ensure_env;

/// Browser clients may be hosted anywhere, so every origin is allowed.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the stores named by `config` and build the application router.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let storage = &config.storage;
    ensure_env(&storage.static_dir, &storage.data_dir).await?;

    let state = ServerState::open(&storage.data_dir).await?;
    info!(data_dir = %storage.data_dir, static_dir = %storage.static_dir, "asset stores ready");

    Ok(routes::build_router(state, build_cors(), &storage.static_dir))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config).await?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    serve(listener, app, shutdown_signal()).await
}
