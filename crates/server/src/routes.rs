use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod characters;
pub mod levels;

/// Upper bound on upload bodies. Levels embed full sprites, so a few hundred
/// placements run to tens of megabytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: asset API, health, and the static client
/// as fallback for every other path.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    // Literal segments (`list`, `save`) take priority over `:name`.
    let character_routes = Router::new()
        .route("/character/save/:name", post(characters::save_character))
        .route("/character/list", get(characters::list_characters))
        .route("/character/:name", get(characters::load_character));

    let level_routes = Router::new()
        .route("/level/save/:name", post(levels::save_level))
        .route("/level/list", get(levels::list_levels))
        .route("/level/:name", get(levels::load_level));

    Router::new()
        .route("/health", get(health))
        .merge(character_routes)
        .merge(level_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
