use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::Status;
use models::LevelData;
use serde::Serialize;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Serialize)]
pub struct LevelList {
    pub levels: Vec<String>,
}

/// Store a level under `name`. Embedded sprites are saved as given.
pub async fn save_level(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    payload: Result<Json<LevelData>, JsonRejection>,
) -> Result<Json<Status>, JsonApiError> {
    let Json(level) = payload?;
    state.levels.save(&name, &level).await?;
    info!(%name, entries = level.characters.len(), "level saved");
    Ok(Json(Status::ok()))
}

pub async fn list_levels(State(state): State<ServerState>) -> Result<Json<LevelList>, JsonApiError> {
    let levels = state.levels.list().await?;
    Ok(Json(LevelList { levels }))
}

pub async fn load_level(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<LevelData>, JsonApiError> {
    Ok(Json(state.levels.load(&name).await?))
}
