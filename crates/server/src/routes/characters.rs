use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::Status;
use models::PixelData;
use serde::Serialize;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Serialize)]
pub struct CharacterList {
    pub characters: Vec<String>,
}

/// Store a character sprite under `name`, replacing any previous one.
pub async fn save_character(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    payload: Result<Json<PixelData>, JsonRejection>,
) -> Result<Json<Status>, JsonApiError> {
    let Json(data) = payload?;
    state.characters.save(&name, &data).await?;
    info!(%name, pixels = data.pixels.len(), "character saved");
    Ok(Json(Status::ok()))
}

pub async fn list_characters(State(state): State<ServerState>) -> Result<Json<CharacterList>, JsonApiError> {
    let characters = state.characters.list().await?;
    Ok(Json(CharacterList { characters }))
}

pub async fn load_character(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<PixelData>, JsonApiError> {
    Ok(Json(state.characters.load(&name).await?))
}
