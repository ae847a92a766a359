use std::{path::Path, sync::Arc};

use models::{LevelData, PixelData};
use service::{
    assets::AssetStore,
    errors::ServiceError,
    file::{CharacterStore, LevelStore},
};

/// Shared handler state: one store per asset collection.
#[derive(Clone)]
pub struct ServerState {
    pub characters: Arc<dyn AssetStore<PixelData>>,
    pub levels: Arc<dyn AssetStore<LevelData>>,
}

impl ServerState {
    /// Open both file-backed collections under `data_dir`.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, ServiceError> {
        let characters = CharacterStore::open(data_dir.as_ref()).await?;
        let levels = LevelStore::open(data_dir.as_ref()).await?;
        Ok(Self { characters, levels })
    }
}
