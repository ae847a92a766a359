use std::{path::Path, sync::Arc};

use models::PixelData;

use crate::assets::AssetStore;
use crate::errors::ServiceError;
use crate::storage::NamedJsonCollection;

/// Directory (under the data root) holding one `<name>.json` per character.
pub const CHARACTERS_DIR: &str = "characters";

/// File-backed store for pixel-art characters.
pub struct CharacterStore {
    store: NamedJsonCollection<PixelData>,
}

impl CharacterStore {
    /// Open `<data_dir>/characters`, creating it if missing.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let store = NamedJsonCollection::open(data_dir.as_ref().join(CHARACTERS_DIR), "character").await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn dir(&self) -> &Path { self.store.dir() }
}

#[async_trait::async_trait]
impl AssetStore<PixelData> for CharacterStore {
    async fn save(&self, name: &str, record: &PixelData) -> Result<(), ServiceError> { self.store.save(name, record).await }
    async fn list(&self) -> Result<Vec<String>, ServiceError> { self.store.list().await }
    async fn load(&self, name: &str) -> Result<PixelData, ServiceError> { self.store.load(name).await }
}
