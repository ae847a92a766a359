use std::{path::Path, sync::Arc};

use models::LevelData;

use crate::assets::AssetStore;
use crate::errors::ServiceError;
use crate::storage::NamedJsonCollection;

/// Directory (under the data root) holding one `<name>.json` per level.
pub const LEVELS_DIR: &str = "levels";

/// File-backed store for levels.
///
/// Levels carry their own copies of character sprites, so this store never
/// reads from the character collection.
pub struct LevelStore {
    store: NamedJsonCollection<LevelData>,
}

impl LevelStore {
    /// Open `<data_dir>/levels`, creating it if missing.
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> Result<Arc<Self>, ServiceError> {
        let store = NamedJsonCollection::open(data_dir.as_ref().join(LEVELS_DIR), "level").await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn dir(&self) -> &Path { self.store.dir() }
}

#[async_trait::async_trait]
impl AssetStore<LevelData> for LevelStore {
    async fn save(&self, name: &str, record: &LevelData) -> Result<(), ServiceError> { self.store.save(name, record).await }
    async fn list(&self) -> Result<Vec<String>, ServiceError> { self.store.list().await }
    async fn load(&self, name: &str) -> Result<LevelData, ServiceError> { self.store.load(name).await }
}
