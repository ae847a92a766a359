use std::{
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::Arc,
};

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::name::AssetName;

/// Generic JSON collection storing one file per named record.
///
/// Records live at `<dir>/<name>.json` and contain exactly the serialized
/// payload. Nothing is cached: every call goes to the filesystem, which stays
/// the only source of truth.
///
/// Saves write a temp file in the same directory and rename it over the
/// target, so readers observe either the previous record or the new one.
/// Writers to the same name are serialized by a per-name lock; different
/// names never contend.
pub struct NamedJsonCollection<T> {
    dir: PathBuf,
    kind: &'static str,
    write_locks: DashMap<AssetName, Arc<Mutex<()>>>,
    _record: PhantomData<fn() -> T>,
}

impl<T> NamedJsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the collection rooted at `dir`, creating the directory if missing.
    /// `kind` labels the collection in errors and logs.
    pub async fn open<P: Into<PathBuf>>(dir: P, kind: &'static str) -> Result<Self, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| ServiceError::Init { kind, dir: dir.clone(), source })?;
        info!(kind, dir = %dir.display(), "collection opened");
        Ok(Self { dir, kind, write_locks: DashMap::new(), _record: PhantomData })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn kind(&self) -> &'static str { self.kind }

    /// Serialize `record` and store it under `name`, replacing any previous record.
    pub async fn save(&self, name: &str, record: &T) -> Result<(), ServiceError> {
        let name = AssetName::parse(name)?;
        let bytes = serde_json::to_vec(record)?;

        let target = self.dir.join(name.file_name());
        let tmp = self.dir.join(format!(".{}.{}.tmp", name.file_name(), Uuid::new_v4()));

        let lock = self.write_lock(&name);
        let written = {
            let _guard = lock.lock().await;
            let written = write_and_replace(&tmp, &target, &bytes).await;
            if written.is_err() {
                let _ = fs::remove_file(&tmp).await;
            }
            written
        };
        self.release_write_lock(&name, &lock);

        if let Err(source) = written {
            warn!(kind = self.kind, name = %name, error = %source, "save failed");
            return Err(ServiceError::StorageWrite { kind: self.kind, name: name.to_string(), source });
        }

        info!(kind = self.kind, name = %name, bytes = bytes.len(), "record saved");
        Ok(())
    }

    /// Names of all stored records, sorted lexicographically.
    ///
    /// Only regular `*.json` files whose stem is a valid name are reported, so
    /// in-flight temp files and stray files are skipped.
    pub async fn list(&self) -> Result<Vec<String>, ServiceError> {
        let read_err = |source: io::Error| ServiceError::StorageRead { kind: self.kind, source };

        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_err(e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            if !entry.file_type().await.map_err(read_err)?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(stem) = file_name.to_str().and_then(|f| f.strip_suffix(".json")) else {
                continue;
            };
            if AssetName::parse(stem).is_ok() {
                names.push(stem.to_string());
            }
        }
        names.sort();

        debug!(kind = self.kind, count = names.len(), "records listed");
        Ok(names)
    }

    /// Load and decode the record stored under `name`.
    pub async fn load(&self, name: &str) -> Result<T, ServiceError> {
        let name = AssetName::parse(name)?;
        let path = self.dir.join(name.file_name());

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(kind = self.kind, name = %name, "record not found");
                return Err(ServiceError::not_found(self.kind, name.as_str()));
            }
            Err(source) => return Err(ServiceError::StorageRead { kind: self.kind, source }),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(kind = self.kind, name = %name, error = %e, "stored record cannot be decoded");
            ServiceError::CorruptRecord { kind: self.kind, name: name.to_string(), reason: e.to_string() }
        })
    }

    fn write_lock(&self, name: &AssetName) -> Arc<Mutex<()>> {
        Arc::clone(&self.write_locks.entry(name.clone()).or_default())
    }

    /// Drop the lock entry once no other writer holds or waits on it, so the
    /// map only ever contains names with a save in flight.
    fn release_write_lock(&self, name: &AssetName, lock: &Arc<Mutex<()>>) {
        self.write_locks
            .remove_if(name, |_, held| Arc::ptr_eq(held, lock) && Arc::strong_count(held) == 2);
    }
}

async fn write_and_replace(tmp: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, target).await
}
