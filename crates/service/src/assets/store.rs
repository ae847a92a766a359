use crate::errors::ServiceError;
use async_trait::async_trait;

/// Trait abstraction for a named asset collection.
/// Implementations can be file-backed or anything else offering the same
/// save/list/load contract; the HTTP layer only sees this trait.
#[async_trait]
pub trait AssetStore<T>: Send + Sync {
    async fn save(&self, name: &str, record: &T) -> Result<(), ServiceError>;
    async fn list(&self) -> Result<Vec<String>, ServiceError>;
    async fn load(&self, name: &str) -> Result<T, ServiceError>;
}
