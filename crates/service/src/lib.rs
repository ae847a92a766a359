//! Service layer for asset persistence.
//! - `storage` holds the generic one-file-per-record JSON collection.
//! - `file` instantiates it for characters and levels.
//! - `assets` defines the store trait the HTTP layer depends on.

pub mod errors;
pub mod storage;
pub mod assets;
pub mod file;
