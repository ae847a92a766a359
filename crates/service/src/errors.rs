use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to initialize {kind} storage at {}: {source}", .dir.display())]
    Init {
        kind: &'static str,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
    #[error("{kind} record `{name}` is corrupt: {reason}")]
    CorruptRecord {
        kind: &'static str,
        name: String,
        reason: String,
    },
    #[error("failed to write {kind} `{name}`: {source}")]
    StorageWrite {
        kind: &'static str,
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {kind} storage: {source}")]
    StorageRead {
        kind: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn invalid_name(reason: impl Into<String>) -> Self { Self::InvalidName(reason.into()) }

    pub fn not_found(kind: &'static str, name: &str) -> Self {
        Self::NotFound { kind, name: name.to_string() }
    }
}
