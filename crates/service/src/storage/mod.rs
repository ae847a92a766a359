//! Storage abstractions for service layer
//!
//! Contains the generic one-file-per-record JSON collection and the name
//! validation shared by every collection.

pub mod name;
pub mod named_json_collection;

pub use name::AssetName;
pub use named_json_collection::NamedJsonCollection;
