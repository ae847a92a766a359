//! File-backed asset stores: thin instantiations of `NamedJsonCollection`.

pub mod character_store;
pub mod level_store;

pub use character_store::CharacterStore;
pub use level_store::LevelStore;
