use serde::{Deserialize, Serialize};

use crate::character::PixelData;

/// Placement of a character inside a level.
///
/// `data` is a full copy of the sprite taken when the level was saved, not a
/// reference to a stored character.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelEntry {
    pub index: i64,
    pub name: String,
    pub data: PixelData,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelData {
    pub characters: Vec<LevelEntry>,
}
