use serde::{Deserialize, Serialize};

/// One coloured pixel of a sprite. Coordinates are unbounded and may be negative.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PixelInfo {
    pub x: i64,
    pub y: i64,
    /// Usually a hex or CSS colour; not checked.
    pub color: String,
}

/// A pixel-art character sprite.
///
/// `pixels` is a sparse list kept in upload order. The client uses
/// `mask_index` (serialised as `maskIndex`) to pick a rendering mask.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PixelData {
    pub width: i64,
    pub height: i64,
    #[serde(rename = "maskIndex")]
    pub mask_index: i64,
    pub pixels: Vec<PixelInfo>,
}
