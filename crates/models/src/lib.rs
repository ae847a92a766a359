//! Asset payload schemas shared by the service and HTTP layers.
//!
//! These types define the structural shape of uploaded assets. Decoding a
//! request body into them is the only validation the payloads receive; pixel
//! values and colours are stored as given.

pub mod character;
pub mod level;

pub use character::{PixelData, PixelInfo};
pub use level::{LevelData, LevelEntry};

#[cfg(test)]
mod tests;
