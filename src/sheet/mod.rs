mod builder;
mod types;

pub use builder::{SpriteSheetBuilder, pack};
pub use types::{Canvas, Manifest, Placement, SpriteSheet};
