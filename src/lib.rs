pub mod config;
pub mod error;
pub mod output;
pub mod packing;
pub mod sheet;
pub mod texture;

pub use config::PackConfig;
pub use error::{Result, SpriteError};
pub use sheet::{Canvas, Manifest, Placement, SpriteSheet, SpriteSheetBuilder, pack};
pub use texture::{EncodedTexture, RasterSource, ResampleFilter, Texture};
