mod raster;
mod resizer;
mod texture;

pub use raster::RasterSource;
pub use resizer::{ResampleFilter, is_derivable, resample, scaled_len};
pub use texture::{EncodedTexture, Texture};
