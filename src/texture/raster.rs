use std::borrow::Cow;

use image::RgbaImage;

use crate::error::Result;

/// A named image the packer can read
///
/// `width` and `height` are the logical size at the native `density`. The
/// raster returned by [`RasterSource::raster`] is resampled to that size (and
/// then to the target density) before compositing, so a source may report a
/// logical size that differs from its decoded pixel size.
pub trait RasterSource {
    /// Unique identifier within one packing call
    fn name(&self) -> &str;

    /// Width in pixels at the native density
    fn width(&self) -> u32;

    /// Height in pixels at the native density
    fn height(&self) -> u32;

    /// Native pixel-density ratio (1 for 1x, 2 for 2x, ...)
    fn density(&self) -> u32;

    /// Decoded RGBA pixels
    fn raster(&self) -> Result<Cow<'_, RgbaImage>>;
}

impl<T: RasterSource + ?Sized> RasterSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn density(&self) -> u32 {
        (**self).density()
    }

    fn raster(&self) -> Result<Cow<'_, RgbaImage>> {
        (**self).raster()
    }
}

impl<T: RasterSource + ?Sized> RasterSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn density(&self) -> u32 {
        (**self).density()
    }

    fn raster(&self) -> Result<Cow<'_, RgbaImage>> {
        (**self).raster()
    }
}
