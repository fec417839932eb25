use std::borrow::Cow;

use image::RgbaImage;

use super::RasterSource;
use crate::error::{Result, SpriteError};

/// A texture backed by an already decoded image
#[derive(Debug, Clone)]
pub struct Texture {
    /// Unique identifier within a sprite sheet
    pub name: String,
    /// Logical width at the native density
    pub width: u32,
    /// Logical height at the native density
    pub height: u32,
    /// Native pixel-density ratio
    pub density: u32,
    /// Decoded pixels
    pub image: RgbaImage,
}

impl Texture {
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        density: u32,
        image: RgbaImage,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            density,
            image,
        }
    }

    /// Create a texture whose logical size is the image size
    pub fn from_image(name: impl Into<String>, density: u32, image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(name, width, height, density, image)
    }
}

impl RasterSource for Texture {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn density(&self) -> u32 {
        self.density
    }

    fn raster(&self) -> Result<Cow<'_, RgbaImage>> {
        Ok(Cow::Borrowed(&self.image))
    }
}

/// A texture holding encoded image bytes (PNG, etc.), decoded on demand
#[derive(Debug, Clone)]
pub struct EncodedTexture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub density: u32,
    /// Encoded file contents; the format is guessed from the data
    pub bytes: Vec<u8>,
}

impl EncodedTexture {
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        density: u32,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            density,
            bytes,
        }
    }
}

impl RasterSource for EncodedTexture {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn density(&self) -> u32 {
        self.density
    }

    fn raster(&self) -> Result<Cow<'_, RgbaImage>> {
        let image = image::load_from_memory(&self.bytes).map_err(|e| SpriteError::ImageDecode {
            name: self.name.clone(),
            source: e,
        })?;
        Ok(Cow::Owned(image.into_rgba8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut data = Cursor::new(Vec::new());
        img.write_to(&mut data, ImageFormat::Png).unwrap();
        data.into_inner()
    }

    #[test]
    fn test_from_image_uses_image_size() {
        let texture = Texture::from_image("hero", 2, RgbaImage::new(12, 7));

        assert_eq!(texture.width(), 12);
        assert_eq!(texture.height(), 7);
        assert_eq!(texture.density(), 2);
        assert_eq!(texture.name(), "hero");
    }

    #[test]
    fn test_encoded_texture_decodes_png() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 255]));

        let texture = EncodedTexture::new("icon", 3, 2, 1, png_bytes(&img));
        let raster = texture.raster().unwrap();

        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(*raster.get_pixel(2, 1), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_encoded_texture_reports_decode_error() {
        let texture = EncodedTexture::new("broken", 4, 4, 1, vec![0, 1, 2, 3]);

        match texture.raster() {
            Err(SpriteError::ImageDecode { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("Expected ImageDecode error, got {:?}", other),
        }
    }

    #[test]
    fn test_boxed_trait_objects_forward() {
        let sources: Vec<Box<dyn RasterSource>> = vec![
            Box::new(Texture::from_image("a", 1, RgbaImage::new(4, 4))),
            Box::new(EncodedTexture::new("b", 8, 8, 2, Vec::new())),
        ];

        assert_eq!(sources[0].name(), "a");
        assert_eq!(sources[1].density(), 2);
        assert_eq!(sources[1].width(), 8);
    }
}
