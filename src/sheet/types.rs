use std::collections::BTreeMap;
use std::collections::btree_map::Values;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::packing::Rect;

/// Where one texture landed on a canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Source texture name
    pub name: String,
    /// Destination rectangle in canvas pixels
    pub rect: Rect,
    /// Density the texture was packed at
    pub density: u32,
    /// Texture was turned 90° clockwise; `rect` holds the turned size
    pub rotated: bool,
}

impl Placement {
    pub fn x(&self) -> u32 {
        self.rect.x
    }

    pub fn y(&self) -> u32 {
        self.rect.y
    }

    pub fn width(&self) -> u32 {
        self.rect.width
    }

    pub fn height(&self) -> u32 {
        self.rect.height
    }
}

/// Placements of one density pass, keyed and iterated by texture name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    density: u32,
    placements: BTreeMap<String, Placement>,
}

impl Manifest {
    pub(crate) fn new(density: u32) -> Self {
        Self {
            density,
            placements: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, placement: Placement) {
        self.placements.insert(placement.name.clone(), placement);
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn get(&self, name: &str) -> Option<&Placement> {
        self.placements.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.placements.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> Values<'_, String, Placement> {
        self.placements.values()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Placement;
    type IntoIter = Values<'a, String, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Composed RGBA8 raster for one density pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    density: u32,
    image: RgbaImage,
}

impl Canvas {
    pub(crate) fn new(density: u32, width: u32, height: u32) -> Self {
        Self {
            density,
            image: RgbaImage::new(width, height),
        }
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, row-major, four bytes per pixel
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// A packed sheet: its manifest and canvas
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub manifest: Manifest,
    pub canvas: Canvas,
    /// Placed area over canvas area (0.0 to 1.0)
    pub occupancy: f64,
}

impl SpriteSheet {
    pub fn density(&self) -> u32 {
        self.manifest.density()
    }

    pub fn into_parts(self) -> (Manifest, Canvas) {
        (self.manifest, self.canvas)
    }
}
