use std::collections::HashSet;

use image::{RgbaImage, imageops};
use log::{debug, info};
use rayon::prelude::*;

use super::{Canvas, Manifest, Placement, SpriteSheet};
use crate::config::PackConfig;
use crate::error::{Result, SpriteError};
use crate::packing::{Rect, ShelfPacker};
use crate::texture::{RasterSource, ResampleFilter, is_derivable, resample, scaled_len};

/// Configuration for sprite sheet building
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteSheetBuilder {
    pub padding: u32,
    pub max_width: Option<u32>,
    pub power_of_two: bool,
    pub allow_rotation: bool,
    pub filter: ResampleFilter,
}

/// A texture resampled to the target density and oriented for packing
struct PreparedTexture<'a> {
    name: &'a str,
    image: RgbaImage,
    rotated: bool,
}

impl PreparedTexture<'_> {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }
}

impl SpriteSheetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PackConfig) -> Self {
        Self {
            padding: config.padding,
            max_width: config.max_width,
            power_of_two: config.pot,
            allow_rotation: config.allow_rotation,
            filter: config.filter,
        }
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn max_width(mut self, max_width: Option<u32>) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn power_of_two(mut self, pot: bool) -> Self {
        self.power_of_two = pot;
        self
    }

    pub fn allow_rotation(mut self, allow: bool) -> Self {
        self.allow_rotation = allow;
        self
    }

    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Pack every texture into one canvas at `density`
    ///
    /// All inputs are validated and decoded before the canvas is allocated.
    pub fn build<T: RasterSource>(&self, textures: &[T], density: u32) -> Result<SpriteSheet> {
        validate(textures, density)?;

        let mut prepared = self.prepare(textures, density)?;
        sort_for_packing(&mut prepared);

        let working_width = self.working_width(&prepared);
        let mut packer = ShelfPacker::new(working_width, self.padding);
        let mut rects: Vec<Rect> = Vec::with_capacity(prepared.len());

        for texture in &prepared {
            let rect = packer
                .insert(texture.width(), texture.height())
                .ok_or_else(|| {
                    if texture.width() > working_width {
                        SpriteError::TextureTooWide {
                            name: texture.name.to_string(),
                            width: texture.width(),
                            max_width: working_width,
                        }
                    } else {
                        SpriteError::CanvasTooLarge(texture.name.to_string())
                    }
                })?;
            rects.push(rect);
        }

        debug!(
            "@{}x: {} shelves over working width {}, {:.1}% of bounding box used",
            density,
            packer.shelf_count(),
            working_width,
            packer.occupancy() * 100.0
        );

        let (width, height) = if self.power_of_two {
            (
                packer.used_width().next_power_of_two(),
                packer.used_height().next_power_of_two(),
            )
        } else {
            (packer.used_width(), packer.used_height())
        };

        let mut canvas = Canvas::new(density, width, height);
        let mut manifest = Manifest::new(density);
        let mut placed_area = 0u64;

        for (texture, rect) in prepared.into_iter().zip(rects) {
            imageops::replace(
                canvas.image_mut(),
                &texture.image,
                i64::from(rect.x),
                i64::from(rect.y),
            );
            placed_area += rect.area();

            manifest.insert(Placement {
                name: texture.name.to_string(),
                rect,
                density,
                rotated: texture.rotated,
            });
        }

        let occupancy = placed_area as f64 / (u64::from(width) * u64::from(height)) as f64;

        info!(
            "Sprite sheet @{}x: {}x{} with {} textures ({:.1}% efficiency)",
            density,
            width,
            height,
            manifest.len(),
            occupancy * 100.0,
        );

        Ok(SpriteSheet {
            manifest,
            canvas,
            occupancy,
        })
    }

    /// Build one sheet per density; passes are independent and run in parallel
    ///
    /// Sheets are returned in the order of `densities`.
    pub fn build_variants<T: RasterSource + Sync>(
        &self,
        textures: &[T],
        densities: &[u32],
    ) -> Result<Vec<SpriteSheet>> {
        if densities.is_empty() {
            return Err(SpriteError::EmptyInput);
        }

        densities
            .par_iter()
            .map(|&density| self.build(textures, density))
            .collect()
    }

    fn prepare<'a, T: RasterSource>(
        &self,
        textures: &'a [T],
        density: u32,
    ) -> Result<Vec<PreparedTexture<'a>>> {
        textures
            .iter()
            .map(|texture| {
                let width = scaled_len(texture.width(), texture.density(), density);
                let height = scaled_len(texture.height(), texture.density(), density);

                let raster = texture.raster()?;
                let image = if raster.dimensions() == (width, height) {
                    raster.into_owned()
                } else {
                    debug!(
                        "Resampling '{}' {}x{} @{}x -> {}x{} @{}x",
                        texture.name(),
                        raster.width(),
                        raster.height(),
                        texture.density(),
                        width,
                        height,
                        density
                    );
                    resample(&raster, width, height, self.filter)
                };

                let fits = |len: u32| self.max_width.is_none_or(|max| len <= max);
                // Lay tall textures flat, and turn wide ones that only fit on their side
                let rotated = self.allow_rotation
                    && fits(height)
                    && (height > width || !fits(width));
                let image = if rotated {
                    imageops::rotate90(&image)
                } else {
                    image
                };

                if let Some(max_width) = self.max_width {
                    if image.width() > max_width {
                        return Err(SpriteError::TextureTooWide {
                            name: texture.name().to_string(),
                            width: image.width(),
                            max_width,
                        });
                    }
                }

                Ok(PreparedTexture {
                    name: texture.name(),
                    image,
                    rotated,
                })
            })
            .collect()
    }

    /// Shelf width: the configured maximum, or roughly the side of a square
    /// holding the padded area, never narrower than the widest texture
    fn working_width(&self, prepared: &[PreparedTexture<'_>]) -> u32 {
        if let Some(max_width) = self.max_width {
            return max_width;
        }

        let widest = prepared.iter().map(PreparedTexture::width).max().unwrap_or(0);
        let pad = u64::from(self.padding);
        let padded_area = prepared.iter().fold(0u64, |area, t| {
            let cell = (u64::from(t.width()) + pad).saturating_mul(u64::from(t.height()) + pad);
            area.saturating_add(cell)
        });
        let side = u32::try_from(ceil_sqrt(padded_area)).unwrap_or(u32::MAX);

        widest.max(side)
    }
}

/// Pack `textures` into a single sheet at `target_density`
pub fn pack<T: RasterSource>(
    textures: &[T],
    target_density: u32,
    allow_rotation: bool,
) -> Result<(Manifest, Canvas)> {
    SpriteSheetBuilder::new()
        .allow_rotation(allow_rotation)
        .build(textures, target_density)
        .map(SpriteSheet::into_parts)
}

fn validate<T: RasterSource>(textures: &[T], density: u32) -> Result<()> {
    if textures.is_empty() {
        return Err(SpriteError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(textures.len());
    for texture in textures {
        if texture.width() == 0 || texture.height() == 0 {
            return Err(SpriteError::InvalidDimension {
                name: texture.name().to_string(),
                width: texture.width(),
                height: texture.height(),
            });
        }

        if !seen.insert(texture.name()) {
            return Err(SpriteError::DuplicateName(texture.name().to_string()));
        }

        if texture.density() == 0 || density == 0 {
            return Err(unsupported_density(texture, density));
        }
    }

    // Textures without an integer ratio are still resampled by rounding
    if !textures.iter().any(|t| is_derivable(t.density(), density)) {
        return Err(unsupported_density(&textures[0], density));
    }

    Ok(())
}

fn unsupported_density<T: RasterSource>(texture: &T, density: u32) -> SpriteError {
    SpriteError::UnsupportedDensity {
        name: texture.name().to_string(),
        native: texture.density(),
        target: density,
    }
}

/// Tallest first, then widest, then by name
fn sort_for_packing(prepared: &mut [PreparedTexture<'_>]) {
    prepared.sort_by(|a, b| {
        b.height()
            .cmp(&a.height())
            .then_with(|| b.width().cmp(&a.width()))
            .then_with(|| a.name.cmp(b.name))
    });
}

fn ceil_sqrt(n: u64) -> u64 {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}
