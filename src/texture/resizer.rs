use image::{RgbaImage, imageops::FilterType};
use serde::{Deserialize, Serialize};

/// Filter used when a texture is reduced to a lower density
///
/// Enlarging always uses nearest neighbor so integer ratios replicate pixels
/// exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    /// Area average over each destination pixel
    #[default]
    Box,
    /// Nearest neighbor (best for pixel art)
    Nearest,
}

/// Whether a texture at `native` density can be scaled to `target` by an
/// integer factor in either direction
pub fn is_derivable(native: u32, target: u32) -> bool {
    native > 0 && target > 0 && (target % native == 0 || native % target == 0)
}

/// Length of `len` native pixels at the target density, rounded half up,
/// never below one pixel
pub fn scaled_len(len: u32, native: u32, target: u32) -> u32 {
    if native == target || native == 0 {
        return len;
    }
    let native = u64::from(native);
    let scaled = (u64::from(len) * u64::from(target) + native / 2) / native;
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Resample an image to exactly `width` x `height`
pub fn resample(img: &RgbaImage, width: u32, height: u32, filter: ResampleFilter) -> RgbaImage {
    let (w, h) = img.dimensions();
    if (w, h) == (width, height) {
        return img.clone();
    }

    let shrinking = width <= w && height <= h;
    match filter {
        ResampleFilter::Box if shrinking => image::imageops::thumbnail(img, width, height),
        _ => image::imageops::resize(img, width, height, FilterType::Nearest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_is_derivable() {
        assert!(is_derivable(1, 1));
        assert!(is_derivable(1, 2));
        assert!(is_derivable(2, 1));
        assert!(is_derivable(1, 3));
        assert!(is_derivable(4, 2));
        assert!(!is_derivable(2, 3));
        assert!(!is_derivable(3, 2));
        assert!(!is_derivable(0, 1));
        assert!(!is_derivable(1, 0));
    }

    #[test]
    fn test_scaled_len() {
        assert_eq!(scaled_len(32, 1, 1), 32);
        assert_eq!(scaled_len(32, 1, 2), 64);
        assert_eq!(scaled_len(32, 2, 1), 16);
        assert_eq!(scaled_len(33, 2, 1), 17); // 16.5 rounds up
        assert_eq!(scaled_len(1, 4, 1), 1); // never collapses to zero
        assert_eq!(scaled_len(10, 1, 3), 30);
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));

        let scaled = resample(&img, 4, 2, ResampleFilter::Box);

        assert_eq!(scaled.dimensions(), (4, 2));
        for y in 0..2 {
            assert_eq!(*scaled.get_pixel(0, y), Rgba([255, 0, 0, 255]));
            assert_eq!(*scaled.get_pixel(1, y), Rgba([255, 0, 0, 255]));
            assert_eq!(*scaled.get_pixel(2, y), Rgba([0, 0, 255, 255]));
            assert_eq!(*scaled.get_pixel(3, y), Rgba([0, 0, 255, 255]));
        }
    }

    #[test]
    fn test_downscale_uniform_keeps_color() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([40, 80, 120, 255]));

        for filter in [ResampleFilter::Box, ResampleFilter::Nearest] {
            let scaled = resample(&img, 4, 4, filter);
            assert_eq!(scaled.dimensions(), (4, 4));
            assert!(scaled.pixels().all(|p| *p == Rgba([40, 80, 120, 255])));
        }
    }

    #[test]
    fn test_same_size_is_copy() {
        let img = RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 4]));
        let scaled = resample(&img, 3, 5, ResampleFilter::Box);
        assert_eq!(scaled, img);
    }
}
