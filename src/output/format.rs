use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::config::CompressConfig;
use crate::error::{Result, SpriteError};
use crate::sheet::Canvas;

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CompressConfig", into = "CompressConfig")]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

/// Encode a canvas as PNG, optionally recompressed with oxipng
pub fn encode_png(canvas: &Canvas, compress: Option<CompressionLevel>) -> Result<Vec<u8>> {
    let mut png_data = Cursor::new(Vec::new());
    canvas
        .image()
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(SpriteError::Encoding)?;

    match compress {
        Some(level) => {
            let opts = match level {
                CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
                CompressionLevel::Max => oxipng::Options::max_compression(),
            };
            oxipng::optimize_from_memory(&png_data.into_inner(), &opts)
                .map_err(|e| SpriteError::Compress(e.to_string()))
        }
        None => Ok(png_data.into_inner()),
    }
}

/// Save a canvas as a PNG file
pub fn save_canvas_png(
    canvas: &Canvas,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let data = encode_png(canvas, compress)?;

    fs::write(path, data).map_err(|e| SpriteError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
