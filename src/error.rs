use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteError {
    #[error("No textures to pack")]
    EmptyInput,

    #[error("Duplicate texture name '{0}'")]
    DuplicateName(String),

    #[error("Texture '{name}' has invalid dimensions {width}x{height}")]
    InvalidDimension {
        name: String,
        width: u32,
        height: u32,
    },

    #[error("Density {target}x cannot be derived from texture '{name}' at {native}x")]
    UnsupportedDensity {
        name: String,
        native: u32,
        target: u32,
    },

    #[error("Texture '{name}' ({width}px wide) exceeds maximum sheet width ({max_width}px)")]
    TextureTooWide {
        name: String,
        width: u32,
        max_width: u32,
    },

    #[error("Placing texture '{0}' would grow the sheet past u32::MAX pixels")]
    CanvasTooLarge(String),

    #[error("Failed to decode texture '{name}': {source}")]
    ImageDecode {
        name: String,
        source: image::ImageError,
    },

    #[error("Failed to encode canvas: {0}")]
    Encoding(#[source] image::ImageError),

    #[error("Failed to compress PNG: {0}")]
    Compress(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SpriteError>;
