use serde::{Deserialize, Serialize};

use crate::output::CompressionLevel;
use crate::texture::ResampleFilter;

/// PNG compression level as written in a config file: `0`-`6` or `"max"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl TryFrom<CompressConfig> for CompressionLevel {
    type Error = String;

    fn try_from(value: CompressConfig) -> Result<Self, Self::Error> {
        match value {
            CompressConfig::Level(n) => n.to_string().parse(),
            CompressConfig::Max(s) => s.parse(),
        }
    }
}

impl From<CompressionLevel> for CompressConfig {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Level(n) => CompressConfig::Level(n),
            CompressionLevel::Max => CompressConfig::Max("max".to_string()),
        }
    }
}

/// Config file version this crate reads and writes
pub const CONFIG_VERSION: u32 = 1;

/// Sprite sheet configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Base name for output files (sprite.png, sprite@2x.json, etc.)
    pub name: String,
    /// Densities to produce, one sheet each
    pub densities: Vec<u32>,
    /// Pixels between neighbouring textures
    pub padding: u32,
    /// Fixed shelf width; derived from the texture set when absent
    pub max_width: Option<u32>,
    /// Round canvas dimensions up to powers of two
    pub pot: bool,
    /// Turn tall textures on their side
    pub allow_rotation: bool,
    /// Filter used when reducing density
    pub filter: ResampleFilter,
    /// PNG compression (optional)
    pub compress: Option<CompressionLevel>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            name: "sprite".to_string(),
            densities: vec![1, 2],
            padding: 0,
            max_width: None,
            pot: false,
            allow_rotation: false,
            filter: ResampleFilter::Box,
            compress: None,
        }
    }
}
