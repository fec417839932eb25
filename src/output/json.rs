use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SpriteError};
use crate::sheet::{Manifest, Placement};

#[derive(Serialize)]
struct JsonPlacement {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    density: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    rotated: bool,
}

impl From<&Placement> for JsonPlacement {
    fn from(placement: &Placement) -> Self {
        Self {
            x: placement.x(),
            y: placement.y(),
            width: placement.width(),
            height: placement.height(),
            density: placement.density,
            rotated: placement.rotated,
        }
    }
}

/// Render a manifest as `{name: {x, y, width, height, density}}` JSON
pub fn manifest_json(manifest: &Manifest) -> Result<String> {
    let entries: BTreeMap<&str, JsonPlacement> = manifest
        .iter()
        .map(|p| (p.name.as_str(), JsonPlacement::from(p)))
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Write manifest JSON to a file
pub fn write_manifest_json(manifest: &Manifest, path: &Path) -> Result<()> {
    let content = manifest_json(manifest)?;

    fs::write(path, content).map_err(|e| SpriteError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
