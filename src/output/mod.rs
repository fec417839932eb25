mod format;
mod json;

use std::path::Path;

pub use format::{CompressionLevel, encode_png, save_canvas_png};
pub use json::{manifest_json, write_manifest_json};

use log::info;

use crate::error::Result;
use crate::sheet::SpriteSheet;

/// File stem for a sheet: `sprite` at 1x, `sprite@2x` above
pub fn sheet_file_stem(base_name: &str, density: u32) -> String {
    if density == 1 {
        base_name.to_string()
    } else {
        format!("{}@{}x", base_name, density)
    }
}

/// Write `<stem>.png` and `<stem>.json` for a sheet into an existing directory
pub fn write_sprite_sheet(
    sheet: &SpriteSheet,
    output_dir: &Path,
    base_name: &str,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let stem = sheet_file_stem(base_name, sheet.density());

    let png_path = output_dir.join(format!("{}.png", stem));
    save_canvas_png(&sheet.canvas, &png_path, compress)?;
    info!("Saved {}", png_path.display());

    let json_path = output_dir.join(format!("{}.json", stem));
    write_manifest_json(&sheet.manifest, &json_path)?;
    info!("Generated {}", json_path.display());

    Ok(())
}
