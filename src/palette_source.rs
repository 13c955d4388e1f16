//! Palette resource loading.
//!
//! The palette is configuration data, loaded exactly once before any
//! conversion and treated as read-only afterwards. Three sources exist, in
//! order of precedence: an inline hex color list (`--colors`), an external
//! JSON file (`--palette`), and the embedded default palette compiled into
//! the binary.
//!
//! The JSON format is an ordered array of records:
//!
//! ```json
//! [
//!   { "name": "Black", "rgb": [0, 0, 0] },
//!   { "name": "White", "rgb": [255, 255, 255] }
//! ]
//! ```

use std::path::Path;

use block_quant::{Palette, Rgb, Swatch};
use serde::Deserialize;

use crate::error::AppError;

/// Default palette, embedded at compile time.
const DEFAULT_PALETTE_JSON: &str = include_str!("../assets/default-palette.json");

/// One palette record as it appears in the JSON resource.
#[derive(Debug, Deserialize)]
struct SwatchRecord {
    name: String,
    rgb: [u8; 3],
}

/// Load the embedded default palette.
pub fn default_palette() -> Result<Palette, AppError> {
    parse_palette_json(DEFAULT_PALETTE_JSON)
}

/// Load a palette from a JSON file on disk.
pub fn load_palette_file(path: &Path) -> Result<Palette, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::PaletteResource(format!("failed to read {}: {}", path.display(), e))
    })?;
    let palette = parse_palette_json(&content)?;
    tracing::info!(
        path = %path.display(),
        swatches = palette.len(),
        "Loaded palette file"
    );
    Ok(palette)
}

/// Parse a comma-separated hex color list, e.g. `"#000000,#FFFFFF,#ED1C24"`.
///
/// Swatches are named after their normalized hex form since the list
/// carries no names. Empty items (stray commas) are skipped.
pub fn parse_color_list(list: &str) -> Result<Palette, AppError> {
    let colors: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    Ok(Palette::from_hex(&colors)?)
}

/// Resolve the palette for one invocation.
///
/// Precedence: `--colors` inline list, then `--palette` file, then the
/// embedded default.
pub fn resolve_palette(
    palette_file: Option<&Path>,
    colors: Option<&str>,
) -> Result<Palette, AppError> {
    if let Some(list) = colors {
        return parse_color_list(list);
    }
    if let Some(path) = palette_file {
        return load_palette_file(path);
    }
    default_palette()
}

fn parse_palette_json(content: &str) -> Result<Palette, AppError> {
    let records: Vec<SwatchRecord> = serde_json::from_str(content)
        .map_err(|e| AppError::PaletteResource(format!("invalid palette JSON: {}", e)))?;
    let swatches = records
        .into_iter()
        .map(|record| Swatch::new(record.name, Rgb::from_bytes(record.rgb)))
        .collect();
    Ok(Palette::new(swatches)?)
}
