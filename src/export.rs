//! Text export and on-disk output layout.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::color::Color;
use crate::error::{PaletteError, Result};

pub const DEFAULT_OUT_DIR: &str = "palettes";

/// One `<hex> | <rgb>` line per color, in palette order.
pub fn export_text(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| format!("{} | {}\n", c.to_hex(), c.to_rgb_string()))
        .collect()
}

/// Where the swatch image and text export for one input image go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub image: PathBuf,
    pub text: PathBuf,
}

impl OutputPaths {
    /// `<out_dir>/<stem>_palette.{png,txt}`, `stem` being the input file name
    /// without its extension.
    pub fn new(input: &Path, out_dir: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Self {
            image: out_dir.join(format!("{stem}_palette.png")),
            text: out_dir.join(format!("{stem}_palette.txt")),
        }
    }
}

/// Write both outputs, creating the parent directory when needed.
pub fn write_outputs(paths: &OutputPaths, png: &[u8], colors: &[Color]) -> Result<()> {
    for path in [&paths.image, &paths.text] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PaletteError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(&paths.image, png).map_err(|source| PaletteError::Io {
        path: paths.image.clone(),
        source,
    })?;
    info!("wrote {}", paths.image.display());

    fs::write(&paths.text, export_text(colors)).map_err(|source| PaletteError::Io {
        path: paths.text.clone(),
        source,
    })?;
    info!("wrote {}", paths.text.display());
    Ok(())
}
