//! Extract a small palette of visually distinct colors from an image.
//!
//! The pipeline resizes the image to a fixed working size, runs seeded
//! k-means over its pixels asking for a few more clusters than needed, then
//! greedily drops centroids that sit too close to an earlier one:
//!
//! ```no_run
//! use palette_extractor::{ExtractOptions, extract, load_image};
//! use std::path::Path;
//!
//! let img = load_image(Path::new("photo.jpg"))?;
//! for color in extract(&img, &ExtractOptions::new(5, 40.0))? {
//!     println!("{} | {}", color.to_hex(), color.to_rgb_string());
//! }
//! # Ok::<(), palette_extractor::PaletteError>(())
//! ```
//!
//! Compiled to WebAssembly, [`extract_palette_wasm`] exposes the same
//! pipeline to JavaScript.

use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;

pub mod cluster;
pub mod color;
pub mod error;
pub mod export;
pub mod extract;
pub mod loader;
pub mod render;
pub mod sampler;
pub mod unique;

pub use cluster::{DEFAULT_SEED, cluster};
pub use color::{Color, LabelFormat, PaletteEntry};
pub use error::{PaletteError, Result};
pub use export::{OutputPaths, export_text, write_outputs};
pub use extract::{ExtractOptions, extract, extract_palette};
pub use loader::{decode_image, load_image};
pub use render::{encode_png, render_palette};
pub use sampler::sample;
pub use unique::prioritize_unique_colors;

/// Decode `input`, extract its palette and render the swatch image.
///
/// Returns the PNG-encoded swatch image together with the palette entries.
pub fn extract_palette_bytes(
    input: &[u8],
    opts: &ExtractOptions,
    format: LabelFormat,
) -> Result<(Vec<u8>, Vec<PaletteEntry>)> {
    // Reject bad arguments before paying for the decode.
    opts.validate()?;
    let img = decode_image(input)?;
    let entries = extract_palette(&img, opts)?;

    let colors: Vec<Color> = entries.iter().map(|e| e.color).collect();
    let png = encode_png(&render_palette(&colors, format))?;
    Ok((png, entries))
}

/// JavaScript entry point.
///
/// Resolves to `{ image: Uint8Array, palette: string[], rgb: string[], text: string }`
/// where `image` is the PNG swatch sheet, `palette`/`rgb` hold each color's
/// hex and decimal encodings, and `text` is the line-per-color export.
#[wasm_bindgen]
pub fn extract_palette_wasm(
    input: Vec<u8>,
    n_colors: usize,
    threshold: f64,
    format: Option<String>,
    seed: Option<u64>,
) -> std::result::Result<Object, JsValue> {
    let to_js = |e: PaletteError| JsValue::from_str(&e.to_string());

    let format: LabelFormat = match format {
        Some(f) => f.parse().map_err(to_js)?,
        None => LabelFormat::default(),
    };
    let opts = ExtractOptions::new(n_colors, threshold).with_seed(seed.unwrap_or(DEFAULT_SEED));

    let (png, entries) = extract_palette_bytes(&input, &opts, format).map_err(to_js)?;
    let colors: Vec<Color> = entries.iter().map(|e| e.color).collect();

    let hex_js = Array::new();
    let rgb_js = Array::new();
    for entry in &entries {
        hex_js.push(&JsValue::from_str(&entry.hex));
        rgb_js.push(&JsValue::from_str(&entry.rgb));
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("image"), &Uint8Array::from(png.as_slice()))?;
    Reflect::set(&result, &JsValue::from_str("palette"), &hex_js)?;
    Reflect::set(&result, &JsValue::from_str("rgb"), &rgb_js)?;
    Reflect::set(
        &result,
        &JsValue::from_str("text"),
        &JsValue::from_str(&export_text(&colors)),
    )?;
    Ok(result)
}
