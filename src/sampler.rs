//! Reduce a decoded image to a fixed-size pixel population.

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use log::debug;
use palette::Srgb;

use crate::color::Color;
use crate::error::{PaletteError, Result};

/// Working resolution (both sides) every image is resized to before clustering.
pub const SAMPLE_SIZE: u32 = 300;

/// Resize `img` to `SAMPLE_SIZE`×`SAMPLE_SIZE` and flatten it row-major.
///
/// Any color type the decoder produced is normalized to RGB8 first; alpha is
/// dropped. Nearest-neighbour resampling keeps the population restricted to
/// colors that actually occur in the source.
pub fn sample(img: &DynamicImage) -> Result<Vec<Color>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PaletteError::invalid_format(
            format!("image has no pixels ({w}x{h})"),
            None,
        ));
    }

    let rgb = img.to_rgb8();
    let resized = if (w, h) == (SAMPLE_SIZE, SAMPLE_SIZE) {
        rgb
    } else {
        image::imageops::resize(&rgb, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
    };

    let pixels: Vec<Color> = resized
        .into_raw()
        .chunks_exact(3)
        .map(|px| Color::new(px[0], px[1], px[2]))
        .collect();

    debug!(
        "sampled {}x{} {:?} image into {} pixels",
        w,
        h,
        img.color(),
        pixels.len()
    );
    Ok(pixels)
}

/// Convert sampled pixels into the float population the clusterer works on.
pub fn to_population(pixels: &[Color]) -> Vec<Srgb<f32>> {
    pixels
        .iter()
        .map(|&c| Srgb::<u8>::from(c).into_format::<f32>())
        .collect()
}
