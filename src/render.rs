//! Swatch image rendering.
//!
//! One square swatch per color, left to right, with a white band underneath
//! holding the color's label in black.

use image::{ImageFormat, Rgb, RgbImage};

use crate::color::{Color, LabelFormat};
use crate::error::{PaletteError, Result};

pub const SWATCH_SIZE: u32 = 100;
pub const LABEL_BAND: u32 = 50;
const LABEL_TOP: u32 = SWATCH_SIZE + 20;
const HEX_LABEL_LEFT: u32 = 32;
const RGB_LABEL_LEFT: u32 = 10;

const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;
/// Horizontal advance per character, in glyph pixels.
const ADVANCE: u32 = GLYPH_W + 1;
const MAX_SCALE: u32 = 2;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Draw the palette as a `100·n × 150` image.
///
/// An empty palette still produces a (1 px wide) white image so callers can
/// always write a file.
pub fn render_palette(colors: &[Color], format: LabelFormat) -> RgbImage {
    let width = (SWATCH_SIZE * colors.len() as u32).max(1);
    let mut canvas = RgbImage::from_pixel(width, SWATCH_SIZE + LABEL_BAND, WHITE);

    for (i, color) in colors.iter().enumerate() {
        let x0 = i as u32 * SWATCH_SIZE;
        let fill = Rgb(color.channels());
        for y in 0..SWATCH_SIZE {
            for x in x0..x0 + SWATCH_SIZE {
                canvas.put_pixel(x, y, fill);
            }
        }

        let (label, left) = match format {
            LabelFormat::Hex => (color.to_hex(), HEX_LABEL_LEFT),
            LabelFormat::Rgb => (color.to_rgb_string(), RGB_LABEL_LEFT),
        };
        let scale = label_scale(&label, SWATCH_SIZE - left);
        draw_text(&mut canvas, x0 + left, LABEL_TOP, &label, scale);
    }
    canvas
}

/// PNG-encode a rendered palette.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buf);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(PaletteError::Encode)?;
    }
    Ok(buf)
}

/// Largest integer scale (up to `MAX_SCALE`) at which `text` fits in `room` px.
fn label_scale(text: &str, room: u32) -> u32 {
    let natural = text.chars().count() as u32 * ADVANCE;
    if natural == 0 {
        return 1;
    }
    (room / natural).clamp(1, MAX_SCALE)
}

fn draw_text(canvas: &mut RgbImage, left: u32, top: u32, text: &str, scale: u32) {
    let mut pen = left;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (gy, row) in rows.iter().enumerate() {
                for gx in 0..GLYPH_W {
                    if row & (1 << (GLYPH_W - 1 - gx)) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let x = pen + gx * scale + dx;
                            let y = top + gy as u32 * scale + dy;
                            if x < canvas.width() && y < canvas.height() {
                                canvas.put_pixel(x, y, BLACK);
                            }
                        }
                    }
                }
            }
        }
        pen += ADVANCE * scale;
    }
}

/// 3×5 bitmaps for the label alphabet; bit 2 is the leftmost column.
fn glyph(ch: char) -> Option<[u8; GLYPH_H as usize]> {
    let rows = match ch.to_ascii_lowercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' => [0b000, 0b011, 0b101, 0b101, 0b011],
        'b' => [0b100, 0b110, 0b101, 0b101, 0b110],
        'c' => [0b000, 0b011, 0b100, 0b100, 0b011],
        'd' => [0b001, 0b011, 0b101, 0b101, 0b011],
        'e' => [0b000, 0b010, 0b111, 0b100, 0b011],
        'f' => [0b011, 0b100, 0b110, 0b100, 0b100],
        'g' => [0b011, 0b101, 0b011, 0b001, 0b110],
        'r' => [0b000, 0b101, 0b110, 0b100, 0b100],
        '#' => [0b101, 0b111, 0b101, 0b111, 0b101],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ' ' => [0b000; 5],
        _ => return None,
    };
    Some(rows)
}
