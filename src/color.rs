use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{PaletteError, Result};

/// An integer RGB triple; used both for sampled pixels and palette entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb`, either case.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PaletteError::invalid_argument(
                "hex",
                s,
                "expected 6 hex digits",
            ));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| PaletteError::invalid_argument("hex", s, "invalid hex digit"))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parse `rgb(r, g, b)`; whitespace around channels is ignored.
    pub fn from_rgb_string(s: &str) -> Result<Self> {
        let malformed = || PaletteError::invalid_argument("rgb", s, "expected rgb(r, g, b)");
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(malformed());
        }
        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                PaletteError::invalid_argument("rgb", s, "channels must be integers in 0..=255")
            })?;
        }
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Euclidean distance in RGB space.
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(c: Color) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

/// A palette color together with both of its textual encodings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Color,
    pub hex: String,
    pub rgb: String,
}

impl PaletteEntry {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            hex: color.to_hex(),
            rgb: color.to_rgb_string(),
        }
    }

    pub fn label(&self, format: LabelFormat) -> &str {
        match format {
            LabelFormat::Hex => &self.hex,
            LabelFormat::Rgb => &self.rgb,
        }
    }
}

/// Which encoding labels a swatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "native-bin", derive(clap::ValueEnum))]
pub enum LabelFormat {
    #[default]
    Hex,
    Rgb,
}

impl FromStr for LabelFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(LabelFormat::Hex),
            "rgb" => Ok(LabelFormat::Rgb),
            _ => Err(PaletteError::invalid_argument(
                "format",
                s,
                "expected 'hex' or 'rgb'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase_hex_and_rgb() {
        let c = Color::new(255, 10, 171);
        assert_eq!(c.to_hex(), "#ff0aab");
        assert_eq!(c.to_rgb_string(), "rgb(255, 10, 171)");
    }

    #[test]
    fn encodings_parse_back_to_same_channels() {
        for c in [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(1, 128, 254),
            Color::new(16, 15, 160),
        ] {
            assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
            assert_eq!(Color::from_rgb_string(&c.to_rgb_string()).unwrap(), c);
        }
    }

    #[test]
    fn hex_parsing_accepts_missing_hash_and_uppercase() {
        assert_eq!(Color::from_hex("FF8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn rejects_malformed_encodings() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_rgb_string("rgb(1, 2)").is_err());
        assert!(Color::from_rgb_string("rgb(1, 2, 256)").is_err());
        assert!(Color::from_rgb_string("1, 2, 3").is_err());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Color::new(255, 0, 0);
        let b = Color::new(255, 10, 10);
        assert!((a.distance(&b) - 200f64.sqrt()).abs() < 1e-9);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn entry_label_follows_format() {
        let entry = PaletteEntry::new(Color::new(0, 255, 0));
        assert_eq!(entry.label(LabelFormat::Hex), "#00ff00");
        assert_eq!(entry.label(LabelFormat::Rgb), "rgb(0, 255, 0)");
        assert_eq!("RGB".parse::<LabelFormat>().unwrap(), LabelFormat::Rgb);
        assert!("cmyk".parse::<LabelFormat>().is_err());
    }
}
