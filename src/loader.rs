use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::{PaletteError, Result};

/// Open and decode an image file.
///
/// A missing or unreadable file is `ImageLoad`; a file that is not a
/// decodable image is `InvalidImageFormat`.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let load_err = |source| PaletteError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(load_err)?
        .with_guessed_format()
        .map_err(load_err)?;

    let img = reader.decode().map_err(|e| {
        PaletteError::invalid_format(format!("{} is not a valid image", path.display()), Some(e))
    })?;
    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Decode an in-memory image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| PaletteError::invalid_format("unable to decode image", Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_load_error() {
        let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, PaletteError::ImageLoad { .. }));
    }

    #[test]
    fn garbage_file_is_invalid_format() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.png");
        std::fs::write(&path, b"this is not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidImageFormat { .. }));
    }

    #[test]
    fn round_trips_a_png() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dot.png");
        RgbImage::from_pixel(3, 2, Rgb([4, 5, 6])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.to_rgb8().get_pixel(2, 1), &Rgb([4, 5, 6]));

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(decode_image(&bytes).unwrap().width(), 3);
    }

    #[test]
    fn undecodable_bytes() {
        assert!(matches!(
            decode_image(&[0, 1, 2, 3]),
            Err(PaletteError::InvalidImageFormat { .. })
        ));
    }
}
