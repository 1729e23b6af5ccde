//! Error types for palette extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Every failure the extraction pipeline and its collaborators can surface.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image data could not be decoded or normalized to 3-channel RGB
    #[error("Invalid image format: {message}")]
    InvalidImageFormat {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    /// The pixel population has fewer distinct colors than clusters requested
    #[error(
        "Insufficient pixel diversity: image has {distinct} distinct pixels but {requested} clusters were requested"
    )]
    InsufficientPixelDiversity { distinct: usize, requested: usize },

    /// Caller input rejected before any work started
    #[error("Invalid argument: {parameter} = {value} ({reason})")]
    InvalidArgument {
        parameter: String,
        value: String,
        reason: String,
    },

    /// The clustering backend produced unusable centroids
    #[error("Clustering failed: {reason}")]
    ClusteringFailed { reason: String },

    /// Image file could not be opened or read
    #[error("Failed to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Swatch image could not be encoded
    #[error("Failed to encode palette image")]
    Encode(#[source] image::ImageError),

    /// Output file could not be written
    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PaletteError {
    pub fn invalid_argument(
        parameter: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>, source: Option<image::ImageError>) -> Self {
        Self::InvalidImageFormat {
            message: message.into(),
            source,
        }
    }

    /// True when the caller can retry with different arguments.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            PaletteError::InvalidArgument { .. } | PaletteError::InsufficientPixelDiversity { .. }
        )
    }

    /// Short actionable advice for display next to the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            PaletteError::InsufficientPixelDiversity { distinct, .. } => Some(format!(
                "lower --colors or --buffer so that colors + buffer <= {distinct}"
            )),
            PaletteError::InvalidImageFormat { .. } => {
                Some("use a PNG, JPEG, GIF, BMP or WebP image".to_string())
            }
            PaletteError::ClusteringFailed { .. } => {
                Some("try a different --seed or a smaller --buffer".to_string())
            }
            _ => None,
        }
    }
}
