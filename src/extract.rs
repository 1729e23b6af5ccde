//! The extraction pipeline: sample, cluster, de-duplicate, truncate.

use image::DynamicImage;
use log::{debug, warn};

use crate::cluster::{DEFAULT_SEED, MAX_CLUSTERS, cluster};
use crate::color::{Color, PaletteEntry};
use crate::error::{PaletteError, Result};
use crate::sampler::sample;
use crate::unique::prioritize_unique_colors;

/// Extra clusters requested beyond `count` to absorb near-duplicate centroids.
pub const DEFAULT_BUFFER: usize = 12;
pub const DEFAULT_COUNT: usize = 5;
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// Parameters for a single extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractOptions {
    /// Number of palette colors wanted
    pub count: usize,
    /// Minimum RGB distance between any two palette colors
    pub threshold: f64,
    /// Over-provisioning added to `count` when clustering
    pub buffer: usize,
    /// k-means seed
    pub seed: u64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            threshold: DEFAULT_THRESHOLD,
            buffer: DEFAULT_BUFFER,
            seed: DEFAULT_SEED,
        }
    }
}

impl ExtractOptions {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            count,
            threshold,
            ..Self::default()
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of clusters the clusterer is asked for.
    pub fn cluster_count(&self) -> usize {
        self.count.saturating_add(self.buffer)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(PaletteError::invalid_argument(
                "count",
                self.count,
                "must be a positive integer",
            ));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(PaletteError::invalid_argument(
                "threshold",
                self.threshold,
                "must be a non-negative number",
            ));
        }
        if self.cluster_count() > MAX_CLUSTERS {
            return Err(PaletteError::invalid_argument(
                "count + buffer",
                self.cluster_count(),
                format!("at most {MAX_CLUSTERS} clusters are supported"),
            ));
        }
        Ok(())
    }
}

/// Extract up to `opts.count` visually distinct colors from `img`.
///
/// Fewer colors than requested is a normal outcome when the image or the
/// threshold does not allow more.
pub fn extract(img: &DynamicImage, opts: &ExtractOptions) -> Result<Vec<Color>> {
    opts.validate()?;

    let pixels = sample(img)?;
    let candidates = cluster(&pixels, opts.cluster_count(), opts.seed)?;
    let mut colors = prioritize_unique_colors(&candidates, opts.threshold);
    debug!(
        "{} of {} candidates survived threshold {}",
        colors.len(),
        candidates.len(),
        opts.threshold
    );

    if colors.len() < opts.count {
        warn!(
            "only {} distinct colors at threshold {} (requested {})",
            colors.len(),
            opts.threshold,
            opts.count
        );
    }
    colors.truncate(opts.count);
    Ok(colors)
}

/// Same as [`extract`], with both text encodings attached to every color.
pub fn extract_palette(img: &DynamicImage, opts: &ExtractOptions) -> Result<Vec<PaletteEntry>> {
    Ok(extract(img, opts)?
        .into_iter()
        .map(PaletteEntry::new)
        .collect())
}
