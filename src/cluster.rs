//! Seeded k-means over the sampled pixel population.
//!
//! Clustering runs in plain sRGB space (the same space the uniqueness filter
//! measures distances in). Centroids come back in the backend's centroid-index
//! order; nothing here sorts them by brightness, hue or population.

use std::collections::HashSet;

use kmeans_colors::get_kmeans;
use log::debug;
use palette::Srgb;

use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::sampler::to_population;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Iteration cap for a single k-means run.
pub const MAX_ITERATIONS: usize = 20;

/// Centroid movement below which a run counts as converged.
pub const CONVERGENCE: f32 = 1e-4;

/// Upper bound on `k`; the backend records cluster membership as `u8`.
pub const MAX_CLUSTERS: usize = u8::MAX as usize + 1;

/// Cluster `pixels` into exactly `k` candidate colors.
///
/// Identical `pixels`, `k` and `seed` always give the identical list, order
/// included. Channels are rounded to the nearest integer.
pub fn cluster(pixels: &[Color], k: usize, seed: u64) -> Result<Vec<Color>> {
    if k == 0 || k > MAX_CLUSTERS {
        return Err(PaletteError::invalid_argument(
            "k",
            k,
            format!("cluster count must be in 1..={MAX_CLUSTERS}"),
        ));
    }

    let distinct = count_distinct(pixels);
    if distinct < k {
        return Err(PaletteError::InsufficientPixelDiversity {
            distinct,
            requested: k,
        });
    }

    let population = to_population(pixels);
    let result = get_kmeans(k, MAX_ITERATIONS, CONVERGENCE, false, &population, seed);
    debug!(
        "k-means k={} seed={} over {} pixels ({} distinct), score {:.4}",
        k,
        seed,
        pixels.len(),
        distinct,
        result.score
    );

    if result.centroids.len() != k {
        return Err(PaletteError::ClusteringFailed {
            reason: format!(
                "expected {k} centroids, got {}",
                result.centroids.len()
            ),
        });
    }

    result.centroids.iter().map(centroid_to_color).collect()
}

fn count_distinct(pixels: &[Color]) -> usize {
    pixels.iter().collect::<HashSet<_>>().len()
}

fn centroid_to_color(c: &Srgb) -> Result<Color> {
    let channel = |v: f32| -> Result<u8> {
        if !v.is_finite() {
            return Err(PaletteError::ClusteringFailed {
                reason: format!("non-finite centroid channel {v}"),
            });
        }
        Ok((v * 255.0).round().clamp(0.0, 255.0) as u8)
    };
    Ok(Color::new(
        channel(c.red)?,
        channel(c.green)?,
        channel(c.blue)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> Vec<Color> {
        let mut pixels = Vec::new();
        for i in 0..50u8 {
            pixels.push(Color::new(i % 5, i % 3, 0));
            pixels.push(Color::new(250 - i % 5, 250, 250 - i % 3));
        }
        pixels
    }

    #[test]
    fn returns_exactly_k_centroids() {
        let colors = cluster(&two_blobs(), 4, DEFAULT_SEED).unwrap();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn separates_obvious_groups() {
        let colors = cluster(&two_blobs(), 2, DEFAULT_SEED).unwrap();
        let dark = colors.iter().filter(|c| c.g < 10).count();
        let light = colors.iter().filter(|c| c.g > 240).count();
        assert_eq!((dark, light), (1, 1));
    }

    #[test]
    fn same_seed_same_order() {
        let pixels = two_blobs();
        let a = cluster(&pixels, 6, 7).unwrap();
        let b = cluster(&pixels, 6, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_distinct_pixels() {
        let pixels = vec![Color::new(1, 1, 1); 500];
        match cluster(&pixels, 3, DEFAULT_SEED) {
            Err(PaletteError::InsufficientPixelDiversity {
                distinct,
                requested,
            }) => assert_eq!((distinct, requested), (1, 3)),
            other => panic!("expected InsufficientPixelDiversity, got {other:?}"),
        }
    }

    #[test]
    fn exact_distinct_count_is_enough() {
        let pixels = vec![
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(0, 0, 0),
        ];
        let mut colors = cluster(&pixels, 2, DEFAULT_SEED).unwrap();
        colors.sort();
        assert_eq!(colors, vec![Color::new(0, 0, 0), Color::new(255, 255, 255)]);
    }

    #[test]
    fn rejects_out_of_range_k() {
        let pixels = two_blobs();
        assert!(matches!(
            cluster(&pixels, 0, DEFAULT_SEED),
            Err(PaletteError::InvalidArgument { .. })
        ));
        assert!(matches!(
            cluster(&pixels, MAX_CLUSTERS + 1, DEFAULT_SEED),
            Err(PaletteError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn centroids_round_to_nearest() {
        let c = centroid_to_color(&Srgb::new(0.5, 1.2, -0.1)).unwrap();
        assert_eq!(c, Color::new(128, 255, 0));
        assert!(centroid_to_color(&Srgb::new(f32::NAN, 0.0, 0.0)).is_err());
    }
}
