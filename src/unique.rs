use crate::color::Color;

/// Greedily keep candidates that are at least `threshold` away from every
/// color kept before them.
///
/// A single pass in candidate order: a candidate closer than `threshold` to
/// any kept color is dropped, one at exactly `threshold` is kept. Survivors
/// stay in their original relative order. The result is not the globally
/// best-separated subset, only the first one this order produces.
pub fn prioritize_unique_colors(candidates: &[Color], threshold: f64) -> Vec<Color> {
    let mut unique: Vec<Color> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique
            .iter()
            .any(|existing| candidate.distance(existing) < threshold)
        {
            unique.push(*candidate);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_near_duplicate_red() {
        let candidates = [
            Color::new(255, 0, 0),
            Color::new(255, 10, 10),
            Color::new(0, 255, 0),
        ];
        assert_eq!(
            prioritize_unique_colors(&candidates, 15.0),
            vec![Color::new(255, 0, 0), Color::new(0, 255, 0)]
        );
    }

    #[test]
    fn distance_equal_to_threshold_is_kept() {
        // 3-4-5 triangle in the red/green plane: distance exactly 5.
        let candidates = [Color::new(0, 0, 0), Color::new(3, 4, 0)];
        assert_eq!(prioritize_unique_colors(&candidates, 5.0).len(), 2);
        assert_eq!(prioritize_unique_colors(&candidates, 5.000001).len(), 1);
    }

    #[test]
    fn zero_threshold_keeps_everything_including_duplicates() {
        let candidates = [Color::new(1, 1, 1), Color::new(1, 1, 1), Color::new(2, 2, 2)];
        assert_eq!(prioritize_unique_colors(&candidates, 0.0), candidates.to_vec());
    }

    #[test]
    fn huge_threshold_keeps_only_first() {
        let candidates = [Color::new(0, 0, 0), Color::new(255, 255, 255)];
        assert_eq!(
            prioritize_unique_colors(&candidates, 1000.0),
            vec![Color::new(0, 0, 0)]
        );
    }

    #[test]
    fn survivors_keep_candidate_order() {
        let candidates = [
            Color::new(0, 0, 255),
            Color::new(0, 0, 250),
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
        ];
        assert_eq!(
            prioritize_unique_colors(&candidates, 20.0),
            vec![Color::new(0, 0, 255), Color::new(255, 0, 0), Color::new(0, 255, 0)]
        );
    }

    #[test]
    fn survivor_count_never_grows_with_threshold() {
        let candidates: Vec<Color> = (0..20u8)
            .map(|i| Color::new(i.wrapping_mul(37), i.wrapping_mul(91), i.wrapping_mul(13)))
            .collect();
        let mut previous = usize::MAX;
        for threshold in [0.0, 5.0, 20.0, 50.0, 100.0, 200.0, 500.0] {
            let n = prioritize_unique_colors(&candidates, threshold).len();
            assert!(n <= previous, "threshold {threshold} kept {n} > {previous}");
            previous = n;
        }
    }

    #[test]
    fn empty_input() {
        assert!(prioritize_unique_colors(&[], 10.0).is_empty());
    }
}
