use rand::Rng;

use crate::constants::MIN_JITTER_MARGIN_DEG;
use crate::geometry::slice_width;

/// Largest offset from a slice center that still keeps `margin` degrees away
/// from both borders. Margins below [`MIN_JITTER_MARGIN_DEG`] are raised to it,
/// so a landing never sits on a border.
pub fn max_jitter(slice_count: usize, margin: f64) -> f64 {
    (slice_width(slice_count) / 2.0 - margin.max(MIN_JITTER_MARGIN_DEG)).max(0.0)
}

/// Uniform offset in `[-max_jitter, +max_jitter]`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, slice_count: usize, margin: f64) -> f64 {
    let bound = max_jitter(slice_count, margin);
    if bound > 0.0 {
        rng.gen_range(-bound..=bound)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{angle_for_index, slice_at_pointer};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_max_jitter() {
        assert_eq!(max_jitter(6, 4.0), 26.0);
        // margin wider than half a slice
        assert_eq!(max_jitter(90, 4.0), 0.0);
    }

    #[test]
    fn test_small_margins_keep_off_the_border() {
        assert_eq!(max_jitter(4, 0.0), 44.5);
        assert_eq!(max_jitter(6, -3.0), 29.5);
        assert_eq!(max_jitter(6, 0.25), 29.5);
        assert_eq!(max_jitter(360, 0.0), 0.0);

        let mut rng = SmallRng::seed_from_u64(13);
        for count in [1, 2, 4, 6] {
            let half_width = slice_width(count) / 2.0;
            for index in 0..count {
                for _ in 0..200 {
                    let offset = jitter(&mut rng, count, 0.0);
                    assert!(offset.abs() <= half_width - MIN_JITTER_MARGIN_DEG);
                    let target = angle_for_index(index, count) + offset;
                    assert_eq!(slice_at_pointer(target, count), index);
                }
            }
        }
    }

    #[test]
    fn test_jitter_respects_bound() {
        let mut rng = SmallRng::seed_from_u64(7);
        for count in [1, 2, 6, 12, 45] {
            let bound = max_jitter(count, 4.0);
            for _ in 0..500 {
                let offset = jitter(&mut rng, count, 4.0);
                assert!(offset.abs() <= bound, "{offset} exceeds {bound}");
            }
        }
    }

    #[test]
    fn test_jitter_is_zero_when_slices_are_narrow() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(jitter(&mut rng, 120, 4.0), 0.0);
        }
    }

    #[test]
    fn test_jittered_landing_stays_in_slice() {
        let mut rng = SmallRng::seed_from_u64(42);
        for count in 1..=20 {
            for index in 0..count {
                for _ in 0..20 {
                    let target = angle_for_index(index, count) + jitter(&mut rng, count, 4.0);
                    assert_eq!(slice_at_pointer(target, count), index);
                }
            }
        }
    }

    #[test]
    fn test_jitter_uses_both_sides() {
        let mut rng = SmallRng::seed_from_u64(3);
        let samples: Vec<f64> = (0..200).map(|_| jitter(&mut rng, 6, 4.0)).collect();
        assert!(samples.iter().any(|s| *s < 0.0));
        assert!(samples.iter().any(|s| *s > 0.0));
    }
}
