//! Integer draws and boolean masks

use crate::permute::shuffle;
use rand::Rng;

/// Uniform integer in `[0, max_exclusive)`; zero input yields zero instead
/// of panicking
pub fn random_int<R: Rng + ?Sized>(max_exclusive: u64, rng: &mut R) -> u64 {
    if max_exclusive == 0 {
        return 0;
    }
    rng.random_range(0..max_exclusive)
}

/// Boolean mask of `length` slots with a random number of set slots
///
/// The ones-count is drawn uniformly from `[min_ones, max_ones)`, falls back
/// to `min_ones` when that interval is empty, and is clamped to `length`.
/// Set slots are spread by an in-place shuffle.
pub fn random_mask<R: Rng + ?Sized>(
    length: usize,
    min_ones: usize,
    max_ones: usize,
    rng: &mut R,
) -> Vec<bool> {
    let ones = if min_ones < max_ones {
        rng.random_range(min_ones..max_ones)
    } else {
        min_ones
    };
    let ones = ones.min(length);

    let mut mask = vec![false; length];
    for slot in mask.iter_mut().take(ones) {
        *slot = true;
    }
    shuffle(&mut mask, rng);
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_int_zero_max_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_int(0, &mut rng), 0);
    }

    #[test]
    fn test_random_int_stays_below_max() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(random_int(6, &mut rng) < 6);
        }
    }

    #[test]
    fn test_random_int_reaches_every_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[random_int(6, &mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_mask_ones_count_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let mask = random_mask(10, 2, 5, &mut rng);
            let ones = mask.iter().filter(|b| **b).count();
            assert_eq!(mask.len(), 10);
            assert!((2..5).contains(&ones));
        }
    }

    #[test]
    fn test_mask_empty_interval_uses_min_ones() {
        let mut rng = StdRng::seed_from_u64(5);
        let mask = random_mask(8, 3, 3, &mut rng);
        assert_eq!(mask.iter().filter(|b| **b).count(), 3);
    }

    #[test]
    fn test_mask_clamps_count_to_length() {
        let mut rng = StdRng::seed_from_u64(6);
        let mask = random_mask(3, 5, 9, &mut rng);
        assert_eq!(mask, vec![true, true, true]);
    }

    #[test]
    fn test_mask_zero_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_mask(0, 0, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_mask_spreads_set_slots() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut hit = [false; 4];
        for _ in 0..500 {
            let mask = random_mask(4, 1, 2, &mut rng);
            for (slot, set) in mask.iter().enumerate() {
                if *set {
                    hit[slot] = true;
                }
            }
        }
        assert!(hit.iter().all(|h| *h));
    }
}
