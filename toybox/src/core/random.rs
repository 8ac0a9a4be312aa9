//! Pseudo-random draws in a fixed range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `count` values uniformly from `0..upper`.
///
/// `upper` must be non-zero; config and CLI parsing reject zero before this
/// is reached.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, count: usize, upper: u32) -> Vec<u32> {
    debug_assert!(upper > 0, "upper bound must be non-zero");
    std::iter::repeat_with(|| rng.gen_range(0..upper))
        .take(count)
        .collect()
}

/// Seeded generator when `seed` is set, otherwise seeded from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_requested_count_within_range() {
        let mut rng = rng_from_seed(Some(7));
        let values = draw(&mut rng, 500, 100);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|value| *value < 100));
    }

    #[test]
    fn same_seed_same_values() {
        let first = draw(&mut rng_from_seed(Some(42)), 16, 1_000);
        let second = draw(&mut rng_from_seed(Some(42)), 16, 1_000);
        assert_eq!(first, second);
    }

    #[test]
    fn upper_of_one_always_yields_zero() {
        let values = draw(&mut rng_from_seed(None), 8, 1);
        assert_eq!(values, vec![0; 8]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(draw(&mut rng_from_seed(Some(1)), 0, 10).is_empty());
    }
}
