//! Binary genetic operators.
//!
//! Slice-level building blocks used by [`Individual`](super::Individual).
//! They know nothing about fitness and can be reused on any bit vector.
//!
//! # Operators
//!
//! - [`random_genome`]: uniform 0/1 draw per position
//! - [`uniform_crossover`]: per-gene independent choice of donor parent
//! - [`random_reset_mutation`]: per-gene redraw with a given probability
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Gene;
use crate::error::GaError;
use rand::Rng;

/// Draws `size` genes, each independently `0` or `1` with equal probability.
pub fn random_genome<R: Rng>(size: usize, rng: &mut R) -> Vec<Gene> {
    (0..size).map(|_| rng.random_bool(0.5)).collect()
}

/// Uniform crossover.
///
/// Each child gene is taken from `parent_a` with probability `uniform_rate`,
/// otherwise from `parent_b`. The rate is clamped to `[0, 1]`, so 1.0 copies
/// `parent_a` and 0.0 copies `parent_b`.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length.
pub fn uniform_crossover<R: Rng>(
    parent_a: &[Gene],
    parent_b: &[Gene],
    uniform_rate: f64,
    rng: &mut R,
) -> Result<Vec<Gene>, GaError> {
    if parent_a.len() != parent_b.len() {
        return Err(GaError::LengthMismatch {
            left: parent_a.len(),
            right: parent_b.len(),
        });
    }
    let p = clamp_probability(uniform_rate);
    Ok(parent_a
        .iter()
        .zip(parent_b)
        .map(|(&a, &b)| if rng.random_bool(p) { a } else { b })
        .collect())
}

/// Random-reset mutation.
///
/// With probability `mutation_rate` each gene is replaced by a fresh random
/// bit. The fresh bit equals the old one half of the time, so the expected
/// number of actual flips is `len * rate / 2`.
pub fn random_reset_mutation<R: Rng>(genes: &mut [Gene], mutation_rate: f64, rng: &mut R) {
    let p = clamp_probability(mutation_rate);
    for gene in genes.iter_mut() {
        if rng.random_bool(p) {
            *gene = rng.random_bool(0.5);
        }
    }
}

/// `random_bool` panics outside `[0, 1]`; NaN maps to 0.
fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_random_genome_length() {
        let mut rng = create_rng(42);
        assert_eq!(random_genome(0, &mut rng).len(), 0);
        assert_eq!(random_genome(37, &mut rng).len(), 37);
    }

    #[test]
    fn test_random_genome_is_roughly_balanced() {
        let mut rng = create_rng(42);
        let genes = random_genome(10_000, &mut rng);
        let ones = genes.iter().filter(|&&g| g).count();
        assert!((4_500..5_500).contains(&ones), "ones = {ones}");
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        let err = uniform_crossover(&[true, false], &[true], 0.5, &mut rng).unwrap_err();
        assert_eq!(err, GaError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_crossover_rate_one_copies_a() {
        let mut rng = create_rng(42);
        let a = random_genome(64, &mut rng);
        let b: Vec<Gene> = a.iter().map(|g| !g).collect();
        assert_eq!(uniform_crossover(&a, &b, 1.0, &mut rng).unwrap(), a);
    }

    #[test]
    fn test_crossover_rate_zero_copies_b() {
        let mut rng = create_rng(42);
        let a = random_genome(64, &mut rng);
        let b: Vec<Gene> = a.iter().map(|g| !g).collect();
        assert_eq!(uniform_crossover(&a, &b, 0.0, &mut rng).unwrap(), b);
    }

    #[test]
    fn test_crossover_mixes_at_half_rate() {
        let mut rng = create_rng(7);
        let a = vec![true; 1000];
        let b = vec![false; 1000];
        let child = uniform_crossover(&a, &b, 0.5, &mut rng).unwrap();
        let from_a = child.iter().filter(|&&g| g).count();
        assert!((400..600).contains(&from_a), "from_a = {from_a}");
    }

    #[test]
    fn test_out_of_range_rates_are_clamped() {
        let mut rng = create_rng(1);
        let a = vec![true; 16];
        let b = vec![false; 16];
        assert_eq!(uniform_crossover(&a, &b, 3.0, &mut rng).unwrap(), a);
        assert_eq!(uniform_crossover(&a, &b, -1.0, &mut rng).unwrap(), b);
        assert_eq!(uniform_crossover(&a, &b, f64::NAN, &mut rng).unwrap(), b);
    }

    #[test]
    fn test_mutation_zero_rate_is_noop() {
        let mut rng = create_rng(42);
        let original = random_genome(256, &mut rng);
        let mut genes = original.clone();
        random_reset_mutation(&mut genes, 0.0, &mut rng);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_mutation_full_rate_redraws_about_half() {
        let mut rng = create_rng(42);
        let mut genes = vec![false; 10_000];
        random_reset_mutation(&mut genes, 1.0, &mut rng);
        // Every gene is redrawn; roughly half come back as 1.
        let ones = genes.iter().filter(|&&g| g).count();
        assert!((4_500..5_500).contains(&ones), "ones = {ones}");
    }

    proptest! {
        #[test]
        fn prop_child_genes_come_from_a_parent(
            seed in any::<u64>(),
            len in 0usize..128,
            rate in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let a = random_genome(len, &mut rng);
            let b = random_genome(len, &mut rng);
            let child = uniform_crossover(&a, &b, rate, &mut rng).unwrap();
            prop_assert_eq!(child.len(), len);
            for i in 0..len {
                prop_assert!(child[i] == a[i] || child[i] == b[i]);
            }
        }

        #[test]
        fn prop_mutation_preserves_length(
            seed in any::<u64>(),
            len in 0usize..128,
            rate in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let mut genes = random_genome(len, &mut rng);
            random_reset_mutation(&mut genes, rate, &mut rng);
            prop_assert_eq!(genes.len(), len);
        }
    }
}
