//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::individual::Individual;
use rand::Rng;

/// Tournament selection: draw `k` individuals uniformly **with
/// replacement** and return the index of the fittest.
///
/// Fitness is maximised. A later draw replaces the current winner only when
/// strictly fitter, so the earliest draw wins ties. `k = 0` is treated as 1,
/// which degenerates to uniform random selection.
///
/// # Complexity
/// O(k) fitness evaluations per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    let mut best_fitness = population[best_idx].fitness();
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let fitness = population[idx].fitness();
        if fitness > best_fitness {
            best_idx = idx;
            best_fitness = fitness;
        }
    }
    best_idx
}
