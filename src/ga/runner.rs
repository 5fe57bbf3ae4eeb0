//! Driver loop.
//!
//! [`GaRunner`] builds a random population from a [`GaConfig`] and evolves
//! it until the fittest individual matches the target, reporting every
//! unsolved generation to an observer.

use super::config::GaConfig;
use super::individual::Individual;
use super::population::Population;
use crate::error::GaError;
use crate::random::{clock_seed, create_rng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Snapshot of one generation, handed to the observer before evolving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation counter at the time of the snapshot.
    pub generation: usize,

    /// Fitness of the fittest individual.
    pub best_fitness: usize,

    /// Length of the target, i.e. the fitness of a perfect match.
    pub target_len: usize,

    /// Rendering of the fittest individual.
    pub genome: String,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest individual of the last generation examined.
    pub best: Individual,

    /// Same as `best.fitness()`.
    pub best_fitness: usize,

    /// Number of `evolve` calls performed.
    pub generations: usize,

    /// Whether `best` matches the target exactly.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of every generation examined, starting with the
    /// initial population.
    pub fitness_history: Vec<usize>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use genematch::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.solved);
/// assert_eq!(result.best.render(), "110011");
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs until solved (or until `config.max_generations`).
    pub fn run(config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with(config, None, |_| {})
    }

    /// Runs with an optional cancellation flag and a per-generation observer.
    ///
    /// The observer sees every generation that is not yet solved, right
    /// before it is evolved. If `cancel` is set, the loop stops before the
    /// next `evolve` and returns the best individual so far.
    pub fn run_with<F>(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> Result<GaResult, GaError>
    where
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(clock_seed);
        log::debug!(
            "starting run: seed={seed}, population_size={}, target={}",
            config.population_size,
            config.target
        );

        let mut population = Population::random(config, create_rng(seed))?;
        let target_len = population.target().len();
        let mut fitness_history = Vec::new();
        let mut cancelled = false;

        loop {
            let best = population.fittest();
            let best_fitness = best.fitness();
            fitness_history.push(best_fitness);

            if best_fitness >= target_len {
                log::info!(
                    "solution found after {} generations: {best}",
                    population.generation()
                );
                break;
            }

            let stats = GenerationStats {
                generation: population.generation(),
                best_fitness,
                target_len,
                genome: best.render(),
            };
            log::debug!(
                "generation {}: fittest {}/{} {}",
                stats.generation,
                stats.best_fitness,
                stats.target_len,
                stats.genome
            );
            on_generation(&stats);

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::warn!("run cancelled at generation {}", population.generation());
                    cancelled = true;
                    break;
                }
            }

            if let Some(max) = config.max_generations {
                if population.generation() >= max {
                    log::warn!("no solution within {max} generations");
                    break;
                }
            }

            population.evolve()?;
        }

        let best = population.fittest().clone();
        let best_fitness = best.fitness();
        Ok(GaResult {
            solved: best_fitness >= target_len,
            best_fitness,
            best,
            generations: population.generation(),
            cancelled,
            fitness_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_is_solved() {
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&config).unwrap();

        assert!(result.solved);
        assert!(!result.cancelled);
        assert_eq!(result.best_fitness, 6);
        assert_eq!(result.best.render(), "110011");
        assert_eq!(result.fitness_history.len(), result.generations + 1);
    }

    #[test]
    fn test_observer_sees_each_unsolved_generation() {
        let config = GaConfig::default()
            .with_target("1011001110001011".parse().unwrap())
            .with_seed(7);
        let mut seen = Vec::new();
        let result = GaRunner::run_with(&config, None, |stats| seen.push(stats.clone())).unwrap();

        assert!(result.solved);
        assert_eq!(seen.len(), result.generations);
        for (g, stats) in seen.iter().enumerate() {
            assert_eq!(stats.generation, g);
            assert_eq!(stats.target_len, 16);
            assert!(stats.best_fitness < 16);
            assert_eq!(stats.genome.len(), 16);
        }
    }

    #[test]
    fn test_elitist_history_is_monotonic() {
        let config = GaConfig::default()
            .with_target("11110000111100001111".parse().unwrap())
            .with_seed(3);
        let result = GaRunner::run(&config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "fitness regressed with elitism: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_max_generations_stops_unsolvable_run() {
        // Elitism with a single individual freezes the population.
        let config = GaConfig::default()
            .with_target("1".repeat(64).parse().unwrap())
            .with_population_size(1)
            .with_max_generations(20)
            .with_seed(5);
        let result = GaRunner::run(&config).unwrap();

        assert!(!result.solved);
        assert!(!result.cancelled);
        assert_eq!(result.generations, 20);
        assert_eq!(result.fitness_history.len(), 21);
    }

    #[test]
    fn test_cancellation() {
        let config = GaConfig::default()
            .with_target("1".repeat(64).parse().unwrap())
            .with_population_size(1)
            .with_seed(5);
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let result = GaRunner::run_with(&config, Some(cancel), |stats| {
            if stats.generation == 3 {
                flag.store(true, Ordering::Relaxed);
            }
        })
        .unwrap();

        assert!(result.cancelled);
        assert!(!result.solved);
        assert_eq!(result.generations, 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!(matches!(GaRunner::run(&config), Err(GaError::Config(_))));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_target("0110100110010110".parse().unwrap())
            .with_seed(11);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        assert_eq!(a.generations, b.generations);
        assert_eq!(a.fitness_history, b.fitness_history);
    }
}
