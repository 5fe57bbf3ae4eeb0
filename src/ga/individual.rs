//! A single candidate solution.

use super::operators::{random_genome, random_reset_mutation, uniform_crossover};
use super::types::{FitnessFn, Gene};
use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A fixed-length binary genome bound to the run's fitness function.
///
/// The fitness function is shared, not owned: every individual of a
/// population points at the same scorer, so an individual can report its
/// own fitness without knowing the target.
///
/// ```
/// use std::sync::Arc;
/// use genematch::ga::{FitnessFn, Individual, TargetMatch};
/// use genematch::random::create_rng;
///
/// let scorer: Arc<dyn FitnessFn> = Arc::new(TargetMatch::new("1010".parse().unwrap()));
/// let mut rng = create_rng(42);
/// let ind = Individual::random(4, scorer, &mut rng);
/// assert_eq!(ind.genes().len(), 4);
/// assert!(ind.fitness() <= 4);
/// ```
#[derive(Clone)]
pub struct Individual {
    genes: Vec<Gene>,
    fitness_fn: Arc<dyn FitnessFn>,
}

impl Individual {
    /// Creates an individual with `size` uniformly random genes.
    pub fn random<R: Rng>(size: usize, fitness_fn: Arc<dyn FitnessFn>, rng: &mut R) -> Self {
        Self {
            genes: random_genome(size, rng),
            fitness_fn,
        }
    }

    /// Wraps an existing genome.
    pub fn from_genes(genes: Vec<Gene>, fitness_fn: Arc<dyn FitnessFn>) -> Self {
        Self { genes, fitness_fn }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// The shared fitness function this individual reports against.
    pub fn fitness_fn(&self) -> &Arc<dyn FitnessFn> {
        &self.fitness_fn
    }

    /// Scores this individual with its fitness function.
    pub fn fitness(&self) -> usize {
        self.fitness_fn.evaluate(&self.genes)
    }

    /// Redraws each gene with probability `mutation_rate`.
    ///
    /// A redrawn gene may keep its value.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        random_reset_mutation(&mut self.genes, mutation_rate, rng);
    }

    /// Produces a child by uniform crossover of `a` and `b`.
    ///
    /// The child inherits `a`'s fitness function.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if the parents differ in length.
    pub fn crossover<R: Rng>(
        a: &Individual,
        b: &Individual,
        uniform_rate: f64,
        rng: &mut R,
    ) -> Result<Individual, GaError> {
        let genes = uniform_crossover(&a.genes, &b.genes, uniform_rate, rng)?;
        Ok(Individual {
            genes,
            fitness_fn: Arc::clone(&a.fitness_fn),
        })
    }

    /// The genome as a `'0'`/`'1'` string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Individual")
            .field("genes", &self.render())
            .field("fitness", &self.fitness())
            .finish()
    }
}
