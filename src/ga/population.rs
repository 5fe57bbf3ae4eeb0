//! The population and its evolution step.

use super::config::GaConfig;
use super::individual::Individual;
use super::selection::tournament;
use super::target::Target;
use super::types::{FitnessFn, Gene, TargetMatch};
use crate::error::GaError;
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::Arc;

/// Tournament size used to pick each parent in [`Population::evolve`].
pub const TOURNAMENT_SIZE: usize = 5;

/// Uniform rate passed to crossover in [`Population::evolve`] unless the
/// configured rates are applied.
pub const CROSSOVER_UNIFORM_RATE: f64 = 0.5;

/// Mutation rate applied to every child in [`Population::evolve`] unless
/// the configured rates are applied.
pub const CHILD_MUTATION_RATE: f64 = 0.015;

/// A fixed-size set of individuals evolving toward one target.
///
/// The population owns the run's fitness function (a [`TargetMatch`]
/// shared with every individual) and the run's random source.
///
/// ```
/// use genematch::ga::{GaConfig, Population};
/// use genematch::random::create_rng;
///
/// let config = GaConfig::default().with_population_size(20);
/// let mut pop = Population::random(&config, create_rng(42)).unwrap();
/// let before = pop.fittest().fitness();
/// pop.evolve().unwrap();
/// assert_eq!(pop.generation(), 1);
/// assert_eq!(pop.len(), 20);
/// assert!(pop.fittest().fitness() >= before);
/// ```
#[derive(Debug)]
pub struct Population {
    individuals: Vec<Individual>,
    scorer: Arc<TargetMatch>,
    generation: usize,
    uniform_rate: f64,
    mutation_rate: f64,
    elitist: bool,
    apply_configured_rates: bool,
    rng: StdRng,
}

impl Population {
    /// Creates `config.population_size` random individuals of target length.
    ///
    /// # Errors
    /// [`GaError::Config`] if the configuration does not validate.
    pub fn random(config: &GaConfig, mut rng: StdRng) -> Result<Self, GaError> {
        config.validate()?;
        let scorer = Arc::new(TargetMatch::new(config.target.clone()));
        let fitness_fn: Arc<dyn FitnessFn> = scorer.clone();
        let size = config.target.len();
        let individuals = (0..config.population_size)
            .map(|_| Individual::random(size, Arc::clone(&fitness_fn), &mut rng))
            .collect();
        Ok(Self::assemble(individuals, scorer, config, rng))
    }

    /// Creates a population over the given genomes.
    ///
    /// The population size is `genomes.len()`; `config.population_size` is
    /// not used. Genomes are not required to match the target length, they
    /// simply score zero.
    ///
    /// # Errors
    /// [`GaError::EmptyPopulation`] if `genomes` is empty, or
    /// [`GaError::Config`] if the configuration does not validate.
    pub fn from_genomes(
        genomes: Vec<Vec<Gene>>,
        config: &GaConfig,
        rng: StdRng,
    ) -> Result<Self, GaError> {
        if genomes.is_empty() {
            return Err(GaError::EmptyPopulation);
        }
        config.validate()?;
        let scorer = Arc::new(TargetMatch::new(config.target.clone()));
        let fitness_fn: Arc<dyn FitnessFn> = scorer.clone();
        let individuals = genomes
            .into_iter()
            .map(|genes| Individual::from_genes(genes, Arc::clone(&fitness_fn)))
            .collect();
        Ok(Self::assemble(individuals, scorer, config, rng))
    }

    fn assemble(
        individuals: Vec<Individual>,
        scorer: Arc<TargetMatch>,
        config: &GaConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            individuals,
            scorer,
            generation: 0,
            uniform_rate: config.uniform_rate,
            mutation_rate: config.mutation_rate,
            elitist: config.elitist,
            apply_configured_rates: config.apply_configured_rates,
            rng,
        }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Number of individuals. Never zero.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`; a population holds at least one individual.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Completed evolution steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn target(&self) -> &Target {
        self.scorer.target()
    }

    pub fn uniform_rate(&self) -> f64 {
        self.uniform_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn is_elitist(&self) -> bool {
        self.elitist
    }

    /// Number of positions where `individual` matches this population's
    /// target; 0 when the lengths differ.
    pub fn fitness(&self, individual: &Individual) -> usize {
        self.scorer.evaluate(individual.genes())
    }

    /// The individual with the highest fitness. The first one wins ties.
    pub fn fittest(&self) -> &Individual {
        &self.individuals[self.fittest_index()]
    }

    /// Tournament selection over the current individuals, drawing `size`
    /// candidates with replacement.
    pub fn individual_by_tournament(&mut self, size: usize) -> &Individual {
        let idx = tournament(&self.individuals, size, &mut self.rng);
        &self.individuals[idx]
    }

    /// Replaces every individual with a new generation.
    ///
    /// With elitism the current fittest is copied unchanged into slot 0.
    /// Every other slot gets a child of two tournament winners, crossed
    /// over and then mutated.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if two selected parents differ in length.
    /// The population is left untouched in that case.
    pub fn evolve(&mut self) -> Result<(), GaError> {
        let size = self.individuals.len();
        let (uniform_rate, mutation_rate) = if self.apply_configured_rates {
            (self.uniform_rate, self.mutation_rate)
        } else {
            (CROSSOVER_UNIFORM_RATE, CHILD_MUTATION_RATE)
        };

        let mut next = Vec::with_capacity(size);
        if self.elitist {
            next.push(self.fittest().clone());
        }

        while next.len() < size {
            let a = tournament(&self.individuals, TOURNAMENT_SIZE, &mut self.rng);
            let b = tournament(&self.individuals, TOURNAMENT_SIZE, &mut self.rng);
            let mut child = Individual::crossover(
                &self.individuals[a],
                &self.individuals[b],
                uniform_rate,
                &mut self.rng,
            )?;
            child.mutate(mutation_rate, &mut self.rng);
            next.push(child);
        }

        self.individuals = next;
        self.generation += 1;
        Ok(())
    }

    fn fittest_index(&self) -> usize {
        let scores = self.scores();
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        best
    }

    #[cfg(feature = "parallel")]
    fn scores(&self) -> Vec<usize> {
        self.individuals.par_iter().map(Individual::fitness).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scores(&self) -> Vec<usize> {
        self.individuals.iter().map(Individual::fitness).collect()
    }
}
