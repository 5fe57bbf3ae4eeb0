//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run: population shape, operator
//! rates, the target and the stopping/seeding knobs used by the runner.

use super::target::Target;
use crate::error::ConfigError;

/// Configuration for a genematch run.
///
/// # Defaults
///
/// ```
/// use genematch::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert!(config.elitist);
/// assert_eq!(config.target.to_string(), "110011");
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genematch::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_target("10101010".parse().unwrap())
///     .with_elitist(false)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals; constant for the whole run.
    pub population_size: usize,

    /// Probability that a crossover child takes a gene from its first parent.
    ///
    /// Only read by `evolve` when [`apply_configured_rates`](Self::apply_configured_rates)
    /// is set; otherwise the fixed rate
    /// [`CROSSOVER_UNIFORM_RATE`](super::CROSSOVER_UNIFORM_RATE) applies.
    pub uniform_rate: f64,

    /// Per-gene redraw probability.
    ///
    /// Only read by `evolve` when [`apply_configured_rates`](Self::apply_configured_rates)
    /// is set; otherwise [`CHILD_MUTATION_RATE`](super::CHILD_MUTATION_RATE) applies.
    pub mutation_rate: f64,

    /// Carry the fittest individual unchanged into the next generation.
    pub elitist: bool,

    /// The genome to evolve toward.
    pub target: Target,

    /// Random seed for reproducibility. `None` seeds from the clock.
    pub seed: Option<u64>,

    /// Optional cap on generations. `None` runs until solved.
    pub max_generations: Option<usize>,

    /// Use `uniform_rate` and `mutation_rate` inside `evolve` instead of
    /// the fixed operator rates.
    pub apply_configured_rates: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            uniform_rate: 0.5,
            mutation_rate: 0.015,
            elitist: true,
            target: Target::default(),
            seed: None,
            max_generations: None,
            apply_configured_rates: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover uniform rate.
    pub fn with_uniform_rate(mut self, rate: f64) -> Self {
        self.uniform_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitist(mut self, elitist: bool) -> Self {
        self.elitist = elitist;
        self
    }

    /// Sets the target genome.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Makes `evolve` read the configured rates.
    pub fn with_configured_rates(mut self, apply: bool) -> Self {
        self.apply_configured_rates = apply;
        self
    }

    /// Validates the configuration.
    ///
    /// The target is valid by construction; everything else is checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        check_rate("uniform_rate", self.uniform_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.max_generations == Some(0) {
            return Err(ConfigError::ZeroMaxGenerations);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
