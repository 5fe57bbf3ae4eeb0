//! Binary-genome genetic algorithm.
//!
//! Evolves fixed-length bit strings toward a target by tournament
//! selection, uniform crossover, random-reset mutation and optional
//! single-individual elitism.
//!
//! # Key Types
//!
//! - [`Individual`]: a genome plus the run's shared [`FitnessFn`]
//! - [`Population`]: the individuals of one generation and the evolution step
//! - [`GaConfig`]: run parameters
//! - [`GaRunner`]: evolves until the target is matched
//!
//! # Submodules
//!
//! - [`operators`]: slice-level genome creation, crossover and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod individual;
pub mod operators;
mod population;
mod runner;
mod selection;
mod target;
mod types;

pub use config::GaConfig;
pub use individual::Individual;
pub use population::{Population, CHILD_MUTATION_RATE, CROSSOVER_UNIFORM_RATE, TOURNAMENT_SIZE};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::tournament;
pub use target::Target;
pub use types::{FitnessFn, Gene, TargetMatch};
