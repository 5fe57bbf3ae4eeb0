//! Genetic-algorithm search for a target bit string.
//!
//! A population of fixed-length binary genomes is evolved generation by
//! generation until its fittest member matches the target exactly:
//!
//! - **Fitness**: number of positions agreeing with the target
//! - **Selection**: tournament of 5, drawn with replacement
//! - **Crossover**: uniform, per-gene choice of parent
//! - **Mutation**: per-gene random reset
//! - **Elitism**: the fittest individual survives unchanged
//!
//! # Modules
//!
//! - [`ga`]: individuals, population, configuration and the driver loop
//! - [`cli`]: command-line flag parsing into a [`ga::GaConfig`]
//! - [`random`]: seeded random sources
//! - [`error`]: configuration and engine errors

pub mod cli;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, GaError};
