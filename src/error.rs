//! Error types.
//!
//! Two classes exist: [`ConfigError`] for bad user input, which is fatal
//! before any population is created, and [`GaError`] for invariant
//! violations detected while evolving.

/// Invalid configuration or command-line input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid target: target must not be empty")]
    EmptyTarget,
    #[error("invalid target: unexpected character {ch:?} at position {position}, only '0' and '1' are allowed")]
    InvalidTargetChar { ch: char, position: usize },
    #[error("population_size must be at least 1")]
    ZeroPopulation,
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("max_generations must be positive or unset")]
    ZeroMaxGenerations,
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("flag {0} requires a value")]
    MissingValue(String),
    #[error("invalid value {value:?} for flag {flag}")]
    InvalidValue { flag: String, value: String },
}

/// Failure raised by the evolutionary engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("crossover requires genomes of equal length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("population must contain at least one individual")]
    EmptyPopulation,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
