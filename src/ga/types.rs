//! Core type definitions for the GA engine.
//!
//! Individuals are target-agnostic: they hold a shared [`FitnessFn`] that
//! the owning population builds from its target. [`TargetMatch`] is the
//! scorer every population uses.

use super::target::Target;

/// One binary position of a genome. `false` renders as `'0'`, `true` as `'1'`.
pub type Gene = bool;

/// Scoring strategy shared by all individuals of a run.
///
/// Higher is better. Implementations must be pure: the same genes always
/// produce the same score.
///
/// Any `Fn(&[Gene]) -> usize` closure is a fitness function:
///
/// ```
/// use genematch::ga::FitnessFn;
///
/// let ones = |genes: &[bool]| genes.iter().filter(|&&g| g).count();
/// assert_eq!(ones.evaluate(&[true, false, true]), 2);
/// ```
pub trait FitnessFn: Send + Sync {
    /// Scores a genome.
    fn evaluate(&self, genes: &[Gene]) -> usize;
}

impl<F> FitnessFn for F
where
    F: Fn(&[Gene]) -> usize + Send + Sync,
{
    fn evaluate(&self, genes: &[Gene]) -> usize {
        self(genes)
    }
}

/// Counts the positions where a genome agrees with the target.
///
/// A genome whose length differs from the target scores 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMatch {
    target: Target,
}

impl TargetMatch {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl FitnessFn for TargetMatch {
    fn evaluate(&self, genes: &[Gene]) -> usize {
        let target = self.target.genes();
        if genes.len() != target.len() {
            return 0;
        }
        genes.iter().zip(target).filter(|(g, t)| g == t).count()
    }
}
