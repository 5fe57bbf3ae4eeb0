//! The goal genome of a run.

use super::types::Gene;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty target genome.
///
/// Parsed from a string made only of `'0'` and `'1'`:
///
/// ```
/// use genematch::ga::Target;
///
/// let target: Target = "110011".parse().unwrap();
/// assert_eq!(target.len(), 6);
/// assert_eq!(target.to_string(), "110011");
/// assert!("10a1".parse::<Target>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Target {
    genes: Vec<Gene>,
}

impl Target {
    /// Builds a target from genes directly.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self, ConfigError> {
        if genes.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self { genes })
    }

    /// The target genes in order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Number of genes. Always at least 1.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            genes: vec![true, true, false, false, true, true],
        }
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        let genes = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ConfigError::InvalidTargetChar { ch, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { genes })
    }
}

impl TryFrom<String> for Target {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.to_string()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}
