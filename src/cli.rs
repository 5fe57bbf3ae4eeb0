//! Command-line flag parsing.
//!
//! Flags may use one or two leading dashes and take their value either
//! inline (`--size=80`) or as the next argument (`--size 80`). Boolean
//! flags given bare mean `true`.

use crate::error::ConfigError;
use crate::ga::GaConfig;
use std::str::FromStr;

/// Help text printed for `--help`.
pub const USAGE: &str = "\
Usage: genematch [OPTIONS]

Evolve a population of bit strings until one matches the target.

Options:
  --size <N>              population size (default: 50)
  --uniform-rate <P>      crossover uniform rate in [0, 1] (default: 0.5)
  --mutation-rate <P>     mutation rate in [0, 1] (default: 0.015)
  --elitist[=<BOOL>]      keep the fittest individual each generation (default: true)
  --target <BITS>         target gene sequence of 1s and 0s (default: 110011)
  --seed <N>              random seed (default: current time)
  --max-generations <N>   stop after N generations (default: unbounded)
  --apply-rates           use --uniform-rate and --mutation-rate when evolving
  -h, --help              print this help

Set RUST_LOG=debug for per-generation logging.";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(GaConfig),
    Help,
}

/// Parses arguments (without the program name) into a [`Command`].
///
/// The returned configuration is validated.
///
/// ```
/// use genematch::cli::{parse_args, Command};
///
/// let cmd = parse_args(["--size=10", "--target", "0101"]).unwrap();
/// let Command::Run(config) = cmd else { panic!() };
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.target.to_string(), "0101");
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = GaConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        };
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        match name {
            "h" | "help" => return Ok(Command::Help),
            "elitist" => config.elitist = bool_value(name, inline)?,
            "apply-rates" => config.apply_configured_rates = bool_value(name, inline)?,
            "size" | "uniform-rate" | "mutation-rate" | "target" | "seed" | "max-generations" => {
                let value = match inline {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(name.to_string()))?,
                };
                match name {
                    "size" => config.population_size = parse_value(name, &value)?,
                    "uniform-rate" => config.uniform_rate = parse_value(name, &value)?,
                    "mutation-rate" => config.mutation_rate = parse_value(name, &value)?,
                    // Target errors carry the offending character, keep them as-is.
                    "target" => config.target = value.parse()?,
                    "seed" => config.seed = Some(parse_value(name, &value)?),
                    _ => config.max_generations = Some(parse_value(name, &value)?),
                }
            }
            _ => return Err(ConfigError::UnknownFlag(arg.clone())),
        }
    }

    config.validate()?;
    Ok(Command::Run(config))
}

fn bool_value(flag: &str, inline: Option<String>) -> Result<bool, ConfigError> {
    match inline {
        None => Ok(true),
        Some(value) => parse_value(flag, &value),
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(args: &[&str]) -> GaConfig {
        match parse_args(args.iter().copied()) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn test_no_args_gives_defaults() {
        assert_eq!(run_config(&[]), GaConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let config = run_config(&[
            "--size",
            "80",
            "--uniform-rate=0.6",
            "-mutation-rate",
            "0.05",
            "--elitist=false",
            "--target",
            "0001",
            "--seed=9",
            "--max-generations",
            "300",
            "--apply-rates",
        ]);
        assert_eq!(config.population_size, 80);
        assert!((config.uniform_rate - 0.6).abs() < 1e-12);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert!(!config.elitist);
        assert_eq!(config.target.to_string(), "0001");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_generations, Some(300));
        assert!(config.apply_configured_rates);
    }

    #[test]
    fn test_bare_elitist_is_true() {
        assert!(run_config(&["--elitist=false", "--elitist"]).elitist);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(["--size", "3", "-h"]), Ok(Command::Help));
        assert_eq!(parse_args(["--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_invalid_target() {
        assert_eq!(
            parse_args(["--target", "10201"]),
            Err(ConfigError::InvalidTargetChar {
                ch: '2',
                position: 2
            })
        );
        assert_eq!(parse_args(["--target="]), Err(ConfigError::EmptyTarget));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse_args(["--size"]),
            Err(ConfigError::MissingValue("size".into()))
        );
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse_args(["--size", "lots"]),
            Err(ConfigError::InvalidValue {
                flag: "size".into(),
                value: "lots".into()
            })
        );
        assert!(parse_args(["--elitist=maybe"]).is_err());
    }

    #[test]
    fn test_unknown_flag_and_positional() {
        assert_eq!(
            parse_args(["--colour"]),
            Err(ConfigError::UnknownFlag("--colour".into()))
        );
        assert_eq!(
            parse_args(["110011"]),
            Err(ConfigError::UnexpectedArgument("110011".into()))
        );
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        assert_eq!(parse_args(["--size=0"]), Err(ConfigError::ZeroPopulation));
        assert!(matches!(
            parse_args(["--uniform-rate", "1.2"]),
            Err(ConfigError::RateOutOfRange { .. })
        ));
    }
}
