//! genematch CLI - evolve a bit string toward a target.

use std::process::ExitCode;

use genematch::{
    cli::{parse_args, Command, USAGE},
    ga::GaRunner,
};

fn main() -> ExitCode {
    env_logger::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let result = GaRunner::run_with(&config, None, |stats| {
        println!(
            "Generation: {} Fittest: {}\n{}\n",
            stats.generation, stats.best_fitness, stats.genome
        );
    });

    match result {
        Ok(result) if result.solved => {
            println!("Solution found!");
            println!("Generations: {}", result.generations);
            println!("Genes: {}", result.best);
            ExitCode::SUCCESS
        }
        Ok(result) => {
            println!("No solution found.");
            println!("Generations: {}", result.generations);
            println!(
                "Best: {} (fitness {}/{})",
                result.best,
                result.best_fitness,
                config.target.len()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
