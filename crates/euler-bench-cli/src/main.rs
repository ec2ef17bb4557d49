//! euler-bench CLI - ranked timing tables for imperative vs functional puzzle variants.

#![deny(missing_docs)]
#![deny(clippy::panic)]
#![warn(clippy::all, clippy::pedantic)]

mod commands;
mod output;

use clap::{Parser, Subcommand};
use euler_bench_puzzles::Puzzle;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// euler-bench: imperative vs functional puzzle benchmarks
#[derive(Parser)]
#[command(name = "euler-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Sum of multiples of 3 or 5 below 1000
    Multiples,

    /// Sum of even Fibonacci terms not exceeding four million
    EvenFibonacci,

    /// Largest prime factor of 600851475143
    PrimeFactor,

    /// Largest palindrome product of two 3-digit numbers
    Palindrome,

    /// Least common multiple of 1..20
    Lcm,

    /// Every puzzle, one table each (default)
    All,
}

impl Commands {
    fn puzzles(self) -> Vec<Puzzle> {
        match self {
            Self::Multiples => vec![Puzzle::Multiples],
            Self::EvenFibonacci => vec![Puzzle::EvenFibonacci],
            Self::PrimeFactor => vec![Puzzle::PrimeFactor],
            Self::Palindrome => vec![Puzzle::Palindrome],
            Self::Lcm => vec![Puzzle::Lcm],
            Self::All => Puzzle::ALL.to_vec(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::All);

    match commands::run(&command.puzzles()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_all() {
        let cli = Cli::try_parse_from(["euler-bench"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.command.unwrap_or(Commands::All).puzzles(), Puzzle::ALL);
    }

    #[test]
    fn test_subcommands_select_one_puzzle() {
        let cases = [
            ("multiples", Puzzle::Multiples),
            ("even-fibonacci", Puzzle::EvenFibonacci),
            ("prime-factor", Puzzle::PrimeFactor),
            ("palindrome", Puzzle::Palindrome),
            ("lcm", Puzzle::Lcm),
        ];
        for (arg, puzzle) in cases {
            let cli = Cli::try_parse_from(["euler-bench", arg]).unwrap();
            assert_eq!(cli.command.map(Commands::puzzles), Some(vec![puzzle]), "{arg}");
        }
    }

    #[test]
    fn test_no_tunable_flags() {
        assert!(Cli::try_parse_from(["euler-bench", "--iterations", "10"]).is_err());
        assert!(Cli::try_parse_from(["euler-bench", "lcm", "20"]).is_err());
    }
}
