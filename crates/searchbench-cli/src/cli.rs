//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use searchbench_config::Overrides;

#[derive(Debug, Parser)]
#[command(
    name = "searchbench",
    version,
    about = "Runs every strategy/heuristic/problem combination through a search engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run all combinations of the selected problems, heuristics and strategies
    Run(RunArgs),

    /// List the available problems, heuristics and strategies
    List {
        /// Extra TOML problem file to register
        #[arg(long = "problem-file", value_name = "FILE")]
        problem_files: Vec<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Configuration file (.toml, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Problem identifier; repeat or separate with commas
    #[arg(short = 'p', long = "problem", value_name = "ID", value_delimiter = ',')]
    pub problems: Vec<String>,

    /// Heuristic identifier; repeat or separate with commas
    #[arg(short = 'H', long = "heuristic", value_name = "ID", value_delimiter = ',')]
    pub heuristics: Vec<String>,

    /// Strategy tag (bf, df, uc, gbf, a*); repeat or separate with commas
    #[arg(short = 's', long = "strategy", value_name = "TAG", value_delimiter = ',')]
    pub strategies: Vec<String>,

    /// Engine verbosity for demonstration runs
    #[arg(short, long, value_name = "0-4", value_parser = clap::value_parser!(u8).range(0..=4))]
    pub verbosity: Option<u8>,

    /// Draw the track before and after each demonstration run
    #[arg(long)]
    pub draw: bool,

    /// Follow each demonstration with a timed run and pause
    #[arg(long)]
    pub time_tests: bool,

    /// Unmeasured iterations before each timed run
    #[arg(long = "warmup", value_name = "N")]
    pub warmup_count: Option<usize>,

    /// Measured iterations per timed run
    #[arg(long = "runs", value_name = "N")]
    pub run_count: Option<usize>,

    /// Extra TOML problem file to register
    #[arg(long = "problem-file", value_name = "FILE")]
    pub problem_files: Vec<PathBuf>,
}

impl RunArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            problems: self.problems.clone(),
            heuristics: self.heuristics.clone(),
            strategies: self.strategies.clone(),
            problem_files: self.problem_files.clone(),
            verbosity: self.verbosity,
            draw: self.draw,
            time_tests: self.time_tests,
            warmup_count: self.warmup_count,
            run_count: self.run_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> RunArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Run(args) => args,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_and_comma_separated_lists() {
        let args = run_args(&[
            "searchbench", "run", "-p", "rect20a,rect20b", "-p", "wall8a", "-H", "h0", "-s",
            "gbf", "--strategy", "a*",
        ]);

        assert_eq!(args.problems, vec!["rect20a", "rect20b", "wall8a"]);
        assert_eq!(args.heuristics, vec!["h0"]);
        assert_eq!(args.strategies, vec!["gbf", "a*"]);
        assert_eq!(args.verbosity, None);
        assert!(!args.draw && !args.time_tests);
    }

    #[test]
    fn test_overrides_carry_every_option() {
        let args = run_args(&[
            "searchbench", "run", "-v", "3", "--draw", "--time-tests", "--warmup", "0", "--runs",
            "5", "--problem-file", "extra.toml",
        ]);

        let overrides = args.overrides();
        assert_eq!(overrides.verbosity, Some(3));
        assert!(overrides.draw);
        assert!(overrides.time_tests);
        assert_eq!(overrides.warmup_count, Some(0));
        assert_eq!(overrides.run_count, Some(5));
        assert_eq!(overrides.problem_files, vec![PathBuf::from("extra.toml")]);
        assert!(overrides.problems.is_empty());
    }

    #[test]
    fn test_verbosity_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["searchbench", "run", "-v", "5"]).is_err());
    }

    #[test]
    fn test_list_subcommand() {
        let cli = Cli::try_parse_from(["searchbench", "list", "--problem-file", "a.toml"]).unwrap();
        match cli.command {
            Command::List { problem_files } => {
                assert_eq!(problem_files, vec![PathBuf::from("a.toml")])
            }
            other => panic!("expected list, got {other:?}"),
        }
    }
}
