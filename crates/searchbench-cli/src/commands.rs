//! Subcommand implementations.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use console::Term;
use owo_colors::OwoColorize;
use searchbench::{wait_for_line, Driver, DriverReport, TerminalPrompt};
use searchbench_config::DriverConfig;
use searchbench_core::{ConfigSpace, Registry, Strategy};
use searchbench_racetrack::{
    builtin_heuristics, builtin_problems, load_problems, Heuristic, PauseFn, RacetrackEngine,
    Racetrack,
};

use crate::cli::RunArgs;
use crate::error::CliError;

/// Merges the optional config file with the command-line values.
pub fn load_config(args: &RunArgs) -> Result<DriverConfig, CliError> {
    let base = match &args.config {
        Some(path) => DriverConfig::load(path)?,
        None => DriverConfig::new(),
    };
    let config = base.apply(args.overrides());
    config.validate()?;
    Ok(config)
}

/// Bundled problems plus every problem file, later files winning on name clashes.
pub fn problem_registry(files: &[PathBuf]) -> Result<Registry<Arc<Racetrack>>, CliError> {
    let mut problems = builtin_problems();
    for file in files {
        problems.extend(load_problems(file)?);
    }
    Ok(problems)
}

/// Resolves the configured selection into the immutable configuration space.
pub fn build_space(config: &DriverConfig) -> Result<ConfigSpace<Arc<Racetrack>, Heuristic>, CliError> {
    let problems = problem_registry(&config.problem_files)?;
    let heuristics = builtin_heuristics();
    Ok(ConfigSpace::resolve(&config.selection(), &problems, &heuristics)?)
}

pub fn run(args: RunArgs) -> Result<DriverReport, CliError> {
    let config = load_config(&args)?;
    let space = build_space(&config)?;

    searchbench_console::init();

    let engine = RacetrackEngine::new().with_pause(terminal_pause());
    let mut driver = Driver::new(
        engine,
        config.benchmark.to_benchmark_config("searchbench"),
        TerminalPrompt::new(),
    );
    Ok(driver.run(&space)?)
}

pub fn list(problem_files: &[PathBuf]) -> Result<(), CliError> {
    let problems = problem_registry(problem_files)?;

    println!("{}", "Problems".bright_cyan().bold());
    for problem in problems.iter() {
        let track = problem.value();
        println!(
            "  {:<12} start {} │ finish {} │ {} walls │ extent {}",
            problem.name().white().bold(),
            track.start,
            track.finish,
            track.walls.len(),
            track.extent()
        );
    }

    println!("\n{}", "Heuristics".bright_cyan().bold());
    for heuristic in builtin_heuristics().iter() {
        let note = if heuristic.value().is_admissible() {
            "admissible".bright_green().to_string()
        } else {
            "not admissible".yellow().to_string()
        };
        println!("  {:<12} {}", heuristic.name().white().bold(), note);
    }

    println!("\n{}", "Strategies".bright_cyan().bold());
    for strategy in Strategy::ALL {
        let note = if strategy.uses_heuristic() {
            "uses heuristic"
        } else {
            "ignores heuristic"
        };
        println!("  {:<12} {}", strategy.tag().white().bold(), note.bright_black());
    }
    Ok(())
}

/// Pause used by the engine after a drawn solution and at verbosity 4.
fn terminal_pause() -> Arc<PauseFn> {
    let term = Term::stdout();
    Arc::new(move |message: &str| -> io::Result<()> { wait_for_line(&term, message) })
}
