//! `aoc` - command-line runner for the bundled puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-puzzles to link the solver plugins
use aoc_puzzles as _;

use aoc_kit::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.log_level);
    tracing::debug!(?config, "resolved configuration");

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing inputs up front; those puzzles still get an error line
    let missing = missing_inputs(&executor, &work_items);
    if !missing.is_empty() && !config.quiet {
        println!(
            "Missing {} input file(s) in {}:",
            missing.len(),
            executor.inputs().dir().display()
        );
        for kind in &missing {
            println!("  - {}", kind.input_file_name());
        }
        println!();
    }

    if !config.quiet {
        println!("Running {} puzzle(s)...", work_items.len());
        println!();
    }

    let formatter = OutputFormatter::new(config.quiet);
    let runs = executor.execute();
    for run in &runs {
        formatter.print_run(run);
    }
    formatter.print_summary(&runs);

    Ok(())
}

fn missing_inputs(executor: &Executor, work_items: &[WorkItem]) -> Vec<aoc_kit::PuzzleKind> {
    work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.kind))
        .map(|w| w.kind)
        .collect()
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
