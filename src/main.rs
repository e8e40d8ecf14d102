//! Command-line runner for jump scenarios.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lunge::{init_logging, Scenario};

/// Runs a jump-to-target scenario and prints the outcome as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file to run
    #[arg(short, long)]
    scenario: PathBuf,
    /// Ticks to simulate, overriding the scenario file
    #[arg(short, long)]
    ticks: Option<u32>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[expect(
    clippy::print_stdout,
    reason = "The outcome is the program's output."
)]
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let ticks = scenario.tick_budget(args.ticks);
    let outcome = scenario.run(ticks).context("running scenario")?;
    match outcome.leap_tick {
        Some(tick) => info!("leapt on tick {tick}"),
        None => info!("no leap within {ticks} ticks"),
    }

    let report = serde_json::to_string_pretty(&outcome).context("serialising outcome")?;
    println!("{report}");
    Ok(())
}
