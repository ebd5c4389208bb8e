/*!
 * Round-Robin Simulator - Main Entry Point
 *
 * Loads a process file, drives the scheduler to completion and prints the
 * performance report.
 */

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use rr_sim::monitoring::simulation_span;
use rr_sim::{init_tracing, load_file, Scheduler, SimConfig, SimError};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Process file with one `id,arrival,burst` record per line.
    file: PathBuf,

    /// Round-robin time quantum, in ticks.
    quantum: u32,

    /// Context-switch overhead, in ticks.
    context_switch: u32,

    /// Print the scheduler state after every step.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,

    /// Emit the final metrics as JSON instead of the text report.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
}

fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    init_tracing();
    run(&opts)?;
    Ok(())
}

fn run(opts: &Opts) -> Result<(), SimError> {
    let config = SimConfig::new(opts.quantum, opts.context_switch)?;
    let descriptors = load_file(&opts.file)?;

    let span = simulation_span(
        &opts.file.display().to_string(),
        config.time_quantum(),
        config.context_switch_time(),
    );
    let _entered = span.enter();

    let mut scheduler = Scheduler::new(descriptors, config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut steps = 0usize;
    while !scheduler.is_completed() {
        scheduler.step();
        steps += 1;
        if opts.verbose {
            // Broken pipes are not worth failing a finished simulation over
            let _ = writeln!(out, "{}", scheduler.snapshot());
        }
    }
    info!(steps, "Simulation loop finished");

    let Some(metrics) = scheduler.metrics() else {
        let _ = writeln!(out, "{}", rr_sim::report::NOT_COMPLETED);
        return Ok(());
    };

    if opts.json {
        let json = serde_json::to_string_pretty(&metrics)?;
        let _ = writeln!(out, "{json}");
    } else {
        let _ = write!(out, "{metrics}");
    }
    Ok(())
}
