mod csv_sink;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use repforge_domain::{Intensity, Load, SessionPlan, SetSink, Weight};

use crate::csv_sink::CsvSink;

/// Set prescription for one training session based on Prilepin's table.
#[derive(Parser, Debug)]
#[command(name = "repforge")]
#[command(about = "Prescribe warm-up, work and back-off sets for a target load and peak intensity")]
#[command(version)]
struct Args {
    /// Target cumulative INOL load for the session (e.g. 1.5).
    #[arg(value_name = "LOAD")]
    load: f32,

    /// Peak intensity as a percentage of the one-rep max.
    #[arg(value_name = "INTENSITY")]
    intensity: u8,

    /// One-rep max in kilograms.
    #[arg(value_name = "ONE_REP_MAX", default_value = "100")]
    one_rep_max: f32,

    /// Write the prescribed sets as CSV rows to the given file.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let target_load = Load::new(args.load).context("invalid target load")?;
    let peak = Intensity::new(args.intensity).context("invalid peak intensity")?;
    let one_rep_max = Weight::new(args.one_rep_max).context("invalid one-rep max")?;

    let plan = SessionPlan::generate(peak, target_load, one_rep_max)?;
    debug!("prescribed {} sets", plan.num_sets());

    report::print(&plan, peak, target_load, one_rep_max);

    if let Some(path) = args.csv.as_deref() {
        let mut sink = CsvSink::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        for set in plan.sets() {
            sink.write(set)?;
        }
        sink.flush()?;
        println!("Wrote {} sets to {}", plan.num_sets(), path.display());
    }

    Ok(())
}
