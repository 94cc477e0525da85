//! haulsim — mining haul-truck utilisation over a 72-hour shift.
//!
//! Runs the fleet simulation for one operator-supplied topology (trucks,
//! stations, debug switch) and prints per-truck time shares and per-station
//! throughput.  Parameters not given as flags are asked for interactively,
//! and interactive sessions offer to run again afterwards.

mod prompt;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use hs_core::{MAX_TOTAL_TICKS, SimConfig};
use hs_output::{CsvWriter, SimOutputObserver};
use hs_sim::{NoopObserver, SimBuilder, SimReport};

use prompt::Console;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(version, about)]
struct Opt {
    /// Number of trucks (1–65535).  Prompted for when omitted.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    trucks: Option<u16>,

    /// Number of unloading stations (1–65535).  Prompted for when omitted.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    stations: Option<u16>,

    /// Run the per-step consistency checks.
    #[arg(long)]
    debug: bool,

    /// Seed for the mining-duration stream.  Drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation horizon in 5-minute ticks.
    #[arg(long, default_value_t = hs_core::DEFAULT_TOTAL_TICKS,
          value_parser = clap::value_parser!(u64).range(1..=MAX_TOTAL_TICKS))]
    ticks: u64,

    /// Write CSV output into this directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Station snapshot interval in ticks for CSV output (0 disables).
    #[arg(long, default_value_t = 12)]
    snapshot_interval: u64,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Verbosity: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write log lines to this file.
    #[arg(long)]
    log_output: Option<PathBuf>,

    /// Do not log to stderr.
    #[arg(long)]
    no_stderr: bool,
}

impl Opt {
    /// Interactive when the topology was not fully given on the command line.
    fn interactive(&self) -> bool {
        self.trucks.is_none() || self.stations.is_none()
    }

    /// Fill in whatever the flags left out by asking on the console.
    fn collect_config(&self, console: &mut Console) -> Result<SimConfig> {
        let trucks = match self.trucks {
            Some(n) => n,
            None    => console.count("trucks")?,
        };
        let stations = match self.stations {
            Some(n) => n,
            None    => console.count("stations")?,
        };
        let debug = if self.debug || !self.interactive() { self.debug } else { console.debug()? };
        Ok(self.config(trucks, stations, debug))
    }

    fn config(&self, trucks: u16, stations: u16, debug: bool) -> SimConfig {
        let mut config = SimConfig::new(trucks, stations, debug);
        config.total_ticks = self.ticks;
        config.seed = self.seed;
        config.output_interval_ticks = self.snapshot_interval;
        config
    }
}

fn set_up_logger(opt: &Opt) -> Result<(), fern::InitError> {
    let log_level = match opt.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(log_level);
    let dispatch = match &opt.log_output {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None       => dispatch,
    };
    let dispatch = if opt.no_stderr { dispatch } else { dispatch.chain(std::io::stderr()) };
    dispatch.apply()?;
    Ok(())
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run_once(config: SimConfig, output_dir: Option<&PathBuf>) -> Result<SimReport> {
    let mut sim = SimBuilder::new(config).build()?;

    let report = match output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer, &sim.config);
            let report = sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e).context("writing CSV output");
            }
            log::info!("CSV output written to {}", dir.display());
            report
        }
        None => sim.run(&mut NoopObserver)?,
    };
    Ok(report)
}

fn present(report: &SimReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    set_up_logger(&opt)?;

    let mut console = Console;
    loop {
        let config = opt.collect_config(&mut console)?;
        let started = Instant::now();
        let report = run_once(config, opt.output_dir.as_ref())?;
        log::info!("simulation took {:.3} s", started.elapsed().as_secs_f64());
        present(&report, opt.json)?;

        if !opt.interactive() || !console.again()? {
            break;
        }
    }
    Ok(())
}
