//! scenario-runner: headless scenario driver and load-test generator.
//!
//! Usage:
//!   scenario-runner run --file scenario.json --ticks 600 --dt 1.0
//!   scenario-runner generate --sides 4 --units-per-side 50 --output load.json

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, Level};

use airops_sim::load_test::{self, LoadTestConfig};
use airops_sim::{ConfigError, LandingHook, ScenarioFile};

#[derive(Debug, Parser)]
#[command(author, version, about = "AIROPS headless scenario runner")]
struct Cli {
    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a scenario file and print the final snapshot as JSON
    Run {
        /// Path to the scenario JSON file
        #[arg(long)]
        file: PathBuf,

        /// Number of updates to run (stops early once the scenario is complete)
        #[arg(long, default_value_t = 60)]
        ticks: u64,

        /// Host seconds per update, before time compression
        #[arg(long, default_value_t = 1.0)]
        dt: f64,

        /// Land aircraft automatically when they return to base
        #[arg(long)]
        auto_land: bool,
    },
    /// Write a random load-test scenario
    Generate {
        #[arg(long, default_value_t = 2)]
        sides: usize,

        #[arg(long, default_value_t = 10)]
        units_per_side: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Run {
            file,
            ticks,
            dt,
            auto_land,
        } => cmd_run(file, ticks, dt, auto_land),
        Command::Generate {
            sides,
            units_per_side,
            seed,
            output,
        } => cmd_generate(sides, units_per_side, seed, output),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn cmd_run(file: PathBuf, ticks: u64, dt: f64, auto_land: bool) -> Result<(), ConfigError> {
    let mut scenario = ScenarioFile::from_path(&file)?.build()?;
    if auto_land {
        scenario.add_hook(LandingHook);
    }

    info!(
        scenario = %scenario.name(),
        aircraft = scenario.aircraft_count(),
        airbases = scenario.airbase_count(),
        "running"
    );

    let mut ran = 0;
    while ran < ticks && !scenario.is_complete() {
        scenario.update(dt);
        for event in scenario.drain_events() {
            info!(
                time = event.time,
                side = %event.side_id,
                unit = %event.unit_id,
                "{}",
                event.kind.label()
            );
        }
        ran += 1;
    }

    info!(ticks = ran, elapsed = scenario.elapsed_seconds(), "done");
    println!("{}", serde_json::to_string_pretty(&scenario.snapshot())?);
    Ok(())
}

fn cmd_generate(
    sides: usize,
    units_per_side: usize,
    seed: u64,
    output: Option<PathBuf>,
) -> Result<(), ConfigError> {
    let file = load_test::generate(&LoadTestConfig {
        sides,
        units_per_side,
        seed,
        ..Default::default()
    });
    let json = file.to_json_string()?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!(
                path = %path.display(),
                aircraft = file.aircraft.len(),
                airbases = file.airbases.len(),
                "wrote load-test scenario"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
