//! Padzone simulator binary.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: n=1000, d=10, 100 executions per scenario
//! padzone-sim
//!
//! # Reproducible batch as JSON
//! padzone-sim --n 5000 --d 20 --seed 42 --format json
//! ```

use clap::{Parser, ValueEnum};
use padzone_harness::{Runner, SimulationConfig};
use padzone_sim::SimulationReport;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Multi-party one-time pad allocation simulator
#[derive(Parser, Debug)]
#[command(name = "padzone-sim")]
#[command(about = "Measure pad waste of the parallel pairs allocation protocol")]
#[command(version)]
struct Args {
    /// Total number of pads
    #[arg(long, default_value_t = 1000)]
    n: u32,

    /// Gap parameter
    #[arg(long, default_value_t = 10)]
    d: u32,

    /// Number of executions per scenario
    #[arg(long, default_value_t = 100)]
    executions: u32,

    /// Minimum message length
    #[arg(long, default_value_t = 1)]
    min_msg_len: u32,

    /// Maximum message length
    #[arg(long, default_value_t = 50)]
    max_msg_len: u32,

    /// Master seed for reproducibility (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so the report on stdout stays machine-readable.
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

    let config = SimulationConfig {
        n: args.n,
        d: args.d,
        executions: args.executions,
        min_msg_len: args.min_msg_len,
        max_msg_len: args.max_msg_len,
        seed: args.seed,
    };

    let runner = Runner::new(config)?;
    tracing::info!(master_seed = runner.master_seed(), "simulation starting");

    let report = SimulationReport::run(&runner)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => report.write_text(&mut out)?,
        Format::Json => report.write_json(&mut out)?,
    }

    tracing::info!("simulation complete");

    Ok(())
}
