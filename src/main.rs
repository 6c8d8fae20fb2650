//! trendsig CLI
//!
//! Loads a CSV of price bars, runs the crossover engine, and prints the
//! signal list as JSON followed by the alert feed lines.

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use trendsig::config::{ConfidenceMode, CrossoverPolicy, EngineConfig};
use trendsig::ingest::csv::read_records_from_path;
use trendsig::logging;
use trendsig::series::{normalize, SeriesError};
use trendsig::signals::{recent_alerts, SignalEngine};
use trendsig::store::{DatasetSnapshot, DatasetStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Moving-average crossover signal engine")]
struct Cli {
    /// CSV file with header: symbol,timestamp,open,high,low,close,volume
    file: std::path::PathBuf,

    /// Short SMA window size (falls back to SHORT_WINDOW, then 5)
    #[arg(long)]
    short: Option<usize>,

    /// Long SMA window size (falls back to LONG_WINDOW, then 10)
    #[arg(long)]
    long: Option<usize>,

    /// Emit only on crossings (default) or at every qualifying index
    #[arg(long, value_enum, default_value = "crossing-edge")]
    policy: PolicyArg,

    /// Use a constant confidence instead of the divergence ratio
    #[arg(long)]
    fixed_confidence: Option<f64>,

    /// How many alert lines to print
    #[arg(long, default_value_t = 5)]
    alerts: usize,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    CrossingEdge,
    Snapshot,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if let Some(short) = cli.short {
        config.short_window = short;
    }
    if let Some(long) = cli.long {
        config.long_window = long;
    }
    config.policy = match cli.policy {
        PolicyArg::CrossingEdge => CrossoverPolicy::CrossingEdge,
        PolicyArg::Snapshot => CrossoverPolicy::Snapshot,
    };
    if let Some(value) = cli.fixed_confidence {
        config.confidence = ConfidenceMode::Fixed { value };
    }

    let records = read_records_from_path(&cli.file)?;
    // No data yet is an expected condition: zero signals, not a failure.
    let bars = match normalize(&records) {
        Ok(bars) => bars,
        Err(SeriesError::Empty) => Vec::new(),
        Err(err) => return Err(err.into()),
    };
    let signals = SignalEngine::run(&bars, &config);
    info!(
        bars = bars.len(),
        signals = signals.len(),
        "processed {}",
        cli.file.display()
    );

    let store = DatasetStore::new();
    let dataset_id = cli.file.display().to_string();
    let snapshot = store.publish(dataset_id, DatasetSnapshot { bars, signals });

    println!("{}", serde_json::to_string_pretty(&snapshot.signals)?);
    for line in recent_alerts(&snapshot.signals, cli.alerts) {
        println!("{line}");
    }

    Ok(())
}
