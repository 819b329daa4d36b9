//! CLI entry point for the bikeshare explorer.
//!
//! Without `--city` it runs the interactive prompt loop; with `--city` it
//! produces a single report and exits.

use anyhow::{Context, Result};
use bikeshare::city::CityTable;
use bikeshare::filter::FilterSpec;
use bikeshare::output::{append_summary, render_json, render_text};
use bikeshare::prompt::{ask_filters, ask_restart};
use bikeshare::report::explore;
use bikeshare::validate::{parse_city, parse_day, parse_month};
use clap::Parser;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data by month and day of week", long_about = None)]
struct Cli {
    /// Directory holding the city CSV files
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// JSON file mapping city names to CSV file names
    #[arg(long, value_name = "FILE")]
    cities: Option<PathBuf>,

    /// Run once for this city instead of prompting
    #[arg(long)]
    city: Option<String>,

    /// Month to filter by (all, january, ..., june)
    #[arg(long, default_value = "all", requires = "city")]
    month: String,

    /// Day of week to filter by (all, monday, ..., sunday)
    #[arg(long, default_value = "all", requires = "city")]
    day: String,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// CSV file to append a summary row to after each run
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = init_logging();

    let cli = Cli::parse();

    let cities = match &cli.cities {
        Some(path) => CityTable::load(&cli.data_dir, path)
            .with_context(|| format!("loading city table {}", path.display()))?,
        None => CityTable::new(&cli.data_dir),
    };

    match &cli.city {
        Some(city) => {
            let filter = FilterSpec {
                city: parse_city(city)?,
                month: parse_month(&cli.month)?,
                day: parse_day(&cli.day)?,
            };
            let rendered = run_once(&cities, filter, &cli)?;
            print!("{rendered}");
        }
        None => interactive(&cities, &cli)?,
    }

    Ok(())
}

/// Directives from `var`, or `default` when it is unset or invalid.
fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Warnings and up to stderr, so prompts stay readable; everything from
/// `debug` into a daily JSON log under `LOG_FILE_PATH`.
///
/// The returned guard flushes the log file when dropped.
fn init_logging() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare.log".to_string());
    let log_path = Path::new(&log_file_path);
    let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare.log"));

    let (log_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, log_file_name));

    let console = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let json_log = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(log_writer)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(console)
        .with(json_log)
        .init();

    guard
}

/// Builds, renders and optionally exports one report.
#[tracing::instrument(skip_all, fields(filter = %filter))]
fn run_once(cities: &CityTable, filter: FilterSpec, cli: &Cli) -> Result<String> {
    let report = explore(cities, filter)?;

    if let Some(path) = &cli.export {
        append_summary(path, &report)
            .with_context(|| format!("exporting summary to {}", path.display()))?;
        info!(path = %path.display(), "Summary exported");
    }

    if cli.json {
        render_json(&report)
    } else {
        Ok(render_text(&report))
    }
}

/// Prompts for filters, prints the report and offers a restart until the
/// user declines. A failed run is reported and the restart still offered.
fn interactive(cities: &CityTable, cli: &Cli) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    loop {
        let Some(filter) = ask_filters(&mut input, &mut out)? else {
            break;
        };

        match run_once(cities, filter, cli) {
            Ok(rendered) => write!(out, "{rendered}")?,
            Err(e) => {
                error!(error = %e, %filter, "Run failed");
                writeln!(out, "\nCould not explore {}: {e:#}", filter.city)?;
            }
        }

        if !ask_restart(&mut input, &mut out)? {
            break;
        }
    }

    info!("Exiting");
    Ok(())
}
