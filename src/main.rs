//! Interactive explorer for US bikeshare trip data.
//!
//! Prompts for a city, month, and day, loads the matching trip records,
//! prints four statistics reports, offers a paginated raw-row view, and
//! loops until the user declines a restart.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use bikeshare_explorer::{browse, loader, prompt, stats};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr for warnings + JSON rolling log file. Reports
    // and prompts themselves go to stdout, not the log layers.
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));
    std::fs::create_dir_all(log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run(&cli.data_dir, &mut input, &mut output)
}

/// One full session: filter selection, load, reports, raw-data browsing,
/// repeated until the restart prompt gets anything other than "yes".
fn run(data_dir: &Path, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    loop {
        let filters = prompt::select_filters(input, output)?;
        info!(?filters, "Session filters selected");

        let dataset = loader::load_data(data_dir, &filters)?;
        info!(rows = dataset.len(), "Dataset ready");

        stats::run_all(&dataset);
        browse::browse(input, output, &dataset)?;

        // Unvalidated by design: anything other than "yes" (or end of
        // input) ends the program.
        let restart = prompt::ask(input, output, "\nWould you like to restart? Enter yes or no.\n")
            .unwrap_or_default();
        if restart != "yes" {
            return Ok(());
        }
    }
}
