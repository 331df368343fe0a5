use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

mod columns;
mod commands;
mod constants;
mod domain;
mod format;
mod report;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::columns::SortState;
use crate::domain::{AllocatorRecord, Network, load_allocators};
use crate::state::{AllocatorGrid, App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// lazycap - Terminal UI for Filecoin Plus DataCap allocators
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allocators dataset (JSON array); defaults to `dataset_path` from the config
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Network whose genesis anchors block heights (mainnet, calibration)
    #[arg(short, long, global = true)]
    network: Option<Network>,

    /// Initial sort, e.g. `allowance:desc` or `name`
    #[arg(short, long, global = true)]
    sort: Option<SortState>,

    /// Settings file to use instead of the platform config location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the formatted allocators table to stdout
    Columns,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // The terminal belongs to the TUI: it only logs when a file is given.
    let fallback = match cli.command {
        Some(Commands::Columns) => LogTarget::Stderr,
        None => LogTarget::Discard,
    };
    init_tracing(cli.log_file.as_deref(), fallback)?;
    let config = AppConfig::load_or_default(cli.config.clone());

    match cli.command {
        Some(Commands::Columns) => {
            let rows = load_dataset(cli.file.as_deref(), &config)?;
            let network = cli.network.unwrap_or(config.network);
            let grid = AllocatorGrid::with_sort(rows, cli.sort);
            println!(
                "{}",
                report::render_plain(grid.rows(), grid.sort_state(), network.chain_params())
            );
            Ok(())
        }
        None => {
            let rows = load_dataset(cli.file.as_deref(), &config)?;
            let options = StartupOptions {
                network: cli.network,
                sort: cli.sort,
            };
            let mut app = App::new(rows, config, options);

            let mut terminal = tui::init()?;
            let result = app.run(&mut terminal);
            tui::restore()?;
            result
        }
    }
}

/// Where logs go when no `--log-file` is given.
enum LogTarget {
    Stderr,
    Discard,
}

fn init_tracing(log_file: Option<&Path>, fallback: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match (log_file, fallback) {
        (Some(path), _) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, LogTarget::Stderr) => builder.with_writer(std::io::stderr).init(),
        (None, LogTarget::Discard) => {}
    }
    Ok(())
}

fn load_dataset(file: Option<&Path>, config: &AppConfig) -> Result<Vec<AllocatorRecord>> {
    let path = file
        .or(config.dataset_path.as_deref())
        .ok_or_else(|| eyre!("no dataset given: pass --file or set dataset_path in the config"))?;

    load_allocators(path).wrap_err_with(|| format!("failed to load {}", path.display()))
}
