mod app;
mod cli;
mod config;
mod error;
mod render;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use feed_logging::{feed_info, feed_warn, LogDestination};
use log::LevelFilter;

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigOrigin};
use crate::error::AppError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The logger may not exist yet when the config fails to load.
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let base_dir = cli.config.parent().unwrap_or(Path::new("."));
    // The config names the log file, so parse it before the logger exists
    // and report how it was loaded afterwards.
    let (config, origin) = AppConfig::load(&cli.config)?;
    let destination = match config.log_path(base_dir) {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    feed_logging::initialize(destination, level);
    match origin {
        ConfigOrigin::File => feed_info!(
            "Loaded config from {:?} with {} verticals",
            cli.config,
            config.verticals.len()
        ),
        ConfigOrigin::Defaults => {
            feed_warn!("No config at {:?}, using defaults", cli.config)
        }
    }

    let source = app::load_source(&config, base_dir)?;
    let vertical = config.vertical(cli.vertical.as_deref())?;
    app::execute(vertical, source, &cli.command, io::stdout().lock())
}
