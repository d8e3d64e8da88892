//! sample-plugin - Custom metrics plugin for the vps-screener agent
//!
//! The agent runs this binary with `VPS_PROJECT_NAME` exported and reads one
//! JSON object from its stdout. Diagnostics go to stderr only.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{debug, error, info, warn};

mod cli;
mod config;
mod error;
mod output;
mod record;

use cli::Args;
use config::{Config, LoggingConfig};
use record::ResultRecord;

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = Config::load(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(args.debug, &config.logging);

    info!("Starting sample-plugin v{}", env!("CARGO_PKG_VERSION"));

    match (&args.config, &loaded) {
        (_, Err(e)) => warn!("Failed to load configuration, using defaults: {}", e),
        (Some(path), Ok(_)) => debug!("Loaded CLI config from {:?}", path),
        (None, Ok(_)) => {}
    }

    if let Err(e) = emit_record() {
        error!("{:#}", e);
        std::process::exit(1);
    }

    info!("sample-plugin finished");
    Ok(())
}

/// Build one result record and write it to stdout
fn emit_record() -> Result<()> {
    let record = ResultRecord::generate(config::project_name(), &mut rand::thread_rng());

    debug!(
        metric = record.custom_metric_a,
        project = %record.processed_for_project,
        "Built result record"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_line(&mut handle, &record).context("Failed to write result record")?;

    Ok(())
}

/// Initialize the logging/tracing subsystem
fn init_logging(debug: bool, logging: &LoggingConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the record, so every layer writes to stderr
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .init();
    }
}
