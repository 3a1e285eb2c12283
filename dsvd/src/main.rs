//! # DSV Daemon (dsvd)
//!
//! Drives the DSV data structures from a stream of JSON requests.
//!
//! ## Usage
//!
//! ```bash
//! dsvd [--config <file>] [--input <file>] [--directed] [--log-format <pretty|compact|json>]
//! ```
//!
//! Requests are read one per line from `--input` or stdin:
//!
//! ```json
//! {"structure": "stack", "operation": "push", "args": ["5"]}
//! {"structure": "graph", "operation": "add_edge", "args": ["1 2"]}
//! ```
//!
//! Each request is answered by one JSON response line on stdout. Logs go to
//! stderr; `RUST_LOG` overrides the configured level.

#![warn(missing_docs)]

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use dsv_logging::{tracing_handler, LogLevel};
use dsvd::{serve, DaemonConfig, LogFormat, Service};
use tracing::{info, level_filters::LevelFilter, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// DSV daemon CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "DSVD_CONFIG")]
    config: Option<PathBuf>,

    /// Read requests from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Make the graph directed regardless of the configuration
    #[arg(short, long)]
    directed: bool,

    /// Override the configured log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DaemonConfig::load(path)?,
        None => DaemonConfig::default(),
    };
    if args.directed {
        config.graph_directed = true;
    }
    if let Some(format) = args.log_format {
        config.log_format = format;
    }

    initialize_tracing(config.log_format, config.level());
    info!(
        array_capacity = config.array_capacity,
        stack_capacity = config.stack_capacity,
        queue_capacity = config.queue_capacity,
        directed = config.graph_directed,
        "Starting DSV daemon"
    );

    let mut service = Service::new(&config);
    service.register_log_handler(tracing_handler());

    let stdout = io::stdout().lock();
    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open request file {}", path.display()))?;
            serve(&mut service, BufReader::new(file), stdout)?
        }
        None => serve(&mut service, io::stdin().lock(), stdout)?,
    };

    info!(handled = summary.handled, failed = summary.failed, "DSV daemon finished");
    Ok(())
}

/// Initialize the tracing system for logging
fn initialize_tracing(format: LogFormat, level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(Level::from(level)).into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
}
