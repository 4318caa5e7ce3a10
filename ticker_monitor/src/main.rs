//! Ticker Monitor — polls a public price ticker endpoint and keeps a small
//! terminal panel up to date with the latest price, its direction since the
//! previous sample and the round-trip latency.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_monitor --symbol btcusdt --interval-ms 500
//! ticker_monitor --symbol ethusdt --parser json --cycles 20 --log-file ticker.log
//! ```
//!
//! The loop is single threaded: fetch, parse, render, sleep. Ctrl+C signals the
//! loop through a channel; the HTTP client (and its pooled connection) is
//! released when the monitor goes out of scope.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod monitor;
mod presenter;

use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use std::path::Path;

use clap::Parser;
use crossbeam_channel::bounded;
use log::{LevelFilter, info};
use ticker_common::net::ticker_url;
use ticker_common::style::Palette;
use ticker_common::{Result, TickerError};

use crate::args::Args;
use crate::fetcher::HttpFetcher;
use crate::monitor::Monitor;
use crate::presenter::Presenter;

fn main() -> Result<(), TickerError> {
    let args = Args::parse();
    init_logger(args.log_file.as_deref())?;

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| TickerError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let url = ticker_url(&args.endpoint, args.symbol);
    let fetcher = HttpFetcher::new(url, args.timeout())?;
    info!(
        "Monitoring {} at {} every {} ms (parser: {})",
        args.symbol,
        fetcher.url(),
        args.interval_ms,
        args.parser
    );

    let presenter = Presenter::new(
        BufWriter::new(io::stdout()),
        Palette::new(!args.no_color),
        args.symbol.asset_name(),
    );
    let mut monitor = Monitor::new(fetcher, args.parser, presenter, args.monitor_config());

    let cycles = monitor.run(&shutdown_rx)?;
    monitor.presenter_mut().finish()?;
    info!(
        "Stopped after {} cycles, last price {:.2}",
        cycles,
        monitor.presenter().state().last_price
    );
    Ok(())
}

/// Logging is off by default because stdout and stderr share the terminal with
/// the panel. `--log-file` turns on `info` into that file; `RUST_LOG` overrides
/// the level either way.
fn init_logger(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .filter_level(LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off).parse_default_env();
        }
    }
    builder.init();
    Ok(())
}
