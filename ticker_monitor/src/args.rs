//! Command-line arguments for the ticker monitor.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ticker_common::extract::ExtractorKind;
use ticker_common::net::{DEFAULT_ENDPOINT, DEFAULT_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use ticker_common::tickers::Ticker;

use crate::monitor::MonitorConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Trading pair to follow.
    #[clap(long, value_enum, default_value_t = Ticker::BTCUSDT)]
    pub symbol: Ticker,

    /// Price ticker endpoint; `symbol=<SYMBOL>` is appended as a query parameter.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Pause between two cycles, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Upper bound for a single request, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Stop after this many frames instead of running until Ctrl+C.
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// How the price is read from the response body.
    #[clap(long, value_enum, default_value_t = ExtractorKind::Marker)]
    pub parser: ExtractorKind,

    /// Render the panel without ANSI colours.
    #[clap(long)]
    pub no_color: bool,

    /// Write log records to this file (logging is otherwise off unless RUST_LOG is set).
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Loop settings for the driver.
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            interval: Duration::from_millis(self.interval_ms),
            max_cycles: self.cycles,
        }
    }
}
