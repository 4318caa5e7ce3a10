//!
//! Common types and utilities shared by the ticker monitor.
//!
//! This crate aggregates:
//! - `error` — unified error type `TickerError` used across the workspace.
//! - `result` — handy `Result<T, TickerError>` alias.
//! - `tickers` — supported trading pairs and their display names.
//! - `net` — endpoint constants and URL helpers.
//! - `quote` — the per-cycle `Quote` value.
//! - `extract` — price extraction from raw response bodies.
//! - `style` — style table used by the terminal panel.
#![warn(missing_docs)]
pub mod error;
pub mod extract;
pub mod net;
pub mod quote;
pub mod result;
pub mod style;
pub mod tickers;

pub use error::TickerError;
pub use extract::{extract_price, PriceExtractor};
pub use quote::Quote;
pub use result::Result;
