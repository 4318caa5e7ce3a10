//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `TickerError`, so functions can simply
//! return `Result<T>`.
use crate::error::TickerError;

/// Workspace-wide `Result` alias with `TickerError` as the default error.
pub type Result<T, E = TickerError> = std::result::Result<T, E>;
