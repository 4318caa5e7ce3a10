//! Error types shared across the workspace.
//!
//! The panel only ever shows "quote" or "no quote", but `TickerError` keeps the
//! reasons apart so they can be logged: transport failures, bad HTTP statuses
//! and payloads the extractor could not read.
use std::io;

use thiserror::Error;

/// Unified error type for the ticker monitor.
#[derive(Error, Debug)]
pub enum TickerError {
    /// I/O error originating from the terminal, log file or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// The HTTP request could not be completed (DNS, connect, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The response body does not contain the price field.
    #[error("Price field not found in response")]
    MarkerNotFound,

    /// The price field is present but its value is not a finite number.
    #[error("Invalid price value: {0:?}")]
    InvalidNumber(String),

    /// Failure while decoding JSON via serde_json.
    #[error("JSON deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl TickerError {
    /// `true` for failures caused by the payload rather than the network.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            TickerError::MarkerNotFound | TickerError::InvalidNumber(_) | TickerError::SerdeJson(_)
        )
    }
}
