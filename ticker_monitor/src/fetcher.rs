//! HTTP fetching over one persistent connection.
//!
//! `HttpFetcher` owns the single `reqwest` blocking client of the process. The
//! client keeps its TCP/TLS session alive between cycles, so only the first
//! request pays for the handshake. Dropping the fetcher releases the connection.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use ticker_common::net::USER_AGENT;
use ticker_common::{Result, TickerError};

/// TCP keep-alive probe interval on the pooled connection.
const KEEPALIVE: Duration = Duration::from_secs(30);
/// How long an idle pooled connection may sit before it is closed.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Source of raw response bodies, one per cycle.
pub trait Fetcher {
    /// Perform one request and return the body. Transport failures and
    /// non-success statuses are errors; no retry is attempted.
    fn fetch(&mut self) -> Result<String>;
}

/// Blocking GET against a fixed URL.
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Build the client once. `timeout` bounds each request end to end.
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .tcp_keepalive(KEEPALIVE)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(1)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| TickerError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }

    /// Target URL of every request.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&mut self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| TickerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| TickerError::Transport(e.to_string()))?;
        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
