//! The fetch, parse, render, sleep loop.
//!
//! One cycle times fetch plus extraction with a monotonic clock, hands the
//! quote to the presenter and then waits for the configured interval. The
//! wait is a `select!` on the shutdown channel, so Ctrl+C (or a test) stops the
//! loop without waiting out the interval. There is no retry and no drift
//! correction: the interval is added to whatever the cycle took.
use std::io::Write;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, select};
use log::{debug, info, warn};
use ticker_common::{PriceExtractor, Quote, Result};

use crate::fetcher::Fetcher;
use crate::presenter::{Frame, Presenter};

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Pause after each frame.
    pub interval: Duration,
    /// Stop after this many frames; `None` runs until shutdown.
    pub max_cycles: Option<u64>,
}

/// Ties a fetcher, an extractor and a presenter together.
pub struct Monitor<F, E, W: Write> {
    fetcher: F,
    extractor: E,
    presenter: Presenter<W>,
    config: MonitorConfig,
}

impl<F: Fetcher, E: PriceExtractor, W: Write> Monitor<F, E, W> {
    /// Monitor drawing with `presenter`; nothing is fetched until a cycle runs.
    pub fn new(fetcher: F, extractor: E, presenter: Presenter<W>, config: MonitorConfig) -> Self {
        Self {
            fetcher,
            extractor,
            presenter,
            config,
        }
    }

    /// The presenter and, through it, the display state.
    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    /// Mutable access to the presenter, used to finish the terminal on exit.
    pub fn presenter_mut(&mut self) -> &mut Presenter<W> {
        &mut self.presenter
    }

    /// Fetch, extract and draw once. Only terminal write errors are returned;
    /// fetch and parse failures become an error frame.
    pub fn run_cycle(&mut self) -> Result<Frame> {
        let start = Instant::now();
        let quote = self.next_quote();
        let latency = start.elapsed();

        let frame = self.presenter.present(quote, latency)?;
        debug!(
            "Frame: price={:.2} trend={} latency={}ms",
            frame.quote.as_f64(),
            frame.trend,
            frame.latency_ms()
        );
        Ok(frame)
    }

    /// Run cycles until the cycle limit is reached or `shutdown` fires.
    /// Returns the number of frames drawn.
    pub fn run(&mut self, shutdown: &Receiver<()>) -> Result<u64> {
        let mut cycles = 0u64;
        loop {
            self.run_cycle()?;
            cycles += 1;

            if self.config.max_cycles.is_some_and(|max| cycles >= max) {
                info!("Cycle limit of {} reached", cycles);
                break;
            }

            select! {
                recv(shutdown) -> _ => {
                    info!("Shutdown requested after {} cycles", cycles);
                    break;
                },
                default(self.config.interval) => {},
            }
        }
        Ok(cycles)
    }

    fn next_quote(&mut self) -> Quote {
        let extractor = &self.extractor;
        match self.fetcher.fetch().and_then(|body| extractor.extract(&body)) {
            Ok(price) => Quote::Price(price),
            Err(e) if e.is_payload_error() => {
                warn!("Unusable payload: {}", e);
                Quote::Unavailable
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                Quote::Unavailable
            }
        }
    }
}
