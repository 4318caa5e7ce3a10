//! Endpoint constants and URL helpers for the price ticker API.

use crate::tickers::Ticker;

/// Default price ticker endpoint; the symbol is passed as a query parameter.
pub const DEFAULT_ENDPOINT: &str = "https://api.binance.com/api/v3/ticker/price";
/// Default polling interval between cycles, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 500;
/// Default upper bound for a single request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;
/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("ticker_monitor/", env!("CARGO_PKG_VERSION"));

/// Build the full request URL for `ticker` on `endpoint`.
///
/// Trailing `?`/`&` and slashes on the endpoint are tolerated so that both
/// `.../ticker/price` and `.../ticker/price?` work.
pub fn ticker_url(endpoint: &str, ticker: Ticker) -> String {
    let base = endpoint.trim().trim_end_matches(['/', '?', '&']);
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{}{}symbol={}", base, sep, ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_matches_binance_shape() {
        assert_eq!(
            ticker_url(DEFAULT_ENDPOINT, Ticker::BTCUSDT),
            "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT"
        );
    }

    #[test]
    fn appends_to_existing_query() {
        assert_eq!(
            ticker_url("http://localhost:8080/price?venue=spot&", Ticker::ETHUSDT),
            "http://localhost:8080/price?venue=spot&symbol=ETHUSDT"
        );
        assert_eq!(
            ticker_url("http://localhost:8080/price/", Ticker::ETHUSDT),
            "http://localhost:8080/price?symbol=ETHUSDT"
        );
    }
}
