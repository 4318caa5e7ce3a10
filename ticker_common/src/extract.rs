//! Price extraction from raw ticker responses.
//!
//! The default [`MarkerExtractor`] is a plain substring scan: it finds the first
//! `"price":"` and reads the numeral up to the closing quote. It knows nothing
//! about JSON structure, escapes or nesting. [`JsonExtractor`] is the structured
//! alternative; both sit behind [`PriceExtractor`] so the rest of the pipeline
//! never sees which one is in use.
//!
//! A numeral that does not parse is reported as [`TickerError::InvalidNumber`]
//! and, like a missing marker, becomes [`Quote::Unavailable`] in
//! [`extract_price`].

use clap::ValueEnum;
use log::debug;
use serde::Deserialize;
use strum_macros::Display;

use crate::error::TickerError;
use crate::quote::Quote;
use crate::result::Result;

/// Literal text that precedes the price value in a ticker response.
pub const PRICE_MARKER: &str = "\"price\":\"";

/// Turns a response body into a price.
pub trait PriceExtractor {
    /// Read the price out of `body`.
    fn extract(&self, body: &str) -> Result<f64>;

    /// Same as [`Self::extract`], collapsing every failure into `Quote::Unavailable`.
    fn quote(&self, body: &str) -> Quote {
        match self.extract(body) {
            Ok(price) => Quote::Price(price),
            Err(e) => {
                debug!("No price in response: {}", e);
                Quote::Unavailable
            }
        }
    }
}

/// Substring scanner for `"price":"<numeral>"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerExtractor;

impl PriceExtractor for MarkerExtractor {
    fn extract(&self, body: &str) -> Result<f64> {
        let start = body.find(PRICE_MARKER).ok_or(TickerError::MarkerNotFound)? + PRICE_MARKER.len();
        let rest = &body[start..];
        let raw = rest.find('"').map_or(rest, |end| &rest[..end]);
        parse_numeral(raw)
    }
}

/// `serde_json` based extractor for `{"symbol": "...", "price": ...}` bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExtractor;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: RawPrice,
}

impl PriceExtractor for JsonExtractor {
    fn extract(&self, body: &str) -> Result<f64> {
        let ticker: TickerPrice = serde_json::from_str(body)?;
        match ticker.price {
            RawPrice::Text(raw) => parse_numeral(&raw),
            RawPrice::Number(price) if price.is_finite() => Ok(price),
            RawPrice::Number(price) => Err(TickerError::InvalidNumber(price.to_string())),
        }
    }
}

/// Extractor selectable from the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum ExtractorKind {
    /// Substring scan for the price marker.
    #[default]
    Marker,
    /// Full JSON deserialization.
    Json,
}

impl PriceExtractor for ExtractorKind {
    fn extract(&self, body: &str) -> Result<f64> {
        match self {
            ExtractorKind::Marker => MarkerExtractor.extract(body),
            ExtractorKind::Json => JsonExtractor.extract(body),
        }
    }
}

/// Extract the price from `body` with the marker scanner.
///
/// Returns `Quote::Unavailable` when the marker is missing or the value after it
/// is not a number.
pub fn extract_price(body: &str) -> Quote {
    MarkerExtractor.quote(body)
}

fn parse_numeral(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TickerError::InvalidNumber(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"symbol":"BTCUSDT","price":"67123.45000000"}"#;

    #[test]
    fn extracts_price_after_marker() {
        assert_eq!(extract_price(BODY), Quote::Price(67123.45));
        assert_eq!(extract_price(r#""price":"67123.45""#), Quote::Price(67123.45));
    }

    #[test]
    fn missing_marker_is_unavailable() {
        assert_eq!(extract_price(""), Quote::Unavailable);
        assert_eq!(extract_price("{}"), Quote::Unavailable);
        assert_eq!(extract_price(r#"{"price":67123.45}"#), Quote::Unavailable);
        assert!(matches!(
            MarkerExtractor.extract("{}"),
            Err(TickerError::MarkerNotFound)
        ));
    }

    #[test]
    fn malformed_numeral_is_unavailable() {
        assert_eq!(extract_price(r#"{"price":"n/a"}"#), Quote::Unavailable);
        assert_eq!(extract_price(r#"{"price":""}"#), Quote::Unavailable);
        assert_eq!(extract_price(r#"{"price":"inf"}"#), Quote::Unavailable);
        match MarkerExtractor.extract(r#"{"price":"12.3abc"}"#) {
            Err(TickerError::InvalidNumber(raw)) => assert_eq!(raw, "12.3abc"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn only_first_marker_is_used() {
        let body = r#"[{"price":"1.50"},{"price":"2.50"}]"#;
        assert_eq!(extract_price(body), Quote::Price(1.5));
    }

    #[test]
    fn unterminated_value_reads_to_end() {
        assert_eq!(extract_price(r#""price":"99.5"#), Quote::Price(99.5));
    }

    #[test]
    fn json_extractor_accepts_text_and_number() {
        assert_eq!(JsonExtractor.extract(BODY).unwrap(), 67123.45);
        assert_eq!(
            JsonExtractor.extract(r#"{"symbol": "ETHUSDT", "price": 3120.5}"#).unwrap(),
            3120.5
        );
        assert!(matches!(JsonExtractor.extract("{}"), Err(TickerError::SerdeJson(_))));
        assert_eq!(JsonExtractor.quote(""), Quote::Unavailable);
    }

    #[test]
    fn kinds_agree_on_well_formed_bodies() {
        for kind in [ExtractorKind::Marker, ExtractorKind::Json] {
            assert_eq!(kind.quote(BODY), Quote::Price(67123.45), "{}", kind);
        }
    }
}
