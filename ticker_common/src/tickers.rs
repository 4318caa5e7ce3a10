//! Trading pairs the monitor knows how to label.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Set of supported trading pairs.
///
/// `Display` yields the exchange symbol (`BTCUSDT`) used in the request URL;
/// parsing is case-insensitive so `btcusdt` works on the command line.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    #[default]
    BTCUSDT,
    ETHUSDT,
    BNBUSDT,
    SOLUSDT,
    XRPUSDT,
    ADAUSDT,
    DOGEUSDT,
    LTCUSDT,
}

impl Ticker {
    /// Human readable asset label shown on the panel's asset line.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Ticker::BTCUSDT => "Bitcoin (BTC)",
            Ticker::ETHUSDT => "Ethereum (ETH)",
            Ticker::BNBUSDT => "BNB (BNB)",
            Ticker::SOLUSDT => "Solana (SOL)",
            Ticker::XRPUSDT => "XRP (XRP)",
            Ticker::ADAUSDT => "Cardano (ADA)",
            Ticker::DOGEUSDT => "Dogecoin (DOGE)",
            Ticker::LTCUSDT => "Litecoin (LTC)",
        }
    }
}
