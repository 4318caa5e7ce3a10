//! The per-cycle price sample.

/// One price sample, or the marker that no usable price was obtained this cycle.
///
/// Fetch failures and unreadable payloads both end up as `Unavailable`; the
/// panel does not distinguish them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quote {
    /// A parsed price.
    Price(f64),
    /// No usable quote this cycle.
    Unavailable,
}

impl Quote {
    /// Numeric stand-in for `Unavailable` when a plain `f64` is required.
    pub const SENTINEL: f64 = -1.0;

    /// The price, if one was obtained.
    pub fn price(&self) -> Option<f64> {
        match self {
            Quote::Price(price) => Some(*price),
            Quote::Unavailable => None,
        }
    }

    /// `true` if this quote carries a price.
    pub fn is_available(&self) -> bool {
        matches!(self, Quote::Price(_))
    }

    /// The price, or [`Self::SENTINEL`] when unavailable.
    pub fn as_f64(&self) -> f64 {
        self.price().unwrap_or(Self::SENTINEL)
    }
}
