//! Price quote value type.

use std::fmt;

/// A single spot price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Asset id the price is for
    pub asset: String,
    /// Quote currency
    pub currency: String,
    /// The price
    pub value: f64,
}

impl PriceQuote {
    /// The text shown on the page: `$` followed by the plain number.
    ///
    /// The dollar sign is literal and does not follow `currency`.
    pub fn display_text(&self) -> String {
        format!("${}", self.value)
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
