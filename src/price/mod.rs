//! Spot price lookup against a CoinGecko-style `simple/price` endpoint.
//!
//! One call is one `GET {endpoint}?ids={asset}&vs_currencies={currency}`.
//! There are no retries, no timeouts and no caching.

mod client;
mod error;
mod quote;

#[cfg(test)]
mod tests;

pub use client::{PriceClient, PriceConfig, DEFAULT_ENDPOINT};
pub use error::PriceError;
pub use quote::PriceQuote;
