//! HTTP client for the price endpoint.

use serde_json::Value;

use super::{PriceError, PriceQuote};

/// CoinGecko's public simple-price endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Which price to ask for, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceConfig {
    /// Endpoint URL, without query string.
    pub endpoint: String,
    /// Asset id (`ids` query parameter).
    pub asset: String,
    /// Quote currency (`vs_currencies` query parameter).
    pub currency: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset: "bitcoin".to_string(),
            currency: "usd".to_string(),
        }
    }
}

/// HTTP client for the price endpoint.
#[derive(Debug, Clone)]
pub struct PriceClient {
    /// Client configuration.
    config: PriceConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl PriceClient {
    /// Create a new price client with the given configuration.
    pub fn new(config: PriceConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &PriceConfig {
        &self.config
    }

    /// Fetch the current price. Issues exactly one request.
    pub async fn fetch(&self) -> Result<PriceQuote, PriceError> {
        let PriceConfig {
            endpoint,
            asset,
            currency,
        } = &self.config;

        tracing::debug!(%endpoint, %asset, %currency, "requesting price");
        let resp = self
            .client
            .get(endpoint)
            .query(&[("ids", asset.as_str()), ("vs_currencies", currency.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PriceError::BadResponse {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        let value = extract_price(&body, asset, currency).ok_or_else(|| {
            PriceError::MissingField {
                asset: asset.clone(),
                currency: currency.clone(),
            }
        })?;

        Ok(PriceQuote {
            asset: asset.clone(),
            currency: currency.clone(),
            value,
        })
    }
}

/// Reads `body[asset][currency]` as a number.
fn extract_price(body: &Value, asset: &str, currency: &str) -> Option<f64> {
    body.get(asset)?.get(currency)?.as_f64()
}
