//! Error types for price lookups.

/// Errors that can occur while fetching a price quote.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server returned a non-2xx response.
    #[error("bad response ({status}): {body}")]
    BadResponse {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The body was not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The JSON had no numeric `asset.currency` field.
    #[error("missing price field {asset}.{currency}")]
    MissingField {
        /// Requested asset id.
        asset: String,
        /// Requested quote currency.
        currency: String,
    },
}
