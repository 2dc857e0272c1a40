//! Runtime configuration for the command-line tool.

use std::path::PathBuf;

use clap::Parser;

use crate::crypto::HashAlgorithm;
use crate::price::{PriceConfig, DEFAULT_ENDPOINT};
use crate::qr::DEFAULT_SIZE;
use crate::session::SessionConfig;

/// Smallest accepted QR size in pixels.
const MIN_QR_SIZE: u32 = 64;
/// Largest accepted QR size in pixels.
const MAX_QR_SIZE: u32 = 4096;

/// Derive a throwaway key set by double hashing, show its address as a QR
/// code, and look up a spot price.
///
/// This is NOT a wallet: no elliptic-curve keys, no address standard.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Price endpoint (queried with ?ids=<asset>&vs_currencies=<currency>)
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Asset id to price
    #[arg(short, long, default_value = "bitcoin")]
    pub asset: String,

    /// Quote currency
    #[arg(short, long, default_value = "usd")]
    pub currency: String,

    /// Digest for both hashing steps: sha256 or keccak256
    #[arg(long = "hash", default_value = "sha256")]
    pub hash: HashAlgorithm,

    /// QR code size in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_SIZE)]
    pub qr_size: u32,

    /// Also write the address QR code as SVG to this file
    #[arg(long)]
    pub qr_svg: Option<PathBuf>,

    /// Do not print the QR code to the terminal
    #[arg(long, default_value = "false")]
    pub no_qr: bool,

    /// Print the private key as well
    #[arg(long, default_value = "false")]
    pub show_private_key: bool,

    /// Fetch the price once after deriving keys
    #[arg(short = 'p', long, default_value = "false")]
    pub fetch_price: bool,

    /// Interactive prompt (Enter/p: price, r: new keys, s: show, q: quit)
    #[arg(short, long, default_value = "false")]
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        let price = PriceConfig::default();
        Self {
            endpoint: price.endpoint,
            asset: price.asset,
            currency: price.currency,
            hash: HashAlgorithm::default(),
            qr_size: DEFAULT_SIZE,
            qr_svg: None,
            no_qr: false,
            show_private_key: false,
            fetch_price: false,
            interactive: false,
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        validate_id("asset", &self.asset)?;
        validate_id("currency", &self.currency)?;

        if !(MIN_QR_SIZE..=MAX_QR_SIZE).contains(&self.qr_size) {
            return Err(ConfigError::InvalidQrSize(self.qr_size));
        }

        Ok(())
    }

    /// Returns the price lookup settings
    pub fn price_config(&self) -> PriceConfig {
        PriceConfig {
            endpoint: self.endpoint.clone(),
            asset: self.asset.clone(),
            currency: self.currency.clone(),
        }
    }

    /// Returns the derivation and display settings
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            hash: self.hash,
            qr_size: self.qr_size,
            show_private_key: self.show_private_key,
        }
    }
}

fn validate_id(what: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidId {
            what,
            reason: "cannot be empty".into(),
        });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ConfigError::InvalidId {
            what,
            reason: format!("'{}' may only contain a-z, 0-9 and '-'", value),
        });
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid {what}: {reason}")]
    InvalidId { what: &'static str, reason: String },

    #[error("Invalid QR size {0}: must be between 64 and 4096 pixels")]
    InvalidQrSize(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.price_config(), PriceConfig::default());
        assert_eq!(config.session_config(), SessionConfig::default());
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "hash_wallet",
            "--hash",
            "keccak256",
            "-a",
            "ethereum",
            "-c",
            "eur",
            "-s",
            "256",
            "--show-private-key",
            "-p",
        ])
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.hash, HashAlgorithm::Keccak256);
        assert_eq!(config.price_config().asset, "ethereum");
        assert_eq!(config.price_config().currency, "eur");
        assert_eq!(config.qr_size, 256);
        assert!(config.show_private_key);
        assert!(config.fetch_price);
        assert!(!config.interactive);
    }

    #[test]
    fn test_unknown_hash_rejected() {
        assert!(Config::try_parse_from(["hash_wallet", "--hash", "md5"]).is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = Config {
            endpoint: "ftp://example.com/price".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));

        let config = Config {
            endpoint: "not a url".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_asset() {
        let config = Config {
            asset: "Bitcoin&x=1".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidId { what: "asset", .. })));

        let config = Config {
            currency: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_qr_size_bounds() {
        let config = Config {
            qr_size: 10,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidQrSize(10))));

        let config = Config {
            qr_size: MAX_QR_SIZE,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
