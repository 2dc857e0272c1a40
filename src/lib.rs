//! # hash_wallet
//!
//! Derives a throwaway "private key", "public key" and `0x` address from 32
//! random bytes by hashing twice, renders the address as a QR code, and
//! looks up a spot price from a CoinGecko-style API.
//!
//! **This is not a cryptographic wallet.** There is no elliptic-curve key
//! generation and no standard address encoding or checksum. The derived
//! strings only look like keys and must never hold funds.
//!
//! ## Architecture
//!
//! - `crypto`: Entropy, digests and the seed -> address pipeline
//! - `price`: Price endpoint client
//! - `qr`: QR code rendering (SVG and terminal)
//! - `presentation`: The page of named display fields
//! - `session`: Page-level state tying the two flows together
//! - `config`: Command-line configuration

pub mod config;
pub mod crypto;
pub mod presentation;
pub mod price;
pub mod qr;
pub mod session;

pub use config::Config;
pub use crypto::{Address, EntropyError, EntropySource, HashAlgorithm, KeySet, OsEntropy, Seed};
pub use presentation::{Field, Page, PRICE_ERROR_TEXT};
pub use price::{PriceClient, PriceConfig, PriceError, PriceQuote};
pub use qr::CodeImage;
pub use session::{Diagnostic, LoadError, PriceUpdate, Session, SessionConfig};
