//! The display surface: named fields written by the two flows.

use std::fmt;

use crate::qr::CodeImage;

/// Text shown in the price field when a lookup fails.
pub const PRICE_ERROR_TEXT: &str = "Error fetching price";

/// A named display region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Hex private key
    PrivateKey,
    /// Hex public key
    PublicKey,
    /// `0x` address
    WalletAddress,
    /// Price quote or error text
    CryptoPrice,
    /// QR code of the address
    AddressQrCode,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 5] = [
        Field::PrivateKey,
        Field::PublicKey,
        Field::WalletAddress,
        Field::CryptoPrice,
        Field::AddressQrCode,
    ];

    /// Stable element id.
    pub fn id(self) -> &'static str {
        match self {
            Field::PrivateKey => "private-key",
            Field::PublicKey => "public-key",
            Field::WalletAddress => "wallet-address",
            Field::CryptoPrice => "crypto-price",
            Field::AddressQrCode => "address-qr-code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything currently on display.
///
/// Fields start empty. The derivation flow owns the key fields and the
/// QR code; the price flow owns `crypto_price`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub private_key: Option<String>,
    pub public_key: Option<String>,
    pub wallet_address: Option<String>,
    pub crypto_price: Option<String>,
    pub address_qr_code: Option<CodeImage>,
    /// Ticket of the price update currently shown (0 = none yet)
    price_ticket: u64,
    /// Print the private key when rendering
    show_private_key: bool,
}

impl Page {
    /// An empty page.
    pub fn new(show_private_key: bool) -> Self {
        Self {
            show_private_key,
            ..Self::default()
        }
    }

    /// Text content of a field. The QR field yields its payload.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::PrivateKey => self.private_key.as_deref(),
            Field::PublicKey => self.public_key.as_deref(),
            Field::WalletAddress => self.wallet_address.as_deref(),
            Field::CryptoPrice => self.crypto_price.as_deref(),
            Field::AddressQrCode => self.address_qr_code.as_ref().map(|qr| qr.payload.as_str()),
        }
    }

    /// True when no derivation has been published yet.
    pub fn is_unloaded(&self) -> bool {
        self.private_key.is_none()
            && self.public_key.is_none()
            && self.wallet_address.is_none()
            && self.address_qr_code.is_none()
    }

    /// Writes the price field if `ticket` is newer than the one on display.
    ///
    /// Returns false, leaving the page untouched, for a stale ticket.
    pub(crate) fn apply_price(&mut self, ticket: u64, text: String) -> bool {
        if ticket <= self.price_ticket {
            return false;
        }
        self.price_ticket = ticket;
        self.crypto_price = Some(text);
        true
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

        if self.show_private_key {
            writeln!(f, "Private Key: {}", show(&self.private_key))?;
        }
        writeln!(f, "Public Key:  {}", show(&self.public_key))?;
        writeln!(f, "Address:     {}", show(&self.wallet_address))?;
        writeln!(f, "Price:       {}", show(&self.crypto_price))?;
        if let Some(qr) = &self.address_qr_code {
            writeln!(f)?;
            write!(f, "{}", qr.terminal)?;
        }
        Ok(())
    }
}
