//! Session state shared by the derivation and price flows.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::Sender;
use qrcode::types::QrError;
use tokio::task::JoinHandle;

use crate::crypto::{EntropyError, EntropySource, HashAlgorithm, KeySet};
use crate::presentation::{Page, PRICE_ERROR_TEXT};
use crate::price::{PriceClient, PriceError, PriceQuote};
use crate::qr::{CodeImage, DEFAULT_SIZE};

/// Derivation and display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Digest used for both hashing steps
    pub hash: HashAlgorithm,
    /// QR edge length in pixels
    pub qr_size: u32,
    /// Whether the rendered page includes the private key
    pub show_private_key: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hash: HashAlgorithm::default(),
            qr_size: DEFAULT_SIZE,
            show_private_key: false,
        }
    }
}

/// Why a page load did not publish anything.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error("QR rendering failed: {0}")]
    Qr(#[from] QrError),
}

/// A failure report sent to the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Ticket of the failed request
    pub ticket: u64,
    /// Failure detail
    pub message: String,
}

/// Outcome of one price request.
#[derive(Debug)]
pub struct PriceUpdate {
    /// Issue order of the request, starting at 1
    pub ticket: u64,
    /// What the endpoint returned
    pub result: Result<PriceQuote, PriceError>,
    /// False if a newer request had already updated the page
    pub applied: bool,
}

impl PriceUpdate {
    /// The text this update writes to the price field.
    pub fn display_text(&self) -> String {
        price_text(&self.result)
    }
}

fn price_text(result: &Result<PriceQuote, PriceError>) -> String {
    match result {
        Ok(quote) => quote.display_text(),
        Err(_) => PRICE_ERROR_TEXT.to_string(),
    }
}

/// One run of the tool: the page plus the collaborators that fill it.
///
/// Cloning is cheap and clones share the same page, so price requests can
/// run on spawned tasks.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    prices: PriceClient,
    page: Arc<Mutex<Page>>,
    /// Last issued price ticket
    tickets: Arc<AtomicU64>,
    diagnostics: Option<Sender<Diagnostic>>,
}

impl Session {
    /// Creates a session with an empty page.
    pub fn new(config: SessionConfig, prices: PriceClient) -> Self {
        Self {
            config,
            prices,
            page: Arc::new(Mutex::new(Page::new(config.show_private_key))),
            tickets: Arc::new(AtomicU64::new(0)),
            diagnostics: None,
        }
    }

    /// Also send price failures to `tx`.
    pub fn with_diagnostics(mut self, tx: Sender<Diagnostic>) -> Self {
        self.diagnostics = Some(tx);
        self
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Page-load entry point: derives a fresh key set and publishes it.
    ///
    /// The QR code is rendered before anything is written, so on error the
    /// page keeps whatever it showed before. Calling this again replaces
    /// the key set with a new, independent one.
    pub fn load<E: EntropySource + ?Sized>(&self, entropy: &mut E) -> Result<KeySet, LoadError> {
        let keys = KeySet::generate_with(entropy, self.config.hash)?;
        let address = keys.address().to_hex_prefixed();
        let qr = CodeImage::render(&address, self.config.qr_size)?;

        {
            let mut page = self.lock_page();
            page.private_key = Some(keys.private_key_hex().to_owned());
            page.public_key = Some(keys.public_key_hex().to_owned());
            page.wallet_address = Some(address);
            page.address_qr_code = Some(qr);
        }

        tracing::info!(address = %keys.address(), hash = %self.config.hash, "key set loaded");
        Ok(keys)
    }

    /// Issues one price request and writes the outcome to the price field.
    ///
    /// The ticket is taken when this is called, not when the future is
    /// first polled. A response whose ticket is older than the one already
    /// on display is dropped.
    pub fn fetch_price(&self) -> impl Future<Output = PriceUpdate> + Send + 'static {
        let ticket = self.tickets.fetch_add(1, Ordering::Relaxed) + 1;
        let session = self.clone();
        async move { session.run_fetch(ticket).await }
    }

    /// Runs [`Session::fetch_price`] on a new task.
    pub fn spawn_fetch_price(&self) -> JoinHandle<PriceUpdate> {
        tokio::spawn(self.fetch_price())
    }

    /// Returns a snapshot of the page.
    pub fn page(&self) -> Page {
        self.lock_page().clone()
    }

    async fn run_fetch(&self, ticket: u64) -> PriceUpdate {
        let result = self.prices.fetch().await;

        match &result {
            Ok(quote) => {
                tracing::info!(ticket, asset = %quote.asset, price = quote.value, "price received")
            }
            Err(err) => self.report(ticket, err),
        }

        let applied = self.lock_page().apply_price(ticket, price_text(&result));
        if !applied {
            tracing::debug!(ticket, "newer price already shown, dropping response");
        }

        PriceUpdate {
            ticket,
            result,
            applied,
        }
    }

    fn report(&self, ticket: u64, err: &PriceError) {
        tracing::error!(ticket, "Error fetching price: {err}");
        if let Some(tx) = &self.diagnostics {
            // Receiver may be gone; the log line above still records it.
            let _ = tx.send(Diagnostic {
                ticket,
                message: err.to_string(),
            });
        }
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
