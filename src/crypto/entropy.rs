//! Seed generation from a secure entropy source.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Errors raised while gathering entropy.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    /// No cryptographically secure generator could be read.
    #[error("Entropy unavailable: {0}")]
    Unavailable(String),
}

/// A source of seed bytes.
///
/// Implementations must either fill the whole buffer with secure random
/// bytes or fail. Substituting a weaker generator is not allowed.
pub trait EntropySource {
    /// Fills `buf` with random bytes.
    fn fill_seed(&mut self, buf: &mut [u8; SEED_LEN]) -> Result<(), EntropyError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_seed(&mut self, buf: &mut [u8; SEED_LEN]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// 32 random bytes. Wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Wraps existing bytes (used for deterministic derivation).
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from `source`.
    pub fn generate<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; SEED_LEN];
        source.fill_seed(&mut bytes)?;
        let seed = Self(bytes);
        bytes.zeroize();
        Ok(seed)
    }

    /// Returns the seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex, two digits per byte, leading zeros kept.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}
