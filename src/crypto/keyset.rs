//! Seed -> private key -> public key -> address.

use zeroize::Zeroize;

use super::entropy::{EntropyError, EntropySource, Seed};
use super::{Address, HashAlgorithm};

/// The three display strings derived from one seed.
///
/// `private_key_hex` is the seed in hex. `public_key_hex` is the digest of
/// that hex *string*. The address is the tail of the digest of the
/// public-key string. The private key is never used to sign anything.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySet {
    private_key: String,
    public_key: String,
    address: Address,
}

impl KeySet {
    /// Derives a key set from a fresh OS-random seed.
    pub fn generate(hash: HashAlgorithm) -> Result<Self, EntropyError> {
        Self::generate_with(&mut super::OsEntropy, hash)
    }

    /// Derives a key set from a seed drawn from `source`.
    ///
    /// Fails only if the source cannot provide secure bytes; nothing is
    /// derived in that case.
    pub fn generate_with<E: EntropySource + ?Sized>(
        source: &mut E,
        hash: HashAlgorithm,
    ) -> Result<Self, EntropyError> {
        let seed = Seed::generate(source)?;
        Ok(Self::from_seed(&seed, hash))
    }

    /// Derives a key set from an existing seed.
    ///
    /// Pure: the same seed and algorithm always give the same key set.
    pub fn from_seed(seed: &Seed, hash: HashAlgorithm) -> Self {
        let private_key = seed.to_hex();
        tracing::debug!(%hash, "hashing private key");
        let public_key = hash.hex_digest(&private_key);
        tracing::debug!(%hash, "hashing public key");
        let address = Address::from_digest(&hash.digest(public_key.as_bytes()));

        Self {
            private_key,
            public_key,
            address,
        }
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> &str {
        &self.private_key
    }

    /// Returns the public key as a hex string (without 0x prefix).
    pub fn public_key_hex(&self) -> &str {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Drop for KeySet {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl std::fmt::Debug for KeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySet")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
