//! Hash-based key set derivation.
//!
//! This module provides:
//! - A pluggable entropy source backed by the OS CSPRNG
//! - SHA-256 / Keccak-256 hex digests over text
//! - The seed -> private key -> public key -> address pipeline
//!
//! None of this is elliptic-curve cryptography. The "keys" are display
//! strings and the address follows no chain's encoding standard.

mod address;
mod digest;
mod entropy;
mod keyset;

pub use address::Address;
pub use digest::HashAlgorithm;
pub use entropy::{EntropyError, EntropySource, OsEntropy, Seed, SEED_LEN};
pub use keyset::KeySet;
