//! 256-bit digests over text input.

use std::str::FromStr;

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

/// The digest used at both hashing steps of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    #[default]
    Sha256,
    /// Original Keccak-256, as used by Ethereum (not NIST SHA3-256)
    Keccak256,
}

impl HashAlgorithm {
    /// Hashes raw bytes into a 32-byte digest.
    pub fn digest(self, data: &[u8]) -> [u8; 32] {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).into(),
            HashAlgorithm::Keccak256 => {
                let mut hasher = Keccak::v256();
                hasher.update(data);
                let mut out = [0u8; 32];
                hasher.finalize(&mut out);
                out
            }
        }
    }

    /// Hashes the UTF-8 bytes of `text` and returns the lowercase hex digest.
    pub fn hex_digest(self, text: &str) -> String {
        hex::encode(self.digest(text.as_bytes()))
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "keccak256" | "keccak-256" | "keccak" => Ok(HashAlgorithm::Keccak256),
            _ => Err(format!("Unknown hash algorithm: {}", s)),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Keccak256 => write!(f, "keccak256"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_answer() {
        assert_eq!(
            HashAlgorithm::Sha256.hex_digest("00"),
            "f1534392279bddbf9d43dde8701cb5be14b82f76ec6607bf8d6ad557f60f304e"
        );
    }

    #[test]
    fn test_keccak256_known_answer() {
        assert_eq!(
            HashAlgorithm::Keccak256.hex_digest(""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_hex_digest_is_lowercase_64() {
        for algo in [HashAlgorithm::Sha256, HashAlgorithm::Keccak256] {
            let hex = algo.hex_digest("hello");
            assert_eq!(hex.len(), 64);
            assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SHA256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("keccak".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Keccak256));
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let algo = HashAlgorithm::Keccak256;
        assert_eq!(algo.to_string().parse::<HashAlgorithm>(), Ok(algo));
    }
}
