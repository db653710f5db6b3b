//! Content hashing.

use sha2::{Digest, Sha256};

/// Incremental SHA256 over tangled output.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds bytes into the digest.
    pub fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Returns the hex-encoded digest.
    pub fn hexdigest(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// Computes SHA256 hash of bytes, returning hex-encoded digest.
pub fn hexdigest_bytes(content: &[u8]) -> String {
    let mut hasher = ContentHasher::new();
    hasher.update(content);
    hasher.hexdigest()
}
