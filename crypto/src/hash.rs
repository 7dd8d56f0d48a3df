//! SHA-256 hashing for blocks.

use sha2::{Digest, Sha256};
use suara_types::BlockHash;

/// Compute a 256-bit SHA-256 hash of arbitrary data.
pub fn sha256_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash a serialized block preimage to produce its `BlockHash`.
pub fn hash_block(preimage: &[u8]) -> BlockHash {
    BlockHash::new(sha256_256(preimage))
}
