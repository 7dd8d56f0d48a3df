//! Genesis block creation — the fixed first block of every chain.
//!
//! The genesis block has no real predecessor: its `previous_hash` is the
//! all-zero sentinel and its payload is the fixed marker string. Its hash
//! is computed like any other block's, so integrity verification walks the
//! chain uniformly from index 0.

use suara_types::{BlockHash, Timestamp};

use crate::block::{Block, Payload};
use crate::error::LedgerError;

/// Create the genesis block for a chain starting at `now`.
///
/// Two chains initialized at the same instant produce identical genesis
/// blocks; the timestamp is the only varying input.
pub fn create_genesis_block(now: Timestamp) -> Result<Block, LedgerError> {
    let mut block = Block {
        index: 0,
        timestamp: now,
        payload: Payload::Genesis,
        previous_hash: BlockHash::ZERO,
        hash: BlockHash::ZERO,
    };
    block.hash = block.compute_hash()?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_shape() {
        let block = create_genesis_block(Timestamp::new(1_000)).unwrap();
        assert_eq!(block.index, 0);
        assert!(block.previous_hash.is_zero());
        assert_eq!(block.payload, Payload::Genesis);
        assert!(block.vote().is_none());
        assert!(!block.hash.is_zero());
    }

    #[test]
    fn genesis_hash_is_deterministic() {
        let b1 = create_genesis_block(Timestamp::new(42)).unwrap();
        let b2 = create_genesis_block(Timestamp::new(42)).unwrap();
        assert_eq!(b1.hash, b2.hash);
    }

    #[test]
    fn genesis_hash_varies_with_time() {
        let b1 = create_genesis_block(Timestamp::new(42)).unwrap();
        let b2 = create_genesis_block(Timestamp::new(43)).unwrap();
        assert_ne!(b1.hash, b2.hash);
    }

    #[test]
    fn genesis_hash_matches_recompute() {
        let block = create_genesis_block(Timestamp::new(1_000)).unwrap();
        assert_eq!(block.compute_hash().unwrap(), block.hash);
    }
}
