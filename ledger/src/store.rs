//! The ledger store: the chain itself plus the consumed-voter set.

use std::collections::HashSet;

use suara_types::{Timestamp, VoterId};

use crate::block::{hash_preimage, Block, Payload, VoteRecord};
use crate::error::LedgerError;
use crate::genesis::create_genesis_block;

/// Owns the ordered chain of blocks and the set of voter identifiers the
/// chain has consumed.
///
/// Explicitly constructed and explicitly owned — no process-wide singleton,
/// so independent elections can coexist (and be tested) side by side. The
/// chain is append-only: blocks are never edited, reordered, or removed.
///
/// Construct one store per election lifetime. Creating a second store from
/// the same logical election would fork the chain; that is a precondition
/// on the caller, not a runtime check.
///
/// Every mutating method takes `&mut self`, so the borrow checker provides
/// the single-writer guarantee: a caller holding the exclusive borrow runs
/// check-then-append sequences without interleaving.
pub struct LedgerStore {
    chain: Vec<Block>,
    voted: HashSet<VoterId>,
}

impl LedgerStore {
    /// Create a ledger containing exactly the genesis block.
    pub fn new(now: Timestamp) -> Result<Self, LedgerError> {
        let genesis = create_genesis_block(now)?;
        Ok(Self {
            chain: vec![genesis],
            voted: HashSet::new(),
        })
    }

    /// Append a vote record as a new block at the tail of the chain.
    ///
    /// The digest runs on the blocking pool; this future suspends until it
    /// resolves, so no block is ever visible with a placeholder hash. All
    /// fallible work happens before the first mutation — on any error the
    /// store is exactly as it was. On success the block is pushed and the
    /// voter id registered in the same exclusive-borrow critical section.
    ///
    /// Duplicate checking is the caller's policy: run [`has_voted`] first.
    /// Append records whatever it is given.
    ///
    /// [`has_voted`]: LedgerStore::has_voted
    pub async fn append(&mut self, record: VoteRecord, now: Timestamp) -> Result<Block, LedgerError> {
        let tail = self.chain.last().ok_or(LedgerError::Uninitialized)?;

        let index = tail.index + 1;
        // Wall clocks can step backwards; chain timestamps may not.
        let timestamp = now.max(tail.timestamp);
        let previous_hash = tail.hash;
        let voter = record.voter_id.clone();
        let payload = Payload::Vote(record);

        let preimage = hash_preimage(index, timestamp, &payload, &previous_hash)?;
        let hash = tokio::task::spawn_blocking(move || suara_crypto::hash_block(&preimage)).await?;

        let block = Block {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        };
        self.chain.push(block.clone());
        self.voted.insert(voter);
        Ok(block)
    }

    /// Whether `voter` already has a vote recorded in the chain. O(1).
    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.voted.contains(voter)
    }

    /// Walk the whole chain, recomputing every digest and checking the
    /// hash linkage end to end. Returns `false` at the first mismatch.
    ///
    /// Pure read, O(n). Not needed in normal operation — this is how an
    /// auditor (or a test) detects tampering or corruption.
    pub fn verify_integrity(&self) -> bool {
        let Some(genesis) = self.chain.first() else {
            return false;
        };
        if genesis.index != 0 || !genesis.previous_hash.is_zero() {
            return false;
        }

        let mut previous: Option<&Block> = None;
        for (position, block) in self.chain.iter().enumerate() {
            if block.index != position as u64 {
                return false;
            }
            if let Some(prev) = previous {
                if block.previous_hash != prev.hash {
                    return false;
                }
                if block.timestamp < prev.timestamp {
                    return false;
                }
            }
            match block.compute_hash() {
                Ok(recomputed) if recomputed == block.hash => {}
                _ => return false,
            }
            previous = Some(block);
        }
        true
    }

    /// Read-only view of the chain, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// The current tail of the chain.
    pub fn head(&self) -> Option<&Block> {
        self.chain.last()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
