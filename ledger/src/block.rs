//! Block format and the canonical digest over block contents.
//!
//! A block's hash is computed exactly once, when the block is built, and
//! stored alongside the fields it covers. The digest preimage is the
//! concatenation of the decimal index, the decimal millisecond timestamp,
//! the canonical JSON form of the payload, and the lowercase-hex previous
//! hash. JSON keeps the payload unambiguous: the genesis marker is a quoted
//! string, a vote is an object with a fixed field order, and no value of
//! one shape can collide with the other.

use serde::{Serialize, Serializer};
use suara_crypto::sha256_256_multi;
use suara_types::{BlockHash, Timestamp, VoterId};

use crate::error::LedgerError;

/// The payload of the chain's first block. From this marker on, every
/// block records a vote.
pub const GENESIS_MARKER: &str = "Genesis Block";

/// One recorded vote: who voted, for whom, and when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRecord {
    pub voter_id: VoterId,
    pub candidate: String,
    pub timestamp: Timestamp,
}

/// What a block carries: the genesis marker or a vote.
///
/// Vote payloads carry a voter identifier unconditionally, so the
/// consumed-voter set can never be bypassed by a vote without one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Genesis,
    Vote(VoteRecord),
}

impl Payload {
    pub fn vote(&self) -> Option<&VoteRecord> {
        match self {
            Payload::Vote(record) => Some(record),
            Payload::Genesis => None,
        }
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Payload::Genesis => serializer.serialize_str(GENESIS_MARKER),
            Payload::Vote(record) => record.serialize(serializer),
        }
    }
}

/// A block in the vote chain. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Position in the chain: 0 for genesis, +1 per append.
    pub index: u64,

    /// Creation time. Non-decreasing along the chain.
    pub timestamp: Timestamp,

    /// Genesis marker or vote record.
    pub payload: Payload,

    /// Hash of the preceding block (`BlockHash::ZERO` for genesis).
    pub previous_hash: BlockHash,

    /// The digest of the four fields above, computed at build time.
    pub hash: BlockHash,
}

impl Block {
    /// Recompute the digest from this block's own fields.
    pub fn compute_hash(&self) -> Result<BlockHash, LedgerError> {
        digest(self.index, self.timestamp, &self.payload, &self.previous_hash)
    }

    /// The vote this block records, if it is not the genesis block.
    pub fn vote(&self) -> Option<&VoteRecord> {
        self.payload.vote()
    }
}

/// Canonical digest over block contents.
///
/// Deterministic: identical arguments always produce the identical hash,
/// and any change to any field changes the preimage.
pub fn digest(
    index: u64,
    timestamp: Timestamp,
    payload: &Payload,
    previous_hash: &BlockHash,
) -> Result<BlockHash, LedgerError> {
    let payload_json = serde_json::to_string(payload)?;
    let hash = sha256_256_multi(&[
        index.to_string().as_bytes(),
        timestamp.as_millis().to_string().as_bytes(),
        payload_json.as_bytes(),
        previous_hash.to_hex().as_bytes(),
    ]);
    Ok(BlockHash::new(hash))
}

/// Assemble the canonical preimage as one owned buffer, for hashing off
/// the current thread. `hash_block` over this buffer equals `digest` over
/// the same fields (a multi-part update hashes the concatenation).
pub(crate) fn hash_preimage(
    index: u64,
    timestamp: Timestamp,
    payload: &Payload,
    previous_hash: &BlockHash,
) -> Result<Vec<u8>, LedgerError> {
    let payload_json = serde_json::to_string(payload)?;
    let mut buffer = Vec::new();
    buffer.extend_from_slice(index.to_string().as_bytes());
    buffer.extend_from_slice(timestamp.as_millis().to_string().as_bytes());
    buffer.extend_from_slice(payload_json.as_bytes());
    buffer.extend_from_slice(previous_hash.to_hex().as_bytes());
    Ok(buffer)
}
