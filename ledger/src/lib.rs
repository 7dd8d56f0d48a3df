//! Append-only hash-chained vote ledger.
//!
//! A single linear chain: genesis at index 0, one block per recorded vote,
//! each block carrying the hash of its predecessor. The set of voter
//! identifiers consumed by the chain is the duplicate-vote guard. State is
//! process-lifetime only — there is no persistence layer.

pub mod block;
pub mod error;
pub mod genesis;
pub mod store;

pub use block::{digest, Block, Payload, VoteRecord, GENESIS_MARKER};
pub use error::LedgerError;
pub use genesis::create_genesis_block;
pub use store::LedgerStore;
