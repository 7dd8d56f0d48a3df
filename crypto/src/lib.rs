//! Digest primitives for the suara vote ledger.
//!
//! One concern only: turning bytes into 256-bit SHA-256 fingerprints. The
//! canonical preimage layout for blocks lives in `suara-ledger`; this crate
//! neither knows nor cares what it is hashing.

pub mod hash;

pub use hash::{hash_block, sha256_256, sha256_256_multi};
