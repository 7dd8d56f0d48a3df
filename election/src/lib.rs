//! Election service over the vote ledger.
//!
//! Owns the candidate registry and the per-candidate tally; delegates vote
//! recording and duplicate detection to `suara-ledger`. The service is the
//! policy layer: it decides whether a vote may be cast, the ledger merely
//! records what it is told.

pub mod config;
pub mod error;
pub mod service;

pub use config::ElectionConfig;
pub use error::{CandidateError, VoteError};
pub use service::ElectionService;
