//! Fundamental types for the suara vote ledger.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: block hashes, millisecond timestamps, the clock seam, and
//! voter identifiers.

pub mod hash;
pub mod time;
pub mod voter;

pub use hash::BlockHash;
pub use time::{Clock, SystemClock, Timestamp};
pub use voter::VoterId;
