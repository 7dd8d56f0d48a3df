use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Append reached a ledger with no genesis block. Cannot happen through
    /// the public constructor, which always seeds genesis.
    #[error("ledger not initialized: chain has no genesis block")]
    Uninitialized,

    /// The blocking-pool digest task was cancelled or panicked.
    #[error("digest task failed: {0}")]
    DigestTask(#[from] tokio::task::JoinError),

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
