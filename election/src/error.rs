use suara_ledger::LedgerError;
use suara_types::VoterId;
use thiserror::Error;

/// Failures when registering a candidate.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("candidate name must not be blank")]
    EmptyName,

    #[error("candidate {0:?} is already registered")]
    DuplicateCandidate(String),
}

/// Failures when casting a vote.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("voter id must not be blank")]
    EmptyVoterId,

    #[error("no registered candidate selected")]
    NoCandidateSelected,

    #[error("voter {0} has already voted")]
    DuplicateVote(VoterId),

    #[error("ledger append failed: {0}")]
    LedgerAppendFailed(#[from] LedgerError),
}
