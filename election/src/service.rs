//! The election service: candidate registry, vote casting, tally.

use std::collections::HashMap;
use std::sync::Arc;

use suara_ledger::{Block, LedgerError, LedgerStore, VoteRecord};
use suara_types::{Clock, SystemClock, VoterId};

use crate::error::{CandidateError, VoteError};

/// Coordinates one election: validates vote requests, records accepted
/// votes in the ledger, and keeps the per-candidate tally in step with the
/// chain.
///
/// Explicitly constructed, explicitly owned — independent elections can
/// coexist in one process. Mutating methods take `&mut self`; the
/// exclusive borrow is the critical section, so a has-voted check can
/// never interleave with another caller's append for the same voter. A
/// host with genuinely concurrent callers wraps the service in an async
/// mutex and holds the guard across `cast_vote`.
pub struct ElectionService {
    ledger: LedgerStore,
    /// Registration order — drives display and tie-breaking.
    candidates: Vec<String>,
    votes: HashMap<String, u64>,
    clock: Arc<dyn Clock>,
}

impl ElectionService {
    /// Open an election whose ledger starts now, per the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self, LedgerError> {
        let ledger = LedgerStore::new(clock.now())?;
        Ok(Self {
            ledger,
            candidates: Vec::new(),
            votes: HashMap::new(),
            clock,
        })
    }

    pub fn with_system_clock() -> Result<Self, LedgerError> {
        Self::new(Arc::new(SystemClock))
    }

    /// Add a candidate to the ballot with a tally of zero.
    ///
    /// Names are compared exactly, after trimming surrounding whitespace.
    pub fn register_candidate(&mut self, name: &str) -> Result<(), CandidateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CandidateError::EmptyName);
        }
        if self.candidates.iter().any(|existing| existing == name) {
            return Err(CandidateError::DuplicateCandidate(name.to_string()));
        }
        self.candidates.push(name.to_string());
        self.votes.insert(name.to_string(), 0);
        tracing::info!(candidate = name, "candidate registered");
        Ok(())
    }

    /// Cast a vote: validate, append to the ledger, then bump the tally.
    ///
    /// Validation order, first failure wins, no partial effects:
    /// blank voter id, then unknown/blank candidate, then duplicate voter.
    /// The tally is incremented only after the append has committed; if the
    /// append fails, every structure is exactly as it was before the call.
    pub async fn cast_vote(&mut self, voter_id: &str, candidate: &str) -> Result<(), VoteError> {
        let voter_id = voter_id.trim();
        if voter_id.is_empty() {
            return Err(VoteError::EmptyVoterId);
        }

        let candidate = candidate.trim();
        if candidate.is_empty() || !self.candidates.iter().any(|existing| existing == candidate) {
            return Err(VoteError::NoCandidateSelected);
        }

        let voter = VoterId::new(voter_id);
        if self.ledger.has_voted(&voter) {
            tracing::warn!(voter = %voter, "duplicate vote rejected");
            return Err(VoteError::DuplicateVote(voter));
        }

        let now = self.clock.now();
        let record = VoteRecord {
            voter_id: voter.clone(),
            candidate: candidate.to_string(),
            timestamp: now,
        };
        let block = self.ledger.append(record, now).await?;

        *self.votes.entry(candidate.to_string()).or_insert(0) += 1;
        tracing::info!(voter = %voter, candidate, block = %block.hash, "vote recorded");
        Ok(())
    }

    /// Candidate names in registration order.
    pub fn list_candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Vote counts, descending; ties keep registration order (stable sort).
    pub fn tally(&self) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .candidates
            .iter()
            .map(|name| (name.clone(), self.votes.get(name).copied().unwrap_or(0)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    /// Read-only view of the chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        self.ledger.blocks()
    }

    /// Recompute and check the whole chain. Diagnostic, pure read.
    pub fn verify_integrity(&self) -> bool {
        self.ledger.verify_integrity()
    }
}
