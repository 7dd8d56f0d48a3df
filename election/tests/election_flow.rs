//! End-to-end election flow over a deterministic clock.

use std::sync::Arc;

use suara_election::{CandidateError, ElectionService, VoteError};
use suara_ledger::Payload;
use suara_nullables::NullClock;
use suara_types::Timestamp;

fn tally_sum(election: &ElectionService) -> u64 {
    election.tally().iter().map(|(_, count)| count).sum()
}

/// Every successful vote is recorded exactly once in both the chain and
/// the tally.
fn assert_sum_property(election: &ElectionService) {
    assert_eq!(tally_sum(election), election.chain().len() as u64 - 1);
}

#[tokio::test]
async fn full_election_flow() {
    let clock = Arc::new(NullClock::new(1_700_000_000_000));
    let mut election = ElectionService::new(clock.clone()).unwrap();

    election.register_candidate("Alice").unwrap();
    election.register_candidate("Bob").unwrap();
    assert_eq!(election.list_candidates(), ["Alice", "Bob"]);
    assert_sum_property(&election);

    clock.advance(1_000);
    election.cast_vote("NIK1", "Alice").await.unwrap();
    assert_eq!(
        election.tally(),
        vec![("Alice".to_string(), 1), ("Bob".to_string(), 0)]
    );
    assert_sum_property(&election);

    let err = election.cast_vote("NIK1", "Bob").await.unwrap_err();
    assert!(matches!(err, VoteError::DuplicateVote(_)));
    assert_eq!(
        election.tally(),
        vec![("Alice".to_string(), 1), ("Bob".to_string(), 0)]
    );
    assert_sum_property(&election);

    clock.advance(1_000);
    election.cast_vote("NIK2", "Bob").await.unwrap();
    // Tie at one vote each: registration order breaks it.
    assert_eq!(
        election.tally(),
        vec![("Alice".to_string(), 1), ("Bob".to_string(), 1)]
    );
    assert_sum_property(&election);

    assert_eq!(election.chain().len(), 3);
    assert!(election.verify_integrity());
}

#[tokio::test]
async fn candidate_registration_failures() {
    let mut election = ElectionService::new(Arc::new(NullClock::new(0))).unwrap();

    assert!(matches!(
        election.register_candidate(""),
        Err(CandidateError::EmptyName)
    ));

    election.register_candidate("Alice").unwrap();
    assert!(matches!(
        election.register_candidate("Alice"),
        Err(CandidateError::DuplicateCandidate(_))
    ));

    assert_eq!(election.list_candidates(), ["Alice"]);
}

#[tokio::test]
async fn chain_records_votes_in_order_with_clock_times() {
    let clock = Arc::new(NullClock::new(10_000));
    let mut election = ElectionService::new(clock.clone()).unwrap();
    election.register_candidate("Alice").unwrap();
    election.register_candidate("Bob").unwrap();

    clock.advance(500);
    election.cast_vote("NIK1", "Alice").await.unwrap();
    clock.advance(500);
    election.cast_vote("NIK2", "Bob").await.unwrap();

    let chain = election.chain();
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].payload, Payload::Genesis);
    assert_eq!(chain[0].timestamp, Timestamp::new(10_000));

    let first = chain[1].vote().unwrap();
    assert_eq!(first.voter_id.as_str(), "NIK1");
    assert_eq!(first.candidate, "Alice");
    assert_eq!(chain[1].timestamp, Timestamp::new(10_500));

    let second = chain[2].vote().unwrap();
    assert_eq!(second.voter_id.as_str(), "NIK2");
    assert_eq!(second.candidate, "Bob");
    assert_eq!(chain[2].timestamp, Timestamp::new(11_000));

    assert!(election.verify_integrity());
}

#[tokio::test]
async fn many_distinct_voters_keep_the_chain_intact() {
    let clock = Arc::new(NullClock::new(1_000));
    let mut election = ElectionService::new(clock.clone()).unwrap();
    election.register_candidate("Alice").unwrap();
    election.register_candidate("Bob").unwrap();

    for i in 0..50 {
        clock.advance(10);
        let candidate = if i % 2 == 0 { "Alice" } else { "Bob" };
        election.cast_vote(&format!("NIK{i}"), candidate).await.unwrap();
        assert!(election.verify_integrity());
        assert_sum_property(&election);
    }

    assert_eq!(election.chain().len(), 51);
    assert_eq!(
        election.tally(),
        vec![("Alice".to_string(), 25), ("Bob".to_string(), 25)]
    );
}
