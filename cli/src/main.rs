//! suara console — entry point for running an election at a terminal.
//!
//! The console is a thin collaborator around the election service: it
//! parses commands, projects `tally()` and `chain()` output as text, and
//! translates failure kinds into user-facing messages. All election state
//! lives in memory and is gone when the process exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use suara_election::{CandidateError, ElectionConfig, ElectionService, VoteError};
use suara_ledger::{Block, Payload};
use suara_utils::short_hash;

#[derive(Parser)]
#[command(name = "suara", about = "In-memory hash-chained vote ledger console")]
struct Cli {
    /// Path to a TOML election config (election name, candidates to
    /// pre-register).
    #[arg(long, env = "SUARA_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "warn", env = "SUARA_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    suara_utils::init_tracing(&cli.log_level);

    let config: ElectionConfig = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    cfg
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using defaults");
                    ElectionConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using defaults",
                    config_path.display()
                );
                ElectionConfig::default()
            }
        }
    } else {
        ElectionConfig::default()
    };

    let mut election = ElectionService::with_system_clock()?;
    for name in &config.candidates {
        match election.register_candidate(name) {
            Ok(()) => {}
            Err(e) => tracing::warn!("skipping configured candidate: {e}"),
        }
    }

    println!("{} — type `help` for commands", config.name);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, rest) = split_command(&line);
        match command {
            None => {}
            Some("help") => print_help(),
            Some("candidate") => match election.register_candidate(rest) {
                Ok(()) => println!("Candidate {rest:?} added to the ballot."),
                Err(e) => println!("{}", candidate_error_message(&e)),
            },
            Some("vote") => {
                let (voter_id, candidate) = match rest.split_once(char::is_whitespace) {
                    Some((voter_id, candidate)) => (voter_id, candidate.trim()),
                    None => (rest, ""),
                };
                match election.cast_vote(voter_id, candidate).await {
                    Ok(()) => println!("Vote for {candidate:?} recorded."),
                    Err(e) => println!("{}", vote_error_message(&e)),
                }
            }
            Some("candidates") => {
                if election.list_candidates().is_empty() {
                    println!("No candidates on the ballot yet.");
                }
                for name in election.list_candidates() {
                    println!("  {name}");
                }
            }
            Some("results") => {
                if election.list_candidates().is_empty() {
                    println!("No candidates on the ballot yet.");
                }
                for (name, count) in election.tally() {
                    println!("  {name} — {count} vote(s)");
                }
            }
            Some("chain") => {
                // Newest block first.
                for block in election.chain().iter().rev() {
                    print_block(block);
                }
            }
            Some("verify") => {
                if election.verify_integrity() {
                    println!("Chain intact: every hash matches and every link holds.");
                } else {
                    println!("Chain CORRUPT: a hash or link does not match.");
                }
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("Unknown command {other:?} — type `help`."),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Split a command line into its head word and the untouched remainder, so
/// candidate names may contain spaces.
fn split_command(line: &str) -> (Option<&str>, &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (None, "");
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (Some(head), rest.trim()),
        None => (Some(trimmed), ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  candidate <name>           add a candidate to the ballot");
    println!("  vote <voter-id> <name>     cast a vote");
    println!("  candidates                 list the ballot in registration order");
    println!("  results                    show the tally, highest first");
    println!("  chain                      show the ledger, newest block first");
    println!("  verify                     check hashes and linkage end to end");
    println!("  quit                       leave");
}

fn print_block(block: &Block) {
    println!("Block #{}", block.index);
    println!("  time:     {}", block.timestamp);
    match &block.payload {
        Payload::Genesis => println!("  payload:  genesis marker"),
        Payload::Vote(record) => {
            println!(
                "  payload:  vote by {} for {:?}",
                record.voter_id, record.candidate
            );
        }
    }
    println!("  previous: {}", short_hash(&block.previous_hash));
    println!("  hash:     {}", short_hash(&block.hash));
}

fn candidate_error_message(err: &CandidateError) -> String {
    match err {
        CandidateError::EmptyName => "Candidate name must not be empty.".to_string(),
        CandidateError::DuplicateCandidate(name) => {
            format!("Candidate {name:?} already exists.")
        }
    }
}

fn vote_error_message(err: &VoteError) -> String {
    match err {
        VoteError::EmptyVoterId => "Please enter your voter id.".to_string(),
        VoteError::NoCandidateSelected => "Please pick a registered candidate.".to_string(),
        VoteError::DuplicateVote(voter) => {
            format!("Voter id {voter} has already been used. Double votes are not allowed.")
        }
        VoteError::LedgerAppendFailed(e) => {
            format!("Something went wrong while recording the vote: {e}")
        }
    }
}
