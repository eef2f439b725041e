//! # Consensus Tally
//!
//! Per-candidate vote bookkeeping for voted registration.
//!
//! ## Algorithm
//!
//! 1. Record at most one vote per (candidate, voter) pair
//! 2. Recompute N, the registered-airline count, on every vote
//! 3. Register the candidate once `votes * 100 >= percent * N`
//!
//! N is never cached from nomination time: airlines registered while a
//! candidate is pending raise the bar for that candidate.

use super::{LedgerState, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::{BTreeMap, BTreeSet};

/// Whether `votes` clear `percent`% of `registered_count`.
pub fn consensus_reached(votes: u64, registered_count: usize, percent: u8) -> bool {
    u128::from(votes) * 100 >= u128::from(percent) * registered_count as u128
}

/// Smallest vote count that clears `percent`% of `registered_count`.
pub fn required_votes(registered_count: usize, percent: u8) -> u64 {
    let needed = u128::from(percent) * registered_count as u128;
    needed.div_ceil(100) as u64
}

/// Voters recorded per candidate.
///
/// Vote sets are kept after a candidate registers so `has_voted` stays
/// answerable for audits; they are simply no longer consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    votes: BTreeMap<Address, BTreeSet<Address>>,
}

impl VoteTally {
    /// Create the (empty) vote set for a newly nominated candidate.
    pub(crate) fn open(&mut self, candidate: Address) {
        self.votes.entry(candidate).or_default();
    }

    pub fn has_voted(&self, candidate: &Address, voter: &Address) -> bool {
        self.votes
            .get(candidate)
            .map(|voters| voters.contains(voter))
            .unwrap_or(false)
    }

    /// Number of recorded voters for `candidate`.
    pub fn vote_count(&self, candidate: &Address) -> usize {
        self.votes.get(candidate).map(BTreeSet::len).unwrap_or(0)
    }

    pub fn voters(&self, candidate: &Address) -> Vec<Address> {
        self.votes
            .get(candidate)
            .map(|voters| voters.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns false if the pair was already recorded.
    pub(crate) fn record(&mut self, candidate: Address, voter: Address) -> bool {
        self.votes.entry(candidate).or_default().insert(voter)
    }
}

/// Result of a successful vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub candidate: Address,
    pub voter: Address,
    /// Votes after this one
    pub vote_count: u64,
    /// N as evaluated for this vote
    pub registered_count: usize,
    pub required_votes: u64,
    /// This vote cleared the threshold
    pub registered: bool,
}

impl LedgerState {
    /// Cast `caller`'s vote for a pending `candidate`.
    ///
    /// The name is informational; the one bound at nomination is kept.
    pub fn vote_to_register_airline(
        &mut self,
        _name: &str,
        candidate: Address,
        caller: &Address,
        consensus_percent: u8,
    ) -> RegistryResult<VoteOutcome> {
        self.require_operational()?;
        if !self.airline(caller).is_eligible() {
            return Err(RegistryError::VoterNotEligible(*caller));
        }

        let pending = self
            .airlines
            .get(&candidate)
            .map(|r| !r.is_registered && r.has_pending_vote)
            .unwrap_or(false);
        if !pending {
            return Err(RegistryError::NothingToVoteOn(candidate));
        }
        if self.tally.has_voted(&candidate, caller) {
            return Err(RegistryError::DuplicateVote {
                candidate,
                voter: *caller,
            });
        }

        let inserted = self.tally.record(candidate, *caller);
        debug_assert!(inserted);
        let registered_count = self.registered_count();
        let record = self.record_mut(candidate);
        record.vote_count += 1;
        let vote_count = record.vote_count;

        let registered = consensus_reached(vote_count, registered_count, consensus_percent);
        if registered {
            record.finalize_vote();
        }

        Ok(VoteOutcome {
            candidate,
            voter: *caller,
            vote_count,
            registered_count,
            required_votes: required_votes(registered_count, consensus_percent),
            registered,
        })
    }

    pub fn has_voted(&self, candidate: &Address, voter: &Address) -> bool {
        self.tally.has_voted(candidate, voter)
    }
}
