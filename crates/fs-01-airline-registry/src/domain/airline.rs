//! Airline domain entities
//!
//! An `AirlineRecord` is created on first reference (funding or
//! registration) with every field zeroed and is never deleted.

use serde::{Deserialize, Serialize};
use shared_types::Wei;

/// Registration state of an airline identity.
///
/// `Unknown -> Registered` (direct) or `Unknown -> PendingVote -> Registered`
/// (voted). `Registered` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// No registration activity yet (may still hold funding)
    Unknown,
    /// Nominated, collecting votes
    PendingVote,
    /// Recognized member
    Registered,
}

/// How an airline became registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPath {
    /// Registered by a single sponsor while below the bootstrap quorum
    Direct,
    /// Registered once votes cleared the consensus threshold
    Consensus,
}

/// Registration and funding record for one airline identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRecord {
    /// Display name, informational only
    pub name: String,
    pub is_registered: bool,
    pub is_funded: bool,
    /// Accumulated contribution in wei, never decreases
    pub contributed: Wei,
    /// Nominated but not yet cleared
    pub has_pending_vote: bool,
    /// Distinct votes received while pending; frozen once registered
    pub vote_count: u64,
}

impl AirlineRecord {
    /// Registered and funded: allowed to sponsor and to vote.
    pub fn is_eligible(&self) -> bool {
        self.is_registered && self.is_funded
    }

    pub fn status(&self) -> RegistrationStatus {
        if self.is_registered {
            RegistrationStatus::Registered
        } else if self.has_pending_vote {
            RegistrationStatus::PendingVote
        } else {
            RegistrationStatus::Unknown
        }
    }

    /// Direct registration. Funding fields are left as they are.
    pub(crate) fn register_direct(&mut self, name: &str) {
        self.name = name.to_string();
        self.is_registered = true;
        self.has_pending_vote = false;
        self.vote_count = 0;
    }

    /// Votes cleared the threshold; `vote_count` freezes here.
    pub(crate) fn finalize_vote(&mut self) {
        self.is_registered = true;
        self.has_pending_vote = false;
    }

    /// Open for voting with a fresh tally.
    pub(crate) fn nominate(&mut self, name: &str) {
        self.name = name.to_string();
        self.has_pending_vote = true;
        self.vote_count = 0;
    }

    /// Whether `contributed` currently clears `min_funding`.
    pub fn meets_funding(&self, min_funding: Wei) -> bool {
        self.contributed >= min_funding
    }
}
