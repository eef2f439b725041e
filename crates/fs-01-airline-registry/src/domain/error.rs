//! Error types for the Airline Registry
//!
//! Every failure is local and synchronous. The ledger is left unchanged
//! whenever one of these is returned.

use shared_types::{address_hex, Address};

/// Airline registry error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Caller {} is not the contract owner", address_hex(.0))]
    Unauthorized(Address),

    #[error("Contract is currently not operational")]
    SystemHalted,

    #[error("Sponsor {} must be a registered and funded airline", address_hex(.0))]
    SponsorNotEligible(Address),

    #[error("Voter {} must be a registered and funded airline", address_hex(.0))]
    VoterNotEligible(Address),

    #[error("Airline {} is not pending a registration vote", address_hex(.0))]
    NothingToVoteOn(Address),

    #[error("Voter {} already voted for airline {}", address_hex(.voter), address_hex(.candidate))]
    DuplicateVote { candidate: Address, voter: Address },

    #[error("Funding amount must be greater than zero")]
    InvalidAmount,

    #[error("Funding for airline {} would overflow", address_hex(.0))]
    FundingOverflow(Address),

    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Unsupported snapshot version: found {found}, supported {supported}")]
    UnsupportedSnapshotVersion { found: u16, supported: u16 },
}

impl RegistryError {
    /// Returns true if the caller lacks the registered+funded standing.
    #[must_use]
    pub fn is_eligibility_failure(&self) -> bool {
        matches!(self, Self::SponsorNotEligible(_) | Self::VoterNotEligible(_))
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
