//! Airline registry state machine
//!
//! Direct registration while the registered count is below the bootstrap
//! quorum, nomination for voting once it is reached. Re-registering an
//! already registered or already pending airline is a successful no-op.

use super::{LedgerState, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use shared_types::Address;

/// What a `register_airline` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    /// Candidate registered directly by the sponsor
    Registered { registered_count: usize },
    /// Candidate opened for voting
    Nominated { registered_count: usize },
    /// Candidate was already registered; nothing changed
    AlreadyRegistered,
    /// Candidate was already pending a vote; nothing changed
    AlreadyPending,
}

impl RegistrationOutcome {
    /// Whether the call changed any state.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::AlreadyRegistered | Self::AlreadyPending)
    }
}

impl LedgerState {
    /// Sponsor `candidate` for membership.
    pub fn register_airline(
        &mut self,
        name: &str,
        candidate: Address,
        caller: &Address,
        threshold_size: usize,
    ) -> RegistryResult<RegistrationOutcome> {
        self.require_operational()?;
        if !self.airline(caller).is_eligible() {
            return Err(RegistryError::SponsorNotEligible(*caller));
        }

        let existing = self.airline(&candidate);
        if existing.is_registered {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let registered_count = self.registered_count();
        if registered_count < threshold_size {
            self.record_mut(candidate).register_direct(name);
            return Ok(RegistrationOutcome::Registered {
                registered_count: registered_count + 1,
            });
        }

        if existing.has_pending_vote {
            return Ok(RegistrationOutcome::AlreadyPending);
        }

        self.record_mut(candidate).nominate(name);
        self.tally.open(candidate);
        Ok(RegistrationOutcome::Nominated { registered_count })
    }

    /// Read-only.
    pub fn is_airline(&self, address: &Address) -> bool {
        self.airlines
            .get(address)
            .map(|r| r.is_registered)
            .unwrap_or(false)
    }
}
