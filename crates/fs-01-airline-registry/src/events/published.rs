//! Published events (Outgoing)
//!
//! One event per committed state change. Idempotent no-op calls and failed
//! calls publish nothing.

use crate::domain::RegistrationPath;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Wei};
use uuid::Uuid;

/// Notification of a committed ledger change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    OperatingStatusChanged {
        operational: bool,
        changed_by: Address,
    },
    TestingModeChanged {
        testing_mode: bool,
        changed_by: Address,
    },
    AirlineFunded {
        airline: Address,
        amount: Wei,
        contributed: Wei,
        is_funded: bool,
    },
    /// Candidate opened for voting
    AirlineNominated {
        airline: Address,
        name: String,
        sponsor: Address,
    },
    VoteCast {
        airline: Address,
        voter: Address,
        vote_count: u64,
        required_votes: u64,
    },
    AirlineRegistered {
        airline: Address,
        name: String,
        via: RegistrationPath,
        registered_count: usize,
    },
}

impl RegistryEvent {
    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OperatingStatusChanged { .. } => "operating_status_changed",
            Self::TestingModeChanged { .. } => "testing_mode_changed",
            Self::AirlineFunded { .. } => "airline_funded",
            Self::AirlineNominated { .. } => "airline_nominated",
            Self::VoteCast { .. } => "vote_cast",
            Self::AirlineRegistered { .. } => "airline_registered",
        }
    }
}

/// Event plus its position in the ledger's total order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: Uuid,
    /// Strictly increasing across the ledger's lifetime
    pub sequence: u64,
    pub event: RegistryEvent,
}

impl EventEnvelope {
    pub fn new(sequence: u64, event: RegistryEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            sequence,
            event,
        }
    }
}
