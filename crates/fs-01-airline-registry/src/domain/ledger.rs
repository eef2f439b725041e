//! Ledger state
//!
//! The single store every entry point operates on: owner, operational and
//! testing flags, the airline-record mapping and the per-candidate vote sets.
//! The component modules (`guard`, `funding`, `registry`, `tally`) each add
//! their operations to `LedgerState`.

use super::{AirlineRecord, RegistryError, RegistryResult, VoteTally};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::collections::BTreeMap;

/// Current persisted layout version.
pub const STATE_VERSION: u16 = 1;

/// Process-wide governance state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    owner: Address,
    pub(crate) operational: bool,
    pub(crate) testing_mode: bool,
    pub(crate) airlines: BTreeMap<Address, AirlineRecord>,
    pub(crate) tally: VoteTally,
    /// Last sequence number handed out to a published event
    pub(crate) event_sequence: u64,
}

impl LedgerState {
    /// Fresh ledger: operational, owner fixed, no airlines.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            operational: true,
            testing_mode: false,
            airlines: BTreeMap::new(),
            tally: VoteTally::default(),
            event_sequence: 0,
        }
    }

    /// Fresh ledger with the owner registered as the first airline.
    pub fn with_first_airline(owner: Address, name: &str) -> Self {
        let mut state = Self::new(owner);
        state.record_mut(owner).register_direct(name);
        state
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_operational(&self) -> bool {
        self.operational
    }

    pub fn is_testing_mode(&self) -> bool {
        self.testing_mode
    }

    /// Record for `address`, or the zero-value record for unknown identities.
    pub fn airline(&self, address: &Address) -> AirlineRecord {
        self.airlines.get(address).cloned().unwrap_or_default()
    }

    /// Whether a record has ever been created for `address`.
    pub fn has_record(&self, address: &Address) -> bool {
        self.airlines.contains_key(address)
    }

    /// Get-or-insert-default.
    pub(crate) fn record_mut(&mut self, address: Address) -> &mut AirlineRecord {
        self.airlines.entry(address).or_default()
    }

    /// N: airlines currently registered.
    pub fn registered_count(&self) -> usize {
        self.airlines.values().filter(|r| r.is_registered).count()
    }

    /// Airlines currently registered and funded.
    pub fn eligible_count(&self) -> usize {
        self.airlines.values().filter(|r| r.is_eligible()).count()
    }

    pub fn airlines(&self) -> impl Iterator<Item = (&Address, &AirlineRecord)> {
        self.airlines.iter()
    }

    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub(crate) fn next_event_sequence(&mut self) -> u64 {
        self.event_sequence += 1;
        self.event_sequence
    }

    /// Encode as a versioned snapshot.
    pub fn to_snapshot_bytes(&self) -> RegistryResult<Vec<u8>> {
        let snapshot = LedgerSnapshot {
            version: STATE_VERSION,
            state: self.clone(),
        };
        bincode::serialize(&snapshot).map_err(|e| RegistryError::Snapshot(e.to_string()))
    }

    /// Decode a snapshot produced by [`LedgerState::to_snapshot_bytes`].
    pub fn from_snapshot_bytes(bytes: &[u8]) -> RegistryResult<Self> {
        let snapshot: LedgerSnapshot =
            bincode::deserialize(bytes).map_err(|e| RegistryError::Snapshot(e.to_string()))?;

        if snapshot.version != STATE_VERSION {
            return Err(RegistryError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: STATE_VERSION,
            });
        }

        Ok(snapshot.state)
    }
}

/// Versioned persisted layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: u16,
    pub state: LedgerState,
}
