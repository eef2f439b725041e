//! Airline Registry Service - transactional entry points
//!
//! # Architecture
//! - One `LedgerState` behind a single write lock: calls apply in one total order
//! - Domain operations validate every precondition before the first write,
//!   so a failed call leaves the ledger untouched
//! - Events are sequenced under the lock and published after it is released

use crate::domain::{
    invariants, required_votes, AirlineRecord, FundingReceipt, LedgerState, RegistrationOutcome,
    RegistrationPath, RegistryConfig, RegistryError, RegistryResult, VoteOutcome,
};
use crate::events::{EventEnvelope, RegistryEvent};
use crate::ports::{AirlineRegistryApi, EventBus};
use parking_lot::RwLock;
use shared_types::{address_hex, Address, Wei, ZERO_ADDRESS};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

/// Airline Registry Service
pub struct AirlineRegistryService<E: EventBus> {
    event_bus: Arc<E>,
    state: RwLock<LedgerState>,
    config: RegistryConfig,
}

impl<E: EventBus> AirlineRegistryService<E> {
    /// Create the ledger: `owner` is fixed, operations are enabled and the
    /// owner is registered (unfunded) as the first airline.
    pub fn new(owner: Address, config: RegistryConfig, event_bus: Arc<E>) -> RegistryResult<Self> {
        config.validate()?;
        if owner == ZERO_ADDRESS {
            return Err(RegistryError::InvalidConfig(
                "owner must not be the zero address".to_string(),
            ));
        }

        let state = LedgerState::with_first_airline(owner, &config.first_airline_name);
        info!(
            owner = %address_hex(&owner),
            min_funding = %config.min_funding,
            threshold_size = config.registration_consensus_threshold_size,
            "Airline registry created"
        );

        Ok(Self {
            event_bus,
            state: RwLock::new(state),
            config,
        })
    }

    /// Rebuild a service from [`AirlineRegistryApi::snapshot`] bytes.
    ///
    /// `config` governs calls from here on. Funded flags in the snapshot
    /// stand even if `min_funding` has since been raised.
    pub fn restore(
        bytes: &[u8],
        config: RegistryConfig,
        event_bus: Arc<E>,
    ) -> RegistryResult<Self> {
        config.validate()?;
        let state = LedgerState::from_snapshot_bytes(bytes)?;
        if state.owner() == ZERO_ADDRESS {
            return Err(RegistryError::Snapshot(
                "snapshot owner is the zero address".to_string(),
            ));
        }
        invariants::check_state(&state)
            .map_err(|violation| RegistryError::Snapshot(violation.0))?;
        info!(
            owner = %address_hex(&state.owner()),
            airlines = state.airlines().count(),
            registered = state.registered_count(),
            "Airline registry restored from snapshot"
        );

        Ok(Self {
            event_bus,
            state: RwLock::new(state),
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Copy of the full ledger state.
    pub fn state(&self) -> LedgerState {
        self.state.read().clone()
    }

    /// Like [`AirlineRegistryApi::fund`], returning the full receipt.
    pub fn fund_with_receipt(&self, amount: Wei, caller: Address) -> RegistryResult<FundingReceipt> {
        let _span = info_span!("fund", airline = %address_hex(&caller)).entered();
        let min_funding = self.config.min_funding;

        let receipt = self.commit(|state| {
            let receipt = state.fund(caller, amount, min_funding)?;
            let event = RegistryEvent::AirlineFunded {
                airline: caller,
                amount,
                contributed: receipt.contributed,
                is_funded: receipt.is_funded,
            };
            Ok((receipt, vec![event]))
        })?;

        if receipt.newly_funded {
            info!(
                airline = %address_hex(&caller),
                contributed = %receipt.contributed,
                "Airline funded"
            );
        } else {
            debug!(
                airline = %address_hex(&caller),
                amount = %amount,
                contributed = %receipt.contributed,
                "Contribution recorded"
            );
        }
        Ok(receipt)
    }

    // === INTERNALS ===

    /// Apply `op` under the write lock, sequence its events, then publish.
    fn commit<T>(
        &self,
        op: impl FnOnce(&mut LedgerState) -> RegistryResult<(T, Vec<RegistryEvent>)>,
    ) -> RegistryResult<T> {
        let envelopes;
        let value;
        {
            let mut state = self.state.write();
            let before = cfg!(debug_assertions).then(|| state.clone());

            let (result, events) = match op(&mut *state) {
                Ok(applied) => applied,
                Err(e) => {
                    warn!(error = %e, "Ledger call rejected");
                    return Err(e);
                }
            };

            if let Some(before) = &before {
                let checked = invariants::check_transition(before, &state, self.config.min_funding);
                debug_assert!(checked.is_ok(), "ledger invariant violated: {:?}", checked);
            }

            envelopes = events
                .into_iter()
                .map(|event| EventEnvelope::new(state.next_event_sequence(), event))
                .collect::<Vec<_>>();
            value = result;
        }

        for envelope in envelopes {
            let kind = envelope.event.kind();
            let sequence = envelope.sequence;
            if let Err(e) = self.event_bus.publish(envelope) {
                warn!(event = kind, sequence, error = %e, "Failed to publish registry event");
            }
        }

        Ok(value)
    }
}

impl<E: EventBus> AirlineRegistryApi for AirlineRegistryService<E> {
    fn get_owner(&self) -> Address {
        self.state.read().owner()
    }

    fn is_operational(&self) -> bool {
        self.state.read().is_operational()
    }

    fn set_operating_status(&self, value: bool, caller: Address) -> RegistryResult<()> {
        let _span = info_span!("set_operating_status", value).entered();

        let changed = self.commit(|state| {
            let changed = state.set_operating_status(value, &caller)?;
            let events = if changed {
                vec![RegistryEvent::OperatingStatusChanged {
                    operational: value,
                    changed_by: caller,
                }]
            } else {
                Vec::new()
            };
            Ok((changed, events))
        })?;

        if changed {
            info!(operational = value, "Operating status changed");
        } else {
            debug!(operational = value, "Operating status unchanged");
        }
        Ok(())
    }

    fn is_testing_mode(&self) -> bool {
        self.state.read().is_testing_mode()
    }

    fn set_testing_mode(&self, value: bool, caller: Address) -> RegistryResult<()> {
        let _span = info_span!("set_testing_mode", value).entered();

        let changed = self.commit(|state| {
            let changed = state.set_testing_mode(value, &caller)?;
            let events = if changed {
                vec![RegistryEvent::TestingModeChanged {
                    testing_mode: value,
                    changed_by: caller,
                }]
            } else {
                Vec::new()
            };
            Ok((changed, events))
        })?;

        if changed {
            info!(testing_mode = value, "Testing mode changed");
        }
        Ok(())
    }

    fn fund(&self, amount: Wei, caller: Address) -> RegistryResult<bool> {
        self.fund_with_receipt(amount, caller).map(|receipt| receipt.is_funded)
    }

    fn is_airline_funded(&self, airline: Address) -> bool {
        self.state.read().is_airline_funded(&airline)
    }

    fn register_airline(
        &self,
        name: &str,
        airline: Address,
        caller: Address,
    ) -> RegistryResult<RegistrationOutcome> {
        let _span = info_span!(
            "register_airline",
            airline = %address_hex(&airline),
            sponsor = %address_hex(&caller)
        )
        .entered();
        let threshold_size = self.config.registration_consensus_threshold_size;

        let outcome = self.commit(|state| {
            let outcome = state.register_airline(name, airline, &caller, threshold_size)?;
            let events = match outcome {
                RegistrationOutcome::Registered { registered_count } => {
                    vec![RegistryEvent::AirlineRegistered {
                        airline,
                        name: name.to_string(),
                        via: RegistrationPath::Direct,
                        registered_count,
                    }]
                }
                RegistrationOutcome::Nominated { .. } => vec![RegistryEvent::AirlineNominated {
                    airline,
                    name: name.to_string(),
                    sponsor: caller,
                }],
                RegistrationOutcome::AlreadyRegistered | RegistrationOutcome::AlreadyPending => {
                    Vec::new()
                }
            };
            Ok((outcome, events))
        })?;

        match outcome {
            RegistrationOutcome::Registered { registered_count } => {
                info!(name, registered_count, "Airline registered directly");
            }
            RegistrationOutcome::Nominated { registered_count } => {
                info!(name, registered_count, "Airline nominated for voting");
            }
            RegistrationOutcome::AlreadyRegistered | RegistrationOutcome::AlreadyPending => {
                debug!(?outcome, "Registration was a no-op");
            }
        }
        Ok(outcome)
    }

    fn is_airline(&self, airline: Address) -> bool {
        self.state.read().is_airline(&airline)
    }

    fn get_airline(&self, airline: Address) -> AirlineRecord {
        self.state.read().airline(&airline)
    }

    fn registered_airline_count(&self) -> usize {
        self.state.read().registered_count()
    }

    fn vote_to_register_airline(
        &self,
        name: &str,
        airline: Address,
        caller: Address,
    ) -> RegistryResult<VoteOutcome> {
        let _span = info_span!(
            "vote_to_register_airline",
            airline = %address_hex(&airline),
            voter = %address_hex(&caller)
        )
        .entered();
        let consensus_percent = self.config.consensus_percent;

        let outcome = self.commit(|state| {
            let outcome =
                state.vote_to_register_airline(name, airline, &caller, consensus_percent)?;
            let mut events = vec![RegistryEvent::VoteCast {
                airline,
                voter: caller,
                vote_count: outcome.vote_count,
                required_votes: outcome.required_votes,
            }];
            if outcome.registered {
                events.push(RegistryEvent::AirlineRegistered {
                    airline,
                    name: state.airline(&airline).name,
                    via: RegistrationPath::Consensus,
                    registered_count: outcome.registered_count + 1,
                });
            }
            Ok((outcome, events))
        })?;

        info!(
            votes = outcome.vote_count,
            required = outcome.required_votes,
            registered_count = outcome.registered_count,
            "Vote recorded"
        );
        if outcome.registered {
            info!(votes = outcome.vote_count, "Airline registered by consensus");
        }
        Ok(outcome)
    }

    fn has_voted(&self, airline: Address, voter: Address) -> bool {
        self.state.read().has_voted(&airline, &voter)
    }

    fn required_votes(&self) -> u64 {
        let registered = self.state.read().registered_count();
        required_votes(registered, self.config.consensus_percent)
    }

    fn snapshot(&self) -> RegistryResult<Vec<u8>> {
        self.state.read().to_snapshot_bytes()
    }
}
