//! # Governance Flow Tests for the Airline Registry (fs-01)
//!
//! End-to-end call sequences against the public API.
//!
//! ## Test Categories
//!
//! 1. **Operations and Settings** - initial status, owner-only toggle, halts
//! 2. **Funding** - bootstrap self-funding by the owner
//! 3. **Registration** - direct path, nomination, idempotence
//! 4. **Multi-party Consensus** - threshold, duplicate votes, frozen counts

use fs_01_airline_registry::{
    AirlineRegistryApi, AirlineRegistryService, InMemoryEventBus, RegistrationOutcome,
    RegistrationStatus, RegistryConfig, RegistryError, RegistryEvent,
};
use shared_types::{ether, Address};
use std::sync::Arc;

// =============================================================================
// TEST HELPERS
// =============================================================================

const OWNER: Address = [0x01; 20];

fn account(id: u8) -> Address {
    let mut address = [0xA0; 20];
    address[19] = id;
    address
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn make_registry() -> (AirlineRegistryService<InMemoryEventBus>, Arc<InMemoryEventBus>) {
    init_tracing();
    let bus = Arc::new(InMemoryEventBus::new());
    let registry = AirlineRegistryService::new(OWNER, RegistryConfig::default(), bus.clone())
        .expect("default config is valid");
    (registry, bus)
}

/// Owner funded, airlines 2-4 registered directly (N = 4).
fn make_registry_at_quorum() -> (AirlineRegistryService<InMemoryEventBus>, Arc<InMemoryEventBus>) {
    let (registry, bus) = make_registry();
    registry.fund(ether(10), OWNER).unwrap();
    for id in 2..=4 {
        registry
            .register_airline(&format!("Airline{id}"), account(id), OWNER)
            .unwrap();
    }
    (registry, bus)
}

// =============================================================================
// OPERATIONS AND SETTINGS
// =============================================================================

#[test]
fn test_initial_operating_status_is_true() {
    let (registry, _) = make_registry();
    assert!(registry.is_operational());
}

#[test]
fn test_non_owner_cannot_set_operating_status() {
    let (registry, _) = make_registry();
    assert_eq!(
        registry.set_operating_status(false, account(2)),
        Err(RegistryError::Unauthorized(account(2)))
    );
    assert!(registry.is_operational());
}

#[test]
fn test_owner_can_set_operating_status() {
    let (registry, _) = make_registry();
    assert!(registry.set_operating_status(false, OWNER).is_ok());
    assert!(!registry.is_operational());
}

#[test]
fn test_halt_blocks_mutations_until_resumed() {
    let (registry, _) = make_registry_at_quorum();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();
    registry.set_operating_status(false, OWNER).unwrap();

    assert_eq!(
        registry.set_testing_mode(true, OWNER),
        Err(RegistryError::SystemHalted)
    );
    assert_eq!(
        registry.register_airline("Airline6", account(6), OWNER),
        Err(RegistryError::SystemHalted)
    );
    assert_eq!(
        registry.vote_to_register_airline("Airline5", account(5), OWNER),
        Err(RegistryError::SystemHalted)
    );
    assert_eq!(
        registry.fund(ether(1), account(7)),
        Err(RegistryError::SystemHalted)
    );

    // Reads stay available while halted.
    assert!(registry.is_airline(account(2)));
    assert!(registry.is_airline_funded(OWNER));
    assert_eq!(registry.get_airline(account(5)).status(), RegistrationStatus::PendingVote);

    registry.set_operating_status(true, OWNER).unwrap();
    assert!(registry.set_testing_mode(true, OWNER).is_ok());
    assert!(registry.is_testing_mode());
    assert!(registry
        .vote_to_register_airline("Airline5", account(5), OWNER)
        .is_ok());
}

// =============================================================================
// FUNDING
// =============================================================================

#[test]
fn test_unfunded_airline_cannot_register_another() {
    let (registry, _) = make_registry();
    assert_eq!(
        registry.register_airline("newAirline", account(2), OWNER),
        Err(RegistryError::SponsorNotEligible(OWNER))
    );
    assert!(!registry.is_airline(account(2)));
}

#[test]
fn test_owner_can_fund() {
    let (registry, bus) = make_registry();
    assert_eq!(registry.fund(ether(10), registry.get_owner()), Ok(true));

    let record = registry.get_airline(OWNER);
    assert!(record.is_registered);
    assert!(record.is_funded);
    assert_eq!(record.contributed, ether(10));
    assert_eq!(bus.payloads()[0].kind(), "airline_funded");
}

#[test]
fn test_zero_funding_rejected() {
    let (registry, _) = make_registry();
    assert_eq!(
        registry.fund(ether(0), OWNER),
        Err(RegistryError::InvalidAmount)
    );
    assert_eq!(registry.get_airline(OWNER).contributed, ether(0));
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[test]
fn test_funded_airline_can_register_another() {
    let (registry, _) = make_registry();
    registry.fund(ether(10), OWNER).unwrap();

    let outcome = registry
        .register_airline("newAirline", account(2), OWNER)
        .unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::Registered {
            registered_count: 2
        }
    );
    assert!(registry.is_airline(account(2)));
    assert!(registry.get_airline(account(2)).is_registered);
}

#[test]
fn test_fifth_airline_is_nominated_not_registered() {
    let (registry, bus) = make_registry_at_quorum();
    assert_eq!(registry.registered_airline_count(), 4);

    let outcome = registry
        .register_airline("Airline5", account(5), OWNER)
        .unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::Nominated {
            registered_count: 4
        }
    );

    let record = registry.get_airline(account(5));
    assert!(record.has_pending_vote);
    assert_eq!(record.vote_count, 0);
    assert!(!record.is_registered);
    assert!(!registry.is_airline(account(5)));

    assert!(matches!(
        bus.payloads().last(),
        Some(RegistryEvent::AirlineNominated { sponsor, .. }) if *sponsor == OWNER
    ));
}

#[test]
fn test_reregistering_registered_airline_is_noop() {
    let (registry, bus) = make_registry_at_quorum();
    let before = registry.get_airline(account(2));
    let events_before = bus.event_count();

    let outcome = registry
        .register_airline("Other Name", account(2), OWNER)
        .unwrap();
    assert_eq!(outcome, RegistrationOutcome::AlreadyRegistered);
    assert_eq!(registry.get_airline(account(2)), before);
    assert_eq!(bus.event_count(), events_before);
}

#[test]
fn test_unknown_airline_reads_zero_value() {
    let (registry, _) = make_registry();
    let record = registry.get_airline(account(99));
    assert!(!record.is_registered);
    assert!(!record.is_funded);
    assert!(!record.has_pending_vote);
    assert_eq!(record.vote_count, 0);
    assert_eq!(record.contributed, ether(0));
}

// =============================================================================
// MULTI-PARTY CONSENSUS
// =============================================================================

#[test]
fn test_fifth_airline_requires_half_of_registered_votes() {
    let (registry, _) = make_registry_at_quorum();
    registry.fund(ether(10), account(2)).unwrap();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();

    let first = registry
        .vote_to_register_airline("Airline5", account(5), OWNER)
        .unwrap();
    assert!(!first.registered);
    assert!(!registry.is_airline(account(5)));

    let second = registry
        .vote_to_register_airline("Airline5", account(5), account(2))
        .unwrap();
    assert!(second.registered);

    let record = registry.get_airline(account(5));
    assert!(record.is_registered);
    assert!(!record.has_pending_vote);
    assert_eq!(record.vote_count, 2);
    assert_eq!(registry.registered_airline_count(), 5);

    // Count stays frozen; later votes are rejected.
    registry.fund(ether(10), account(3)).unwrap();
    assert_eq!(
        registry.vote_to_register_airline("Airline5", account(5), account(3)),
        Err(RegistryError::NothingToVoteOn(account(5)))
    );
    assert_eq!(registry.get_airline(account(5)).vote_count, 2);
}

#[test]
fn test_duplicate_vote_rejected() {
    let (registry, _) = make_registry_at_quorum();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();

    registry
        .vote_to_register_airline("Airline5", account(5), OWNER)
        .unwrap();
    assert_eq!(
        registry.vote_to_register_airline("Airline5", account(5), OWNER),
        Err(RegistryError::DuplicateVote {
            candidate: account(5),
            voter: OWNER,
        })
    );
    assert_eq!(registry.get_airline(account(5)).vote_count, 1);
    assert!(registry.has_voted(account(5), OWNER));
}

#[test]
fn test_unfunded_registered_airline_cannot_vote() {
    let (registry, _) = make_registry_at_quorum();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();

    assert_eq!(
        registry.vote_to_register_airline("Airline5", account(5), account(3)),
        Err(RegistryError::VoterNotEligible(account(3)))
    );
    assert!(!registry.has_voted(account(5), account(3)));
}

#[test]
fn test_pending_airline_cannot_sponsor_or_vote() {
    let (registry, _) = make_registry_at_quorum();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();
    registry.register_airline("Airline6", account(6), OWNER).unwrap();
    registry.fund(ether(10), account(5)).unwrap();

    assert_eq!(
        registry.register_airline("Airline7", account(7), account(5)),
        Err(RegistryError::SponsorNotEligible(account(5)))
    );
    assert_eq!(
        registry.vote_to_register_airline("Airline6", account(6), account(5)),
        Err(RegistryError::VoterNotEligible(account(5)))
    );
}

#[test]
fn test_concurrent_votes_register_exactly_once() {
    let (registry, bus) = make_registry_at_quorum();
    for id in 2..=4 {
        registry.fund(ether(10), account(id)).unwrap();
    }
    registry.register_airline("Airline5", account(5), OWNER).unwrap();
    let registry = Arc::new(registry);

    let voters = [OWNER, account(2), account(3), account(4)];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = voters
            .iter()
            .map(|voter| {
                let registry = Arc::clone(&registry);
                let voter = *voter;
                scope.spawn(move || registry.vote_to_register_airline("Airline5", account(5), voter))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // The first two votes in the total order clear the threshold; the rest
    // find nothing left to vote on.
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let registrations = results
        .iter()
        .filter(|r| matches!(r, Ok(outcome) if outcome.registered))
        .count();
    assert_eq!(accepted, 2);
    assert_eq!(registrations, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == RegistryError::NothingToVoteOn(account(5))));

    assert_eq!(registry.get_airline(account(5)).vote_count, 2);
    let registered_events = bus
        .payloads()
        .into_iter()
        .filter(|e| e.kind() == "airline_registered")
        .count();
    // Three direct registrations plus one by consensus.
    assert_eq!(registered_events, 4);
}

#[test]
fn test_snapshot_restores_governance_state() {
    let (registry, _) = make_registry_at_quorum();
    registry.register_airline("Airline5", account(5), OWNER).unwrap();
    registry
        .vote_to_register_airline("Airline5", account(5), OWNER)
        .unwrap();

    let bytes = registry.snapshot().unwrap();
    let restored = AirlineRegistryService::restore(
        &bytes,
        RegistryConfig::default(),
        Arc::new(InMemoryEventBus::new()),
    )
    .unwrap();

    assert_eq!(restored.get_owner(), OWNER);
    assert_eq!(restored.get_airline(account(5)).vote_count, 1);
    assert_eq!(
        restored.vote_to_register_airline("Airline5", account(5), OWNER),
        Err(RegistryError::DuplicateVote {
            candidate: account(5),
            voter: OWNER,
        })
    );
}
