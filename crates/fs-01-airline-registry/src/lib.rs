//! # fs-01-airline-registry
//!
//! Airline membership governance ledger for Flight Surety.
//!
//! ## Responsibilities
//!
//! - **Operational switch**: the owner can halt every state-changing call;
//!   reads stay available while halted
//! - **Funding**: airlines must contribute the minimum before they may
//!   sponsor or vote
//! - **Registration**: direct while fewer than the bootstrap quorum are
//!   registered, nominate-then-vote afterwards
//! - **Consensus**: a pending airline registers once votes reach 50% of the
//!   registered count, recomputed on every vote
//!
//! ## Registration Flow
//!
//! ```text
//!                 register_airline (N < quorum)
//!   [Unknown] ──────────────────────────────────────→ [Registered]
//!       │                                                  ↑
//!       │ register_airline (N >= quorum)                   │ votes * 2 >= N
//!       ↓                                                  │
//!  [PendingVote] ──── vote_to_register_airline ────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fs_01_airline_registry::{AirlineRegistryApi, AirlineRegistryService, InMemoryEventBus, RegistryConfig};
//! use shared_types::ether;
//!
//! let registry = AirlineRegistryService::new(owner, RegistryConfig::default(), Arc::new(InMemoryEventBus::new()))?;
//! registry.fund(ether(10), owner)?;
//! registry.register_airline("Airline2", airline2, owner)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{InMemoryEventBus, NoopEventBus};
pub use domain::{
    AirlineRecord, FundingReceipt, LedgerState, RegistrationOutcome, RegistrationPath,
    RegistrationStatus, RegistryConfig, RegistryError, RegistryResult, VoteOutcome,
};
pub use events::{EventEnvelope, RegistryEvent};
pub use ports::{AirlineRegistryApi, EventBus};
pub use service::AirlineRegistryService;
