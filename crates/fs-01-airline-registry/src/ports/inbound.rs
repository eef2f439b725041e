//! Driving ports (Inbound API)

use crate::domain::{AirlineRecord, RegistrationOutcome, RegistryResult, VoteOutcome};
use shared_types::{Address, Wei};

/// Primary Airline Registry API
///
/// Every mutating operation applies fully or fails with the ledger unchanged.
/// Read accessors never fail and stay available while operations are halted.
pub trait AirlineRegistryApi: Send + Sync {
    // === Ledger ===

    fn get_owner(&self) -> Address;

    fn is_operational(&self) -> bool;

    /// Owner only. Allowed while halted.
    fn set_operating_status(&self, value: bool, caller: Address) -> RegistryResult<()>;

    fn is_testing_mode(&self) -> bool;

    /// Owner only, requires operations enabled.
    fn set_testing_mode(&self, value: bool, caller: Address) -> RegistryResult<()>;

    // === Funding ===

    /// Credit `amount` to the caller; returns the caller's funded status.
    fn fund(&self, amount: Wei, caller: Address) -> RegistryResult<bool>;

    fn is_airline_funded(&self, airline: Address) -> bool;

    // === Registry ===

    /// Caller must be registered and funded.
    fn register_airline(
        &self,
        name: &str,
        airline: Address,
        caller: Address,
    ) -> RegistryResult<RegistrationOutcome>;

    fn is_airline(&self, airline: Address) -> bool;

    /// Zero-value record for unknown identities.
    fn get_airline(&self, airline: Address) -> AirlineRecord;

    fn registered_airline_count(&self) -> usize;

    // === Consensus ===

    /// Caller must be registered and funded; the airline must be pending.
    fn vote_to_register_airline(
        &self,
        name: &str,
        airline: Address,
        caller: Address,
    ) -> RegistryResult<VoteOutcome>;

    fn has_voted(&self, airline: Address, voter: Address) -> bool;

    /// Votes a pending airline needs at the current registered count.
    fn required_votes(&self) -> u64;

    // === Persistence ===

    fn snapshot(&self) -> RegistryResult<Vec<u8>>;
}

