//! # Domain Invariants
//!
//! Pure checks over ledger states. The service asserts them in debug builds
//! after every committed mutation; tests call them directly.
//!
//! | Check | Invariant |
//! |-------|-----------|
//! | `check_registration_monotonic` | `is_registered` never goes true -> false |
//! | `check_funding_monotonic` | `contributed` and `is_funded` never decrease |
//! | `check_vote_bounds` | `vote_count` <= eligible voters, equals the vote set while pending |
//! | `check_funded_flag` | `is_funded` only turns on with `contributed >= min_funding` |
//!
//! `is_funded` is decided when funding is applied and never re-derived, so
//! the funding check only looks at records whose flag flips in a transition.
//! A ledger restored under a higher minimum keeps its funded airlines.

use super::LedgerState;
use shared_types::{address_hex, Wei};

/// A violated invariant, with a description of the offending record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation(pub String);

pub type InvariantResult = Result<(), InvariantViolation>;

pub fn check_registration_monotonic(before: &LedgerState, after: &LedgerState) -> InvariantResult {
    for (address, record) in before.airlines() {
        if record.is_registered && !after.airline(address).is_registered {
            return Err(InvariantViolation(format!(
                "airline {} was deregistered",
                address_hex(address)
            )));
        }
    }
    Ok(())
}

pub fn check_funding_monotonic(before: &LedgerState, after: &LedgerState) -> InvariantResult {
    for (address, record) in before.airlines() {
        let later = after.airline(address);
        if later.contributed < record.contributed {
            return Err(InvariantViolation(format!(
                "contribution of {} decreased",
                address_hex(address)
            )));
        }
        if record.is_funded && !later.is_funded {
            return Err(InvariantViolation(format!(
                "airline {} lost funded status",
                address_hex(address)
            )));
        }
    }
    Ok(())
}

pub fn check_vote_bounds(state: &LedgerState) -> InvariantResult {
    let eligible = state.eligible_count() as u64;
    for (address, record) in state.airlines() {
        if record.vote_count > eligible {
            return Err(InvariantViolation(format!(
                "airline {} has {} votes but only {} eligible voters",
                address_hex(address),
                record.vote_count,
                eligible
            )));
        }
        if record.has_pending_vote && state.tally().vote_count(address) as u64 != record.vote_count
        {
            return Err(InvariantViolation(format!(
                "vote count of {} disagrees with its vote set",
                address_hex(address)
            )));
        }
        if record.has_pending_vote && record.is_registered {
            return Err(InvariantViolation(format!(
                "airline {} is both registered and pending",
                address_hex(address)
            )));
        }
    }
    Ok(())
}

pub fn check_funded_flag(
    before: &LedgerState,
    after: &LedgerState,
    min_funding: Wei,
) -> InvariantResult {
    for (address, record) in after.airlines() {
        let newly_funded = record.is_funded && !before.airline(address).is_funded;
        if newly_funded && !record.meets_funding(min_funding) {
            return Err(InvariantViolation(format!(
                "airline {} was funded below the minimum",
                address_hex(address)
            )));
        }
    }
    Ok(())
}

/// Every single-state check.
pub fn check_state(state: &LedgerState) -> InvariantResult {
    check_vote_bounds(state)
}

/// Every check across one transition.
pub fn check_transition(
    before: &LedgerState,
    after: &LedgerState,
    min_funding: Wei,
) -> InvariantResult {
    check_registration_monotonic(before, after)?;
    check_funding_monotonic(before, after)?;
    check_funded_flag(before, after, min_funding)?;
    check_state(after)
}
