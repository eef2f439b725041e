//! Funding ledger
//!
//! Contributions accumulate per identity. The funded flag is set at the
//! moment a contribution crosses the minimum and never cleared.

use super::{LedgerState, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Wei};

/// Result of a successful `fund` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingReceipt {
    pub airline: Address,
    pub amount: Wei,
    /// Contribution total after this call
    pub contributed: Wei,
    pub is_funded: bool,
    /// This call is the one that crossed the minimum
    pub newly_funded: bool,
}

impl LedgerState {
    /// Credit `amount` to `caller`. Any identity may fund.
    pub fn fund(
        &mut self,
        caller: Address,
        amount: Wei,
        min_funding: Wei,
    ) -> RegistryResult<FundingReceipt> {
        self.require_operational()?;
        if amount.is_zero() {
            return Err(RegistryError::InvalidAmount);
        }

        let current = self.airline(&caller);
        let contributed = current
            .contributed
            .checked_add(amount)
            .ok_or(RegistryError::FundingOverflow(caller))?;
        let newly_funded = !current.is_funded && contributed >= min_funding;

        let record = self.record_mut(caller);
        record.contributed = contributed;
        if newly_funded {
            record.is_funded = true;
        }

        Ok(FundingReceipt {
            airline: caller,
            amount,
            contributed,
            is_funded: record.is_funded,
            newly_funded,
        })
    }

    /// Read-only.
    pub fn is_airline_funded(&self, address: &Address) -> bool {
        self.airlines
            .get(address)
            .map(|r| r.is_funded)
            .unwrap_or(false)
    }
}
