//! Access control guards
//!
//! Composable preconditions applied at the top of every mutating entry
//! point, before any state is touched.

use super::{LedgerState, RegistryError, RegistryResult};
use shared_types::Address;

impl LedgerState {
    /// Fails with `Unauthorized` unless `caller` is the owner.
    pub fn require_owner(&self, caller: &Address) -> RegistryResult<()> {
        if *caller != self.owner() {
            return Err(RegistryError::Unauthorized(*caller));
        }
        Ok(())
    }

    /// Fails with `SystemHalted` while the operational flag is off.
    pub fn require_operational(&self) -> RegistryResult<()> {
        if !self.operational {
            return Err(RegistryError::SystemHalted);
        }
        Ok(())
    }

    /// Owner-only. Not gated on the operational flag so a halt can be undone.
    ///
    /// Returns whether the flag actually changed.
    pub fn set_operating_status(&mut self, value: bool, caller: &Address) -> RegistryResult<bool> {
        self.require_owner(caller)?;
        let changed = self.operational != value;
        self.operational = value;
        Ok(changed)
    }

    /// Owner-only and operational-gated.
    ///
    /// Returns whether the flag actually changed.
    pub fn set_testing_mode(&mut self, value: bool, caller: &Address) -> RegistryResult<bool> {
        self.require_operational()?;
        self.require_owner(caller)?;
        let changed = self.testing_mode != value;
        self.testing_mode = value;
        Ok(changed)
    }
}
