//! Registry configuration
//!
//! Governance constants: minimum funding, bootstrap quorum size and the
//! consensus percentage applied to voted registrations.

use super::{RegistryError, RegistryResult};
use shared_types::{ether, Wei, U256};
use std::env;

/// Default minimum funding: 10 ether.
pub const DEFAULT_MIN_FUNDING_ETHER: u64 = 10;

/// Default bootstrap quorum. Direct registration is allowed while fewer
/// than this many airlines are registered.
pub const DEFAULT_CONSENSUS_THRESHOLD_SIZE: usize = 4;

/// Default share of registered airlines that must vote for a candidate.
pub const DEFAULT_CONSENSUS_PERCENT: u8 = 50;

/// Airline registry configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Cumulative contribution required before an airline counts as funded
    pub min_funding: Wei,
    /// Direct-registration ceiling on the registered-airline count
    pub registration_consensus_threshold_size: usize,
    /// Percentage of registered airlines whose votes clear a candidate
    pub consensus_percent: u8,
    /// Display name of the airline registered for the owner at creation
    pub first_airline_name: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_funding: ether(DEFAULT_MIN_FUNDING_ETHER),
            registration_consensus_threshold_size: DEFAULT_CONSENSUS_THRESHOLD_SIZE,
            consensus_percent: DEFAULT_CONSENSUS_PERCENT,
            first_airline_name: "First Airline".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FS_MIN_FUNDING_WEI`: Minimum funding in wei, decimal (default: 10 ether)
    /// - `FS_CONSENSUS_THRESHOLD_SIZE`: Bootstrap quorum (default: 4)
    /// - `FS_CONSENSUS_PERCENT`: Vote share required (default: 50)
    /// - `FS_FIRST_AIRLINE_NAME`: Owner's airline name (default: First Airline)
    ///
    /// Absent or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            min_funding: env::var("FS_MIN_FUNDING_WEI")
                .ok()
                .and_then(|v| U256::from_dec_str(v.trim()).ok())
                .unwrap_or(defaults.min_funding),

            registration_consensus_threshold_size: env::var("FS_CONSENSUS_THRESHOLD_SIZE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.registration_consensus_threshold_size),

            consensus_percent: env::var("FS_CONSENSUS_PERCENT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.consensus_percent),

            first_airline_name: env::var("FS_FIRST_AIRLINE_NAME")
                .unwrap_or(defaults.first_airline_name),
        }
    }

    /// Builder method to set the minimum funding amount.
    pub fn with_min_funding(mut self, min_funding: Wei) -> Self {
        self.min_funding = min_funding;
        self
    }

    /// Builder method to set the bootstrap quorum size.
    pub fn with_threshold_size(mut self, size: usize) -> Self {
        self.registration_consensus_threshold_size = size;
        self
    }

    /// Reject configurations the governance rules cannot work with.
    pub fn validate(&self) -> RegistryResult<()> {
        if self.min_funding.is_zero() {
            return Err(RegistryError::InvalidConfig(
                "min_funding must be greater than zero".to_string(),
            ));
        }
        if self.consensus_percent == 0 || self.consensus_percent > 100 {
            return Err(RegistryError::InvalidConfig(format!(
                "consensus_percent must be within 1..=100, got {}",
                self.consensus_percent
            )));
        }
        Ok(())
    }
}
