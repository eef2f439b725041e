//! # Core Entities
//!
//! Account identity and funding amount primitives.
//!
//! ## Type Decisions
//!
//! - `Address` is a 20-byte Ethereum-style identifier. Airlines, voters and
//!   the ledger owner all share this one identity space.
//! - Funding amounts are `U256` denominated in wei so contributions never
//!   lose precision.

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The all-zero address. Never a valid owner.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// An amount in wei.
pub type Wei = U256;

/// Number of wei in one ether (10^18).
pub const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

/// Convert whole ether into wei.
pub fn ether(amount: u64) -> Wei {
    U256::from(amount) * U256::from(WEI_PER_ETHER)
}

/// `0x`-prefixed lowercase hex rendering of an address, for logs and errors.
pub fn address_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}
