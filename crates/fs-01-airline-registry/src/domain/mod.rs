//! Domain layer for the Airline Registry
//!
//! - ledger: the single governance store
//! - guard: owner and operational preconditions
//! - funding: contribution bookkeeping
//! - registry: direct registration and nomination
//! - tally: vote recording and the consensus threshold
//! - invariants: pure state checks

mod airline;
mod config;
mod error;
mod funding;
mod guard;
pub mod invariants;
mod ledger;
mod registry;
mod tally;

pub use airline::*;
pub use config::*;
pub use error::*;
pub use funding::*;
pub use ledger::*;
pub use registry::*;
pub use tally::*;
