//! Ports layer (Hexagonal Architecture)
//!
//! - Inbound: the operations the registry exposes to callers
//! - Outbound: where committed state changes are announced

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
