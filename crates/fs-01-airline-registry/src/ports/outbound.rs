//! Driven ports (Outbound dependencies)

use crate::events::EventEnvelope;

/// Event bus for announcing committed ledger changes
///
/// Called after the change is committed and outside the ledger lock.
/// A failed publish is logged by the caller; the change stands.
/// Concurrent calls may deliver envelopes out of order; consumers that need
/// the ledger's order sort by `EventEnvelope::sequence`.
pub trait EventBus: Send + Sync {
    fn publish(&self, envelope: EventEnvelope) -> Result<(), String>;
}
