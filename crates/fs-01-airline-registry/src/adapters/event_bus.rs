//! Event Bus adapter
//!
//! Implements the EventBus port by recording envelopes in memory

use crate::events::{EventEnvelope, RegistryEvent};
use crate::ports::EventBus;
use parking_lot::RwLock;

/// In-memory event bus adapter for testing and embedding
pub struct InMemoryEventBus {
    events: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Recorded envelopes, ordered by sequence rather than arrival.
    pub fn get_events(&self) -> Vec<EventEnvelope> {
        let mut events = self.events.read().clone();
        events.sort_by_key(|e| e.sequence);
        events
    }

    /// Payloads only, ordered by sequence.
    pub fn payloads(&self) -> Vec<RegistryEvent> {
        self.get_events().into_iter().map(|e| e.event).collect()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for InMemoryEventBus {
    fn publish(&self, envelope: EventEnvelope) -> Result<(), String> {
        self.events.write().push(envelope);
        Ok(())
    }
}

/// Event bus that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventBus;

impl EventBus for NoopEventBus {
    fn publish(&self, _envelope: EventEnvelope) -> Result<(), String> {
        Ok(())
    }
}
