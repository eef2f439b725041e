//! Adapters layer (Hexagonal Architecture)

mod event_bus;

pub use event_bus::*;
