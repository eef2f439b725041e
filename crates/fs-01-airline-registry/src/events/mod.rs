//! Event definitions for the Airline Registry

mod published;

pub use published::*;
