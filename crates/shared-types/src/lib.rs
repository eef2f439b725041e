//! # Shared Types Crate
//!
//! Identity and amount primitives used across the Flight Surety crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: account identities and funding amounts are
//!   defined once here so every crate agrees on their width and encoding.
//! - **Opaque Identity**: an `Address` is only ever compared and hashed;
//!   nothing interprets its bytes.

pub mod entities;

pub use entities::*;
