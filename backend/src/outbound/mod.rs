//! Outbound adapters implementing domain ports.
//!
//! The only adapter today keeps users in process memory; a persistent store
//! would sit alongside [`memory`] behind the same port.

pub mod memory;
