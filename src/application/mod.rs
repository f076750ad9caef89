//! Application layer - Use cases, ports and API data shapes
//!
//! Services orchestrate the store and the domain derivation; DTOs carry the
//! JSON wire format so the domain stays free of serde.

pub mod dto;
pub mod ports;
pub mod services;
