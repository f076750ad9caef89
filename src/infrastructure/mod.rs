//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Persistence: SQLite and in-memory character stores
//! - HTTP: REST API routes
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
