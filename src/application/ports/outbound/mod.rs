//! Outbound ports - Interfaces that the application requires from external systems

mod character_repository_port;

pub use character_repository_port::{CharacterRepositoryPort, RepositoryError};
