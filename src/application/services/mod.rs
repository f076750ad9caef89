//! Application services - Use case implementations
//!
//! Services accept repository ports and return domain entities; the HTTP
//! layer converts those to DTOs.

pub mod character_sheet_service;

pub use character_sheet_service::{
    CharacterSheetService, CharacterSheetServiceImpl, SheetServiceError, UpdateCharacterRequest,
};
