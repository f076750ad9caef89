//! Character sheet API routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{CharacterSheetDto, UpdateCharacterRequestDto};
use crate::application::services::{CharacterSheetService, SheetServiceError};
use crate::domain::value_objects::CharacterId;
use crate::infrastructure::persistence::DEFAULT_CHARACTER_ID;
use crate::infrastructure::state::AppState;

fn error_response(e: SheetServiceError) -> (StatusCode, String) {
    match e {
        SheetServiceError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        // A missing record is a store-side problem: the character is expected to exist
        SheetServiceError::NotFound(_) | SheetServiceError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Get the character sheet
pub async fn get_character(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CharacterSheetDto>, (StatusCode, String)> {
    let sheet = state
        .character_service
        .get_sheet(&CharacterId::from(DEFAULT_CHARACTER_ID))
        .await
        .map_err(error_response)?;

    Ok(Json(CharacterSheetDto::from(sheet)))
}

/// Update the character and return the recomputed sheet
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateCharacterRequestDto>, JsonRejection>,
) -> Result<Json<CharacterSheetDto>, (StatusCode, String)> {
    let Json(req) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    let sheet = state
        .character_service
        .update_character(&CharacterId::from(DEFAULT_CHARACTER_ID), req.into())
        .await
        .map_err(error_response)?;

    Ok(Json(CharacterSheetDto::from(sheet)))
}
