use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::HealthResponseDto;
use crate::infrastructure::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponseDto> {
    Json(HealthResponseDto::ok(state.config.welcome_message.clone()))
}
