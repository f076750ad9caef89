//! HTTP REST API routes

mod character_routes;
mod health_routes;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health_routes::health_check))
        .route(
            "/api/character",
            get(character_routes::get_character).post(character_routes::update_character),
        )
}

/// Routes plus CORS and request tracing, bound to `state`
pub fn create_app(state: Arc<AppState>) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.config.cors_allowed_origin)
        .context("CORS_ALLOWED_ORIGIN is not a valid header value")?;

    Ok(create_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::ports::outbound::CharacterRepositoryPort;
    use crate::application::services::CharacterSheetServiceImpl;
    use crate::infrastructure::config::{AppConfig, CharacterStoreBackend, CharacterStoreConfig};
    use crate::infrastructure::persistence::InMemoryCharacterRepository;

    fn test_config() -> AppConfig {
        AppConfig {
            server_port: 0,
            store: CharacterStoreConfig {
                backend: CharacterStoreBackend::Memory,
                sqlite_path: String::new(),
            },
            cors_allowed_origin: "http://localhost:5173".to_string(),
            welcome_message: "Welcome to the tavern".to_string(),
        }
    }

    async fn app() -> Router {
        let repository: Arc<dyn CharacterRepositoryPort> = Arc::new(InMemoryCharacterRepository::new());
        let state = AppState::with_repository(test_config(), repository)
            .await
            .unwrap();
        create_app(Arc::new(state)).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_character(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/character")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    fn update_payload() -> Value {
        json!({
            "name": "Vex",
            "class": "Rogue",
            "race": "Halfling",
            "alignment": "Neutral",
            "level": 5,
            "hitPoints": { "current": 50, "max": 50 },
            "abilityScores": {
                "strength": 8, "dexterity": 18, "constitution": 12,
                "intelligence": 10, "wisdom": 9, "charisma": 14
            },
            "skillProficiencies": ["Stealth", "Sleight of Hand", "Juggling"],
            "savingThrowProficiencies": ["dexterity", "intelligence"]
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "status": "ok", "message": "Welcome to the tavern" }));
    }

    #[tokio::test]
    async fn test_get_character_returns_seeded_sheet() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/api/character").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["proficiencyBonus"], 3);
        assert_eq!(body["hitPoints"], json!({ "current": 24, "max": 24 }));
        assert_eq!(body["armorClass"], 15);
        assert_eq!(body["initiative"], 5);
        assert_eq!(
            body["savingThrows"],
            json!({
                "strength": 1, "dexterity": 8, "constitution": 2,
                "intelligence": 3, "wisdom": 6, "charisma": 2
            })
        );
        assert_eq!(body["skills"]["Athletics"], 1);
        assert_eq!(body["skillMap"].as_object().unwrap().len(), 17);
    }

    #[tokio::test]
    async fn test_update_character_returns_new_sheet() {
        let app = app().await;
        let response = app
            .clone()
            .oneshot(post_character(update_payload().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["name"], "Vex");
        assert_eq!(body["proficiencyBonus"], 3);
        // 8 + 1 * 5
        assert_eq!(body["hitPoints"], json!({ "current": 13, "max": 13 }));
        assert_eq!(body["skills"]["Stealth"], 7);
        assert_eq!(body["skills"]["Acrobatics"], 4);
        assert_eq!(body["savingThrows"]["intelligence"], 3);
        assert_eq!(body["savingThrows"]["wisdom"], -1);
        assert_eq!(body["skills"].as_object().unwrap().len(), 17);

        let response = app
            .oneshot(Request::builder().uri("/api/character").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let reread = json_body(response).await;
        assert_eq!(reread, body);
    }

    #[tokio::test]
    async fn test_null_proficiency_lists_are_accepted() {
        let mut payload = update_payload();
        payload["skillProficiencies"] = Value::Null;
        payload["savingThrowProficiencies"] = Value::Null;

        let response = app()
            .await
            .oneshot(post_character(payload.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["skillProficiencies"], json!([]));
        assert_eq!(body["savingThrowProficiencies"], json!([]));
        assert_eq!(body["skills"]["Stealth"], 4);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = app()
            .await
            .oneshot(post_character("{ not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let mut payload = update_payload();
        payload.as_object_mut().unwrap().remove("abilityScores");

        let response = app()
            .await
            .oneshot(post_character(payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_level_is_bad_request() {
        let mut payload = update_payload();
        payload["level"] = json!(0);

        let response = app()
            .await
            .oneshot(post_character(payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_character_is_server_error() {
        let state = AppState {
            config: test_config(),
            character_service: CharacterSheetServiceImpl::new(Arc::new(
                InMemoryCharacterRepository::new(),
            )),
        };
        let response = create_app(Arc::new(state))
            .unwrap()
            .oneshot(Request::builder().uri("/api/character").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/character")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/character")
            .body(Body::empty())
            .unwrap();

        let response = app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
