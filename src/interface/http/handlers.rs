use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::store::RuntimeConfig;
use crate::application::TelemetryService;

/// Custom error type that implements IntoResponse
#[derive(Debug)]
pub struct AppError(String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0).into_response()
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AppError(err.to_string())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TelemetryService>,
    pub config: Arc<RuntimeConfig>,
}

/// Handler for GET /health
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "telemon"
        })),
    )
}

/// Handler for GET /telemetry
///
/// A disabled service still answers 200 with the error-shaped document;
/// only a sampling failure is a server error.
pub async fn telemetry_handler(State(state): State<AppState>) -> Response {
    match state.service.query().await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Handler for GET /config/enable
pub async fn get_enable_handler(State(state): State<AppState>) -> String {
    state.config.read_enable_text()
}

/// Handler for PUT /config/enable
pub async fn put_enable_handler(State(state): State<AppState>, body: String) -> Response {
    match state.config.write_enable_text(&body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

/// Handler for GET /config/log_interval
pub async fn get_interval_handler(State(state): State<AppState>) -> String {
    state.config.read_interval_text()
}

/// Handler for PUT /config/log_interval
pub async fn put_interval_handler(State(state): State<AppState>, body: String) -> Response {
    match state.config.write_interval_text(&body) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}
