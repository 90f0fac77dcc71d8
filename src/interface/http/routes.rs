use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::adapters::store::RuntimeConfig;
use crate::application::TelemetryService;

use super::handlers::{
    get_enable_handler, get_interval_handler, health_handler, put_enable_handler,
    put_interval_handler, telemetry_handler, AppState,
};

pub fn create_router(service: Arc<TelemetryService>, config: Arc<RuntimeConfig>) -> Router {
    let state = AppState { service, config };

    Router::new()
        .route("/health", get(health_handler))
        // Document surface: every read is also a sampling tick
        .route("/telemetry", get(telemetry_handler))
        // Config channel: text scalar attributes
        .route(
            "/config/enable",
            get(get_enable_handler).put(put_enable_handler),
        )
        .route(
            "/config/log_interval",
            get(get_interval_handler).put(put_interval_handler),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
