use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::dto::InfoResponse;
use crate::AppState;

pub const DISCLAIMER: &str = "This chatbot is for supportive conversation only and does not replace \
professional mental health care. If you are in crisis or need urgent help, please contact a \
qualified mental health professional or emergency services.";

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mindease-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let logger = state.mood_logger.clone();
    let log_ok = tokio::task::spawn_blocking(move || logger.log().is_writable())
        .await
        .unwrap_or(false);

    if log_ok {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "mood_log": "ok" },
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "checks": { "mood_log": "failed" },
            })),
        )
    }
}

pub async fn service_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "mindease-api",
        version: env!("CARGO_PKG_VERSION"),
        reply_strategy: state.reply_strategy.name(),
        disclaimer: DISCLAIMER,
    })
}
