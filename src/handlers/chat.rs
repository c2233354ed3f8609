use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::{validate_request, ChatMessageRequest, ChatTurnResponse, SessionResponse};
use crate::error::{AppError, AppResult};
use crate::models::chat::{ChatMessage, GeneratedReply};
use crate::services::openrouter::SYSTEM_PROMPT;
use crate::AppState;

fn session_not_found() -> AppError {
    AppError::NotFound("Chat session not found".into())
}

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let seed = vec![ChatMessage::system(SYSTEM_PROMPT)];
    let id = state.sessions.create(seed.clone()).await;
    tracing::debug!(session_id = %id, "Chat session created");

    (StatusCode::CREATED, Json(SessionResponse::new(id, seed)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let history = state
        .sessions
        .history(id)
        .await
        .ok_or_else(session_not_found)?;

    Ok(Json(SessionResponse::new(id, history)))
}

/// Appends the user's turn, generates a reply and appends it. If no reply
/// can be produced only that user turn is removed again, so the message can
/// be retried and concurrent turns on the same session survive.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ChatMessageRequest>,
) -> AppResult<Json<ChatTurnResponse>> {
    validate_request(&body)?;

    let user_turn = ChatMessage::user(body.content);
    let (history, index) = state
        .sessions
        .push(id, user_turn.clone())
        .await
        .ok_or_else(session_not_found)?;

    let reply = match state.reply_strategy.generate_reply(&history).await {
        Ok(reply) => reply,
        Err(e) => {
            state.sessions.retract(id, index, &user_turn).await;
            tracing::warn!(session_id = %id, error = %e, "Reply generation failed, turn rolled back");
            return Err(e);
        }
    };

    let (history, _) = state
        .sessions
        .push(id, ChatMessage::assistant(reply.content.clone()))
        .await
        .ok_or_else(session_not_found)?;

    Ok(Json(ChatTurnResponse {
        reply,
        session: SessionResponse::new(id, history),
    }))
}

/// Single-turn reply without a stored session.
pub async fn one_shot(
    State(state): State<AppState>,
    Json(body): Json<ChatMessageRequest>,
) -> AppResult<Json<GeneratedReply>> {
    validate_request(&body)?;

    let conversation = vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(body.content),
    ];
    let reply = state.reply_strategy.generate_reply(&conversation).await?;

    Ok(Json(reply))
}

/// Purges idle chat sessions and stale rate-limit windows every 5 minutes.
pub fn spawn_session_cleanup_worker(state: AppState) {
    let ttl = Duration::from_secs(state.config.chat_session_ttl_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300)); // 5 min
        loop {
            interval.tick().await;
            let purged = state.sessions.cleanup(ttl).await;
            if purged > 0 {
                let remaining = state.sessions.len().await;
                tracing::info!(purged = purged, remaining = remaining, "Session cleanup: purged idle chat sessions");
            }
            let expired = state.rate_limiter.cleanup().await;
            if expired > 0 {
                tracing::debug!(expired = expired, "Rate limit cleanup");
            }
        }
    });
}
