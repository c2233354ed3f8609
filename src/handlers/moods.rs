use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::{validate_request, LogMoodRequest};
use crate::error::AppResult;
use crate::models::mood::SentimentFeedback;
use crate::models::mood_log::{LogMoodResponse, MoodLogEntry, TrendResponse};
use crate::AppState;

pub async fn log_mood(
    State(state): State<AppState>,
    Json(body): Json<LogMoodRequest>,
) -> AppResult<(StatusCode, Json<LogMoodResponse>)> {
    validate_request(&body)?;

    let logger = state.mood_logger.clone();
    let entry = tokio::task::spawn_blocking(move || logger.log_mood(&body.mood))
        .await
        .map_err(anyhow::Error::from)??;

    let feedback = SentimentFeedback::from_score(entry.sentiment);
    tracing::info!(sentiment = entry.sentiment, feedback = ?feedback, "Mood logged");

    Ok((
        StatusCode::CREATED,
        Json(LogMoodResponse {
            entry,
            feedback,
            message: feedback.message(),
        }),
    ))
}

/// Entries in write order; empty before the first check-in.
pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodLogEntry>>> {
    let logger = state.mood_logger.clone();
    let entries = tokio::task::spawn_blocking(move || logger.entries())
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(entries.unwrap_or_default()))
}

/// 204 when no log exists yet, so the client skips the chart.
pub async fn get_trend(State(state): State<AppState>) -> AppResult<Response> {
    let logger = state.mood_logger.clone();
    let trend = tokio::task::spawn_blocking(move || logger.trend())
        .await
        .map_err(anyhow::Error::from)??;

    Ok(match trend {
        Some(points) => Json(TrendResponse { points }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use crate::test_support::{send, test_app, test_state};

    #[tokio::test]
    async fn test_positive_check_in_end_to_end() {
        let (state, _dir) = test_state();
        let log_path = state.config.mood_log_path.clone();
        let app = test_app(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/moods",
            Some(json!({ "mood": "I feel amazing today" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["feedback"], "positive");
        assert_eq!(body["message"], "You seem positive today! 😊");
        assert!(body["entry"]["sentiment"].as_f64().unwrap() > 0.05);

        let raw = std::fs::read_to_string(log_path).unwrap();
        let rows: Vec<&str> = raw.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].contains("I feel amazing today"));
    }

    #[tokio::test]
    async fn test_negative_and_neutral_feedback() {
        let (state, _dir) = test_state();
        let app = test_app(state);

        let (_, body) = send(&app, Method::POST, "/api/moods", Some(json!({ "mood": "I feel terrible" }))).await;
        assert_eq!(body["feedback"], "negative");

        let (_, body) = send(&app, Method::POST, "/api/moods", Some(json!({ "mood": "It is Tuesday" }))).await;
        assert_eq!(body["feedback"], "neutral");
        assert_eq!(body["message"], "You're feeling neutral today. Let's talk more!");
    }

    #[tokio::test]
    async fn test_distress_check_in_is_not_neutral() {
        let (state, _dir) = test_state();
        let app = test_app(state);

        let (status, body) = send(&app, Method::POST, "/api/moods", Some(json!({ "mood": "I want to die" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["feedback"], "negative");
        assert!(body["entry"]["sentiment"].as_f64().unwrap() <= -0.05);
    }

    #[tokio::test]
    async fn test_blank_mood_is_rejected_and_not_logged() {
        let (state, _dir) = test_state();
        let log_path = state.config.mood_log_path.clone();
        let app = test_app(state);

        let (status, body) = send(&app, Method::POST, "/api/moods", Some(json!({ "mood": "   " }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], "Please type something.");
        assert!(!log_path.exists());
    }

    #[tokio::test]
    async fn test_trend_absent_before_first_check_in() {
        let (state, _dir) = test_state();
        let app = test_app(state);

        let (status, body) = send(&app, Method::GET, "/api/moods/trend", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&app, Method::GET, "/api/moods", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_trend_is_sorted_even_when_file_is_not() {
        let (state, _dir) = test_state();
        std::fs::write(
            &state.config.mood_log_path,
            "timestamp,mood,sentiment\n\
             2026-02-12 09:00:00,later,0.4\n\
             2026-02-10 09:00:00,earlier,-0.2\n\
             2026-02-11 09:00:00,middle,0.0\n",
        )
        .unwrap();
        let app = test_app(state);

        let (status, body) = send(&app, Method::GET, "/api/moods/trend", None).await;
        assert_eq!(status, StatusCode::OK);
        let points = body["points"].as_array().unwrap();
        let stamps: Vec<&str> = points.iter().map(|p| p["timestamp"].as_str().unwrap()).collect();
        assert_eq!(
            stamps,
            vec!["2026-02-10 09:00:00", "2026-02-11 09:00:00", "2026-02-12 09:00:00"]
        );

        let (_, entries) = send(&app, Method::GET, "/api/moods", None).await;
        assert_eq!(entries[0]["mood"], "later");
    }

    #[tokio::test]
    async fn test_write_failure_is_surfaced() {
        let (state, _dir) = test_state();
        std::fs::create_dir(&state.config.mood_log_path).unwrap();
        let app = test_app(state);

        let (status, body) = send(&app, Method::POST, "/api/moods", Some(json!({ "mood": "fine" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Failed to save or read the mood log");
    }
}
