use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod classifier;
mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod rate_limit;
mod responses;
mod sentiment;
mod services;
mod store;
#[cfg(test)]
mod test_support;

use classifier::MoodClassifier;
use config::Config;
use rate_limit::RateLimitState;
use sentiment::SentimentAnalyzer;
use services::mood_logger::MoodLogger;
use services::reply::{build_strategy, ReplyStrategy};
use store::mood_log::MoodLog;
use store::sessions::ChatSessions;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mood_logger: Arc<MoodLogger>,
    pub reply_strategy: Arc<dyn ReplyStrategy>,
    pub sessions: ChatSessions,
    pub rate_limiter: RateLimitState,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Trained once; every classification borrows the same model.
        let classifier = Arc::new(MoodClassifier::train());
        let reply_strategy = build_strategy(&config, classifier)?;

        let mood_logger = MoodLogger::new(
            SentimentAnalyzer,
            MoodLog::new(config.mood_log_path.clone()),
        );
        let rate_limiter = RateLimitState::new(
            config.chat_rate_limit_max,
            config.chat_rate_limit_window_secs,
        );

        Ok(Self {
            config: Arc::new(config),
            mood_logger: Arc::new(mood_logger),
            reply_strategy,
            sessions: ChatSessions::new(),
            rate_limiter,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let chat_routes = Router::new()
        .route("/api/chat", post(handlers::chat::one_shot))
        .route("/api/chat/sessions", post(handlers::chat::create_session))
        .route("/api/chat/sessions/:id", get(handlers::chat::get_session))
        .route(
            "/api/chat/sessions/:id/messages",
            post(handlers::chat::send_message),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_chat,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/info", get(handlers::health::service_info))
        // Mood check-ins
        .route("/api/moods", post(handlers::moods::log_mood))
        .route("/api/moods", get(handlers::moods::list_moods))
        .route("/api/moods/trend", get(handlers::moods::get_trend));

    Router::new()
        .merge(public_routes)
        .merge(chat_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config.frontend_url.parse::<axum::http::HeaderValue>()?];
    // In dev, also allow LAN access (e.g. testing from another device)
    if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
        for o in extra.split(',') {
            if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                origins.push(hv);
            }
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindease_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config)?;

    tracing::info!(
        reply_strategy = state.reply_strategy.name(),
        mood_log = %state.config.mood_log_path.display(),
        "Application state initialized"
    );

    // Purge idle chat sessions and stale rate-limit windows every 5 min
    handlers::chat::spawn_session_cleanup_worker(state.clone());

    let cors = cors_layer(&state.config)?;
    let addr = state.config.listen_addr();
    let app = build_router(state).layer(cors);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    // Client IP is needed for chat rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
