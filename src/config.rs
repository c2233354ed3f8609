use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStrategyKind {
    Local,
    Remote,
}

impl ReplyStrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl std::str::FromStr for ReplyStrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => anyhow::bail!("REPLY_STRATEGY must be 'local' or 'remote', got '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    pub mood_log_path: PathBuf,

    pub reply_strategy: ReplyStrategyKind,
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub openrouter_base_url: String,

    pub chat_session_ttl_secs: u64,
    pub chat_rate_limit_max: u32,
    pub chat_rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            mood_log_path: env::var("MOOD_LOG_PATH")
                .unwrap_or_else(|_| "mood_log.csv".into())
                .into(),

            reply_strategy: env::var("REPLY_STRATEGY")
                .unwrap_or_else(|_| "local".into())
                .parse()?,
            openrouter_api_key: env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            openrouter_model: env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| "mistralai/mixtral-8x7b".into()),
            openrouter_base_url: env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".into()),

            chat_session_ttl_secs: env::var("CHAT_SESSION_TTL_SECS")
                .unwrap_or_else(|_| "7200".into()) // 2 hours
                .parse()
                .unwrap_or(7200),
            chat_rate_limit_max: env::var("CHAT_RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "20".into())
                .parse()
                .unwrap_or(20),
            chat_rate_limit_window_secs: env::var("CHAT_RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .unwrap_or(60),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.reply_strategy == ReplyStrategyKind::Remote && self.openrouter_api_key.is_empty() {
            anyhow::bail!("OPENROUTER_API_KEY must be set when REPLY_STRATEGY=remote");
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl Config {
    /// Local-strategy config writing the mood log to `mood_log_path`.
    pub fn for_tests(mood_log_path: PathBuf) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
            mood_log_path,
            reply_strategy: ReplyStrategyKind::Local,
            openrouter_api_key: String::new(),
            openrouter_model: "mistralai/mixtral-8x7b".into(),
            openrouter_base_url: "http://127.0.0.1:9".into(),
            chat_session_ttl_secs: 7200,
            chat_rate_limit_max: 20,
            chat_rate_limit_window_secs: 60,
        }
    }
}
