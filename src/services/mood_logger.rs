use chrono::{Local, Timelike};

use crate::error::{AppError, AppResult};
use crate::models::mood_log::{MoodLogEntry, TrendPoint};
use crate::sentiment::SentimentAnalyzer;
use crate::store::mood_log::MoodLog;

/// Scores mood check-ins and records them in the mood log.
#[derive(Debug)]
pub struct MoodLogger {
    analyzer: SentimentAnalyzer,
    log: MoodLog,
}

impl MoodLogger {
    pub fn new(analyzer: SentimentAnalyzer, log: MoodLog) -> Self {
        Self { analyzer, log }
    }

    pub fn log(&self) -> &MoodLog {
        &self.log
    }

    /// Scores `mood_text` and appends it to the log with the current local
    /// time. The text is stored exactly as entered.
    pub fn log_mood(&self, mood_text: &str) -> AppResult<MoodLogEntry> {
        if mood_text.trim().is_empty() {
            return Err(AppError::Validation("Please tell me how you're feeling.".into()));
        }

        let sentiment = self.analyzer.compound(mood_text);
        let now = Local::now().naive_local();
        let entry = MoodLogEntry {
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            mood: mood_text.to_string(),
            sentiment,
        };

        self.log.append(&entry)?;
        Ok(entry)
    }

    pub fn entries(&self) -> AppResult<Option<Vec<MoodLogEntry>>> {
        self.log.entries()
    }

    pub fn trend(&self) -> AppResult<Option<Vec<TrendPoint>>> {
        self.log.trend()
    }
}
