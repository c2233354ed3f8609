use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::mood::SentimentFeedback;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the mood log. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub mood: String,
    pub sentiment: f64,
}

/// A single point of the mood-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub sentiment: f64,
}

impl From<&MoodLogEntry> for TrendPoint {
    fn from(entry: &MoodLogEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            sentiment: entry.sentiment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogMoodResponse {
    pub entry: MoodLogEntry,
    pub feedback: SentimentFeedback,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub points: Vec<TrendPoint>,
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
