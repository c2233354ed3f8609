pub mod chat;
pub mod mood;
pub mod mood_log;
