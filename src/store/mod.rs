pub mod mood_log;
pub mod sessions;
