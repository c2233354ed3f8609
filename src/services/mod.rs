pub mod mood_logger;
pub mod openrouter;
pub mod reply;
