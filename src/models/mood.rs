use serde::{Deserialize, Serialize};

/// Mood categories the local classifier is trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Sad,
    Happy,
    Angry,
    Anxious,
}

impl MoodCategory {
    #[cfg(test)]
    pub const ALL: [MoodCategory; 4] = [
        MoodCategory::Sad,
        MoodCategory::Happy,
        MoodCategory::Angry,
        MoodCategory::Anxious,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Angry => "angry",
            Self::Anxious => "anxious",
        }
    }

    /// Label as shown to the user ("Sad", "Happy", ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sad => "Sad",
            Self::Happy => "Happy",
            Self::Angry => "Angry",
            Self::Anxious => "Anxious",
        }
    }
}

/// Key into the response table. `Default` is never produced by the
/// classifier; it is only reached when a predicted class cannot be mapped
/// back to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    Mood(MoodCategory),
    Default,
}

impl ReplyCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mood(mood) => mood.display_name(),
            Self::Default => "Default",
        }
    }
}

impl From<MoodCategory> for ReplyCategory {
    fn from(mood: MoodCategory) -> Self {
        Self::Mood(mood)
    }
}

/// Feedback for a mood check-in, derived from the compound sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFeedback {
    Positive,
    Negative,
    Neutral,
}

impl SentimentFeedback {
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Positive => "You seem positive today! 😊",
            Self::Negative => "You sound a bit down. I'm here for you. ❤",
            Self::Neutral => "You're feeling neutral today. Let's talk more!",
        }
    }
}
