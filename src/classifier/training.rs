use crate::models::mood::MoodCategory;

#[derive(Debug, Clone, Copy)]
pub struct TrainingExample {
    pub text: &'static str,
    pub category: MoodCategory,
}

const fn example(text: &'static str, category: MoodCategory) -> TrainingExample {
    TrainingExample { text, category }
}

/// Five hand-labelled sentences per mood.
pub const TRAINING_SET: [TrainingExample; 20] = [
    example("I feel down", MoodCategory::Sad),
    example("I'm so depressed", MoodCategory::Sad),
    example("Nothing makes me happy", MoodCategory::Sad),
    example("Feeling blue", MoodCategory::Sad),
    example("I am overwhelmed with sadness", MoodCategory::Sad),
    example("I feel great", MoodCategory::Happy),
    example("I'm very happy", MoodCategory::Happy),
    example("Life is amazing", MoodCategory::Happy),
    example("Feeling joyful", MoodCategory::Happy),
    example("Everything is going well", MoodCategory::Happy),
    example("I hate this", MoodCategory::Angry),
    example("I'm furious", MoodCategory::Angry),
    example("So much rage in me", MoodCategory::Angry),
    example("I am really upset", MoodCategory::Angry),
    example("Feeling angry", MoodCategory::Angry),
    example("I'm nervous", MoodCategory::Anxious),
    example("Feeling anxious", MoodCategory::Anxious),
    example("My heart is racing", MoodCategory::Anxious),
    example("I can't calm down", MoodCategory::Anxious),
    example("Worried about everything", MoodCategory::Anxious),
];
