use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::mood::{MoodCategory, ReplyCategory};

const SAD_REPLIES: &[&str] = &[
    "I'm sorry you're feeling this way. Sometimes, talking about what's bothering you helps. Remember, it's okay to ask for help.",
    "It's normal to feel down sometimes. Try to do something small today that brings you joy, like listening to your favorite song or taking a short walk.",
    "Remember, your feelings are valid. If you want, you can try writing down your thoughts—it can help lighten the emotional load.",
    "You're not alone in this. Reaching out to a friend or family member might help you feel supported.",
    "When sadness feels overwhelming, deep breathing or mindfulness can bring a little peace. Want me to guide you through a breathing exercise?",
];

const HAPPY_REPLIES: &[&str] = &[
    "That's wonderful to hear! Celebrate these moments and savor the good feelings.",
    "Happiness is a beautiful thing. Keep doing what brings you joy and spread that positive energy!",
    "Glad you're feeling good! Maybe try sharing your happiness with someone else—it can make your day even better.",
    "It's great to see you smiling today. Keeping a gratitude journal might help keep this positive vibe going!",
    "Enjoy these happy moments—they're important for your overall well-being.",
];

const ANGRY_REPLIES: &[&str] = &[
    "Anger is a strong emotion. Try taking a few deep breaths and count to ten before reacting—it really helps.",
    "It's okay to feel angry. Sometimes channeling that energy into a physical activity like jogging or punching a pillow can release tension.",
    "Remember, you're in control of your emotions. If you'd like, I can share some quick relaxation techniques.",
    "Try to pause and identify what exactly triggered your anger. Understanding it can help you manage it better.",
    "Expressing anger calmly and constructively is powerful. If you want, you can write down what you're feeling before speaking out.",
];

const ANXIOUS_REPLIES: &[&str] = &[
    "Anxiety can be tough, but you’re not alone. Let's try some slow, deep breathing together to calm your mind.",
    "Try focusing on the present moment. You might want to try the 5-4-3-2-1 grounding technique: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    "Remember, it's okay to take breaks and step back when anxiety builds up.",
    "Physical exercise, even a short walk, can really help ease anxious feelings.",
    "You’re doing your best, and that’s enough. Would you like me to share a calming meditation audio or exercise?",
];

const DEFAULT_REPLIES: &[&str] = &[
    "I'm here to listen. Tell me more about how you're feeling.",
    "Thanks for sharing. Would you like some tips to help you feel better?",
    "Your feelings matter. I'm here whenever you want to talk.",
    "Sometimes just putting feelings into words can help. Feel free to share.",
    "No matter what you’re feeling, it’s okay. Let’s take it one step at a time.",
];

/// Authored replies for a category.
pub fn replies_for(category: ReplyCategory) -> &'static [&'static str] {
    match category {
        ReplyCategory::Mood(MoodCategory::Sad) => SAD_REPLIES,
        ReplyCategory::Mood(MoodCategory::Happy) => HAPPY_REPLIES,
        ReplyCategory::Mood(MoodCategory::Angry) => ANGRY_REPLIES,
        ReplyCategory::Mood(MoodCategory::Anxious) => ANXIOUS_REPLIES,
        ReplyCategory::Default => DEFAULT_REPLIES,
    }
}

/// Picks one reply uniformly at random. Consecutive calls may repeat.
pub fn select_response<R: Rng + ?Sized>(category: ReplyCategory, rng: &mut R) -> &'static str {
    let replies = replies_for(category);
    replies
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_REPLIES[0])
}
