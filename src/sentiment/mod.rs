//! Sentiment scoring for mood check-ins.
//!
//! Scores come from VADER (`vader_sentiment`): the full ~7,500 word lexicon
//! plus its intensifier, ALL-CAPS, negation, "but" and punctuation rules.
//! The compound score lies in `[-1, 1]`.

use serde::Serialize;

/// Positive, negative and neutral proportions plus the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Aggregate polarity in `[-1, 1]`.
    pub compound: f64,
}

impl PolarityScores {
    pub fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::neutral();
        }

        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        PolarityScores {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: round_to(score("compound").clamp(-1.0, 1.0), 4),
        }
    }

    /// Compound score only.
    pub fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer
    }

    #[test]
    fn test_positive_mood() {
        let compound = analyzer().compound("I feel amazing today");
        assert!((compound - 0.5859).abs() < 1e-4, "compound was {}", compound);
    }

    #[test]
    fn test_distress_phrases_score_negative() {
        let a = analyzer();
        assert!((a.compound("I want to die") + 0.5994).abs() < 1e-4);

        for text in [
            "I want to die",
            "I am so disappointed",
            "Today was a disaster",
            "Everything is falling apart and I feel broken",
        ] {
            let compound = a.compound(text);
            assert!(compound <= -0.05, "{:?} scored {}", text, compound);
        }
    }

    #[test]
    fn test_everyday_positive_words_score_positive() {
        let a = analyzer();
        for text in ["I feel terrific", "I feel lovely today", "Had a great time with friends"] {
            let compound = a.compound(text);
            assert!(compound >= 0.05, "{:?} scored {}", text, compound);
        }
    }

    #[test]
    fn test_negative_mood() {
        let compound = analyzer().compound("I am sad and hopeless");
        assert!(compound < -0.05, "compound was {}", compound);
    }

    #[test]
    fn test_no_sentiment_words_is_neutral() {
        let scores = analyzer().polarity_scores("The meeting is at noon");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(analyzer().polarity_scores("   "), PolarityScores::neutral());
    }

    #[test]
    fn test_negation_flips_polarity() {
        let a = analyzer();
        assert!(a.compound("I am happy") > 0.05);
        assert!(a.compound("I am not happy") < -0.05);
    }

    #[test]
    fn test_booster_and_emphasis_intensify() {
        let a = analyzer();
        let plain = a.compound("I am happy");
        assert!(a.compound("I am very happy") > plain);
        assert!(a.compound("I am happy!!!") > plain);
    }

    #[test]
    fn test_compound_stays_in_range() {
        let a = analyzer();
        let gushing = "AMAZING wonderful FANTASTIC great love joy best excellent!!!!!!";
        let bleak = "worst terrible HORRIBLE hate rage furious miserable hopeless!!!!";
        for text in [gushing, bleak] {
            let s = a.polarity_scores(text);
            assert!((-1.0..=1.0).contains(&s.compound));
            assert!((s.pos + s.neg + s.neu - 1.0).abs() < 0.01);
        }
    }
}
