//! Local mood classifier: TF-IDF features fed to multinomial Naive Bayes,
//! trained once on a tiny hand-labelled set.
//!
//! With five sentences per class the decision boundary is fragile; unseen
//! phrasing is classified on a best-effort basis.

pub mod naive_bayes;
pub mod tfidf;
pub mod training;

use crate::models::mood::{MoodCategory, ReplyCategory};

use naive_bayes::MultinomialNb;
use tfidf::TfidfVectorizer;
use training::{TrainingExample, TRAINING_SET};

/// Immutable after training; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MoodClassifier {
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
    /// Class index -> category, sorted by label.
    classes: Vec<MoodCategory>,
}

impl MoodClassifier {
    /// Trains on the built-in example set.
    pub fn train() -> Self {
        Self::fit(&TRAINING_SET)
    }

    pub fn fit(examples: &[TrainingExample]) -> Self {
        let mut classes: Vec<MoodCategory> = Vec::new();
        for ex in examples {
            if !classes.contains(&ex.category) {
                classes.push(ex.category);
            }
        }
        classes.sort_by_key(|c| c.label());

        let texts: Vec<&str> = examples.iter().map(|ex| ex.text).collect();
        let vectorizer = TfidfVectorizer::fit(&texts);

        let samples: Vec<Vec<f64>> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let labels: Vec<usize> = examples
            .iter()
            .filter_map(|ex| classes.iter().position(|c| *c == ex.category))
            .collect();

        let model = MultinomialNb::fit(&samples, &labels, classes.len(), MultinomialNb::DEFAULT_ALPHA);

        tracing::debug!(
            examples = examples.len(),
            classes = classes.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "Mood classifier trained"
        );

        Self {
            vectorizer,
            model,
            classes,
        }
    }

    /// Callers must not pass blank text.
    pub fn classify(&self, text: &str) -> ReplyCategory {
        let row = self.vectorizer.transform(text);
        self.model
            .predict(&row)
            .and_then(|idx| self.classes.get(idx).copied())
            .map(ReplyCategory::Mood)
            .unwrap_or(ReplyCategory::Default)
    }
}
