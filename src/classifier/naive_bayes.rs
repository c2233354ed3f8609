/// Multinomial Naive Bayes over dense non-negative feature rows.
///
/// Classes are identified by index; callers keep their own label table.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_log_prior: Vec<f64>,
    /// `[class][feature]` smoothed log probabilities.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    /// Fits class priors from label frequencies and per-class feature
    /// distributions with additive (Laplace) smoothing.
    pub fn fit(samples: &[Vec<f64>], labels: &[usize], n_classes: usize, alpha: f64) -> Self {
        let n_features = samples.first().map_or(0, Vec::len);
        let mut class_count = vec![0usize; n_classes];
        let mut feature_count = vec![vec![0.0; n_features]; n_classes];

        for (row, &label) in samples.iter().zip(labels) {
            if label >= n_classes {
                continue;
            }
            class_count[label] += 1;
            for (acc, x) in feature_count[label].iter_mut().zip(row) {
                *acc += x;
            }
        }

        let total = class_count.iter().sum::<usize>() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&c| (c as f64 / total).ln())
            .collect();

        let feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let denom = counts.iter().sum::<f64>() + alpha * n_features as f64;
                counts.iter().map(|c| ((c + alpha) / denom).ln()).collect()
            })
            .collect();

        Self {
            class_log_prior,
            feature_log_prob,
        }
    }

    #[cfg(test)]
    pub fn n_classes(&self) -> usize {
        self.class_log_prior.len()
    }

    /// Unnormalized log posterior per class.
    pub fn joint_log_likelihood(&self, row: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior + row.iter().zip(log_probs).map(|(x, lp)| x * lp).sum::<f64>()
            })
            .collect()
    }

    /// Index of the most likely class; the lowest index wins ties.
    /// `None` only when the model has no classes.
    pub fn predict(&self, row: &[f64]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, score) in self.joint_log_likelihood(row).into_iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}
