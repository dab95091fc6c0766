/// Capabilities a trained classifier exposes to the scorer.
///
/// Only class prediction is mandatory. Probability estimates and global
/// feature importances are optional; scorers fall back when they are absent.
pub trait Classifier {
    /// Ordered class identifiers; indices line up with predictions.
    fn classes(&self) -> &[String];

    /// Number of `f32` values expected per feature vector.
    fn feature_len(&self) -> usize;

    /// Predict the class index for one feature vector.
    fn predict_class_index(&self, features: &[f32]) -> usize;

    /// Per-class probabilities for one feature vector, if supported.
    fn predict_proba(&self, _features: &[f32]) -> Option<Vec<f32>> {
        None
    }

    /// Global importance per feature position, if supported.
    fn feature_importances(&self) -> Option<&[f32]> {
        None
    }
}

/// Index of the largest value; ties resolve to the lowest index.
pub fn argmax(values: &[f32]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f32::NEG_INFINITY;
    for (idx, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(argmax(&[]), 0);
    }
}
