//! Turning an encoded applicant into a verdict with supporting evidence.

use crate::dataset::GOOD_LABEL;
use crate::features::{ApplicantRecord, FeatureSchema};
use crate::ml::Classifier;

/// Good-class probability reported when a model cannot estimate one.
pub const NEUTRAL_PROBABILITY: f32 = 0.5;

/// Binary credit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskVerdict {
    /// Creditworthy; label 1.
    Good,
    /// High default risk; label 0.
    Bad,
}

impl RiskVerdict {
    /// Numeric class label used in the training data.
    pub fn label(self) -> u8 {
        match self {
            RiskVerdict::Good => 1,
            RiskVerdict::Bad => 0,
        }
    }

    pub fn is_approved(self) -> bool {
        self == RiskVerdict::Good
    }
}

/// One feature and its global importance weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f32,
}

/// Outcome of scoring one applicant.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict: RiskVerdict,
    /// Predicted index into the model's classes.
    pub class_index: usize,
    /// Probability of the Good class in `[0, 1]`.
    pub prob_good: f32,
    /// False when the model had no probability estimate and
    /// [`NEUTRAL_PROBABILITY`] was substituted.
    pub probability_estimated: bool,
    /// Most important features of the model, strongest first. Empty when the
    /// model reports no importances.
    pub top_factors: Vec<FeatureImportance>,
}

impl Assessment {
    /// Confidence in the verdict, as a percentage.
    pub fn confidence(&self) -> f32 {
        match self.verdict {
            RiskVerdict::Good => self.prob_good * 100.0,
            RiskVerdict::Bad => (1.0 - self.prob_good) * 100.0,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.verdict {
            RiskVerdict::Good => "Credit Approved (Good Risk)",
            RiskVerdict::Bad => "Credit Rejected (Bad Risk)",
        }
    }

    /// Sentence describing the confidence of the verdict.
    pub fn detail(&self) -> String {
        match self.verdict {
            RiskVerdict::Good => format!(
                "The model is {:.1}% confident this is a Good credit risk.",
                self.confidence()
            ),
            RiskVerdict::Bad => format!(
                "The model predicts a high risk of default (Confidence: {:.1}%).",
                self.confidence()
            ),
        }
    }
}

/// Score `record` with `model`, attaching the `top_n` global importances.
///
/// The record is laid out in schema order before prediction, so its key
/// order never matters.
pub fn assess<C: Classifier + ?Sized>(
    model: &C,
    schema: &FeatureSchema,
    record: &ApplicantRecord,
    top_n: usize,
) -> Assessment {
    let row = record.to_row(schema);
    let good_index = good_class_index(model);
    let class_index = model.predict_class_index(&row);
    let verdict = if class_index == good_index {
        RiskVerdict::Good
    } else {
        RiskVerdict::Bad
    };
    let estimate = model
        .predict_proba(&row)
        .and_then(|proba| proba.get(good_index).copied());
    let probability_estimated = estimate.is_some();
    let prob_good = estimate.map_or(NEUTRAL_PROBABILITY, |p| p.clamp(0.0, 1.0));
    tracing::debug!(
        "Scored applicant: class {} prob_good {:.3}",
        class_index,
        prob_good
    );
    Assessment {
        verdict,
        class_index,
        prob_good,
        probability_estimated,
        top_factors: top_importances(model, schema, top_n),
    }
}

/// The `n` most important features of `model`, strongest first.
///
/// Equal weights keep schema order.
pub fn top_importances<C: Classifier + ?Sized>(
    model: &C,
    schema: &FeatureSchema,
    n: usize,
) -> Vec<FeatureImportance> {
    let Some(weights) = model.feature_importances() else {
        return Vec::new();
    };
    let mut ranked: Vec<FeatureImportance> = schema
        .columns()
        .iter()
        .zip(weights)
        .map(|(feature, &importance)| FeatureImportance {
            feature: feature.clone(),
            importance,
        })
        .collect();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    ranked.truncate(n);
    ranked
}

fn good_class_index<C: Classifier + ?Sized>(model: &C) -> usize {
    model
        .classes()
        .iter()
        .position(|class| class == GOOD_LABEL || class == "1")
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier {
        classes: Vec<String>,
        class_index: usize,
        proba: Option<Vec<f32>>,
        importances: Option<Vec<f32>>,
    }

    impl FixedClassifier {
        fn new(class_index: usize) -> Self {
            Self {
                classes: vec!["Bad".into(), "Good".into()],
                class_index,
                proba: None,
                importances: None,
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn classes(&self) -> &[String] {
            &self.classes
        }

        fn feature_len(&self) -> usize {
            3
        }

        fn predict_class_index(&self, _features: &[f32]) -> usize {
            self.class_index
        }

        fn predict_proba(&self, _features: &[f32]) -> Option<Vec<f32>> {
            self.proba.clone()
        }

        fn feature_importances(&self) -> Option<&[f32]> {
            self.importances.as_deref()
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["Age".into(), "Amount".into(), "Duration".into()]).unwrap()
    }

    #[test]
    fn missing_probability_falls_back_to_neutral() {
        let schema = schema();
        let record = ApplicantRecord::zeroed(&schema);
        let outcome = assess(&FixedClassifier::new(1), &schema, &record, 5);
        assert_eq!(outcome.verdict, RiskVerdict::Good);
        assert_eq!(outcome.prob_good, 0.5);
        assert!(!outcome.probability_estimated);
        assert!(outcome.top_factors.is_empty());
    }

    #[test]
    fn confidence_follows_verdict() {
        let schema = schema();
        let record = ApplicantRecord::zeroed(&schema);
        let mut model = FixedClassifier::new(0);
        model.proba = Some(vec![0.8, 0.2]);
        let outcome = assess(&model, &schema, &record, 5);
        assert_eq!(outcome.verdict, RiskVerdict::Bad);
        assert_eq!(outcome.verdict.label(), 0);
        assert!((outcome.prob_good - 0.2).abs() < 1e-6);
        assert!((outcome.confidence() - 80.0).abs() < 1e-4);
        assert_eq!(outcome.headline(), "Credit Rejected (Bad Risk)");
        assert_eq!(
            outcome.detail(),
            "The model predicts a high risk of default (Confidence: 80.0%)."
        );

        model.class_index = 1;
        model.proba = Some(vec![0.25, 0.75]);
        let outcome = assess(&model, &schema, &record, 5);
        assert!(outcome.verdict.is_approved());
        assert!((outcome.confidence() - 75.0).abs() < 1e-4);
        assert_eq!(
            outcome.detail(),
            "The model is 75.0% confident this is a Good credit risk."
        );
    }

    #[test]
    fn good_class_is_found_by_name() {
        let schema = schema();
        let record = ApplicantRecord::zeroed(&schema);
        let mut model = FixedClassifier::new(0);
        model.classes = vec!["Good".into(), "Bad".into()];
        model.proba = Some(vec![0.9, 0.1]);
        let outcome = assess(&model, &schema, &record, 5);
        assert_eq!(outcome.verdict, RiskVerdict::Good);
        assert!((outcome.prob_good - 0.9).abs() < 1e-6);
    }

    #[test]
    fn top_factors_are_sorted_and_truncated() {
        let schema = schema();
        let mut model = FixedClassifier::new(1);
        model.importances = Some(vec![0.2, 0.5, 0.3]);
        let top = top_importances(&model, &schema, 2);
        assert_eq!(
            top,
            vec![
                FeatureImportance {
                    feature: "Amount".into(),
                    importance: 0.5
                },
                FeatureImportance {
                    feature: "Duration".into(),
                    importance: 0.3
                },
            ]
        );
    }

    #[test]
    fn equal_importances_keep_schema_order() {
        let schema = schema();
        let mut model = FixedClassifier::new(1);
        model.importances = Some(vec![0.25, 0.5, 0.25]);
        let names: Vec<String> = top_importances(&model, &schema, 3)
            .into_iter()
            .map(|f| f.feature)
            .collect();
        assert_eq!(names, ["Amount", "Age", "Duration"]);
    }
}
