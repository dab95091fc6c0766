//! Display strings derived from the loaded artifacts and the latest verdict.

use crate::scoring::{Artifacts, Assessment};

/// One row of the "Model Info" column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

pub fn model_info(artifacts: &Artifacts) -> Vec<InfoRow> {
    let model = &artifacts.model;
    let accuracy = model
        .training_accuracy
        .map(|acc| format!("{:.1}%", acc * 100.0))
        .unwrap_or_else(|| "not recorded".to_string());
    vec![
        InfoRow {
            label: "Model Type",
            value: format!("Random Forest Classifier ({} trees)", model.trees.len()),
        },
        InfoRow {
            label: "Features Used",
            value: artifacts.schema.len().to_string(),
        },
        InfoRow {
            label: "Training Accuracy",
            value: accuracy,
        },
    ]
}

/// `Importance: 0.123` lines for the key factors list.
pub fn factor_lines(assessment: &Assessment) -> Vec<(String, String)> {
    assessment
        .top_factors
        .iter()
        .map(|factor| {
            (
                factor.feature.clone(),
                format!("Importance: {:.3}", factor.importance),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSchema;
    use crate::ml::forest::{DecisionTree, MODEL_VERSION, Node, RandomForestModel};
    use crate::scoring::{ArtifactPaths, FeatureImportance, RiskVerdict};
    use std::path::PathBuf;

    fn artifacts(training_accuracy: Option<f32>) -> Artifacts {
        let leaf = DecisionTree {
            nodes: vec![Node::Leaf {
                distribution: vec![0.3, 0.7],
            }],
        };
        Artifacts {
            model: RandomForestModel {
                model_version: MODEL_VERSION,
                n_features: 2,
                classes: vec!["Bad".into(), "Good".into()],
                seed: 42,
                training_accuracy,
                feature_importances: vec![0.6, 0.4],
                trees: vec![leaf.clone(), leaf],
            },
            schema: FeatureSchema::new(vec!["Age".into(), "Amount".into()]).unwrap(),
            paths: ArtifactPaths::new(PathBuf::from("model.json"), PathBuf::from("cols.json")),
        }
    }

    #[test]
    fn model_info_reports_trees_features_and_accuracy() {
        let rows = model_info(&artifacts(Some(0.8)));
        let values: Vec<&str> = rows.iter().map(|row| row.value.as_str()).collect();
        assert_eq!(
            values,
            ["Random Forest Classifier (2 trees)", "2", "80.0%"]
        );
        let rows = model_info(&artifacts(None));
        assert_eq!(rows[2].value, "not recorded");
    }

    #[test]
    fn factor_lines_use_three_decimals() {
        let assessment = Assessment {
            verdict: RiskVerdict::Good,
            class_index: 1,
            prob_good: 0.7,
            probability_estimated: true,
            top_factors: vec![FeatureImportance {
                feature: "Amount".into(),
                importance: 0.12345,
            }],
        };
        assert_eq!(
            factor_lines(&assessment),
            vec![("Amount".to_string(), "Importance: 0.123".to_string())]
        );
    }
}
