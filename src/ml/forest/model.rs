use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::ml::classifier::{Classifier, argmax};

/// Current on-disk model format.
pub const MODEL_VERSION: i64 = 1;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid model: {0}")]
    Invalid(String),
}

/// Decision tree node. Children are indices into [`DecisionTree::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Route `feature <= threshold` left, everything else right.
    Split {
        feature: u32,
        threshold: f32,
        left: u32,
        right: u32,
    },
    /// Class distribution of the training samples that reached the leaf.
    Leaf { distribution: Vec<f32> },
}

/// A single tree stored as a flat node list; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    /// Leaf class distribution for a feature vector.
    pub fn leaf_distribution(&self, features: &[f32]) -> &[f32] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { distribution } => return distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature as usize).copied().unwrap_or(0.0);
                    idx = if value <= *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], idx: usize) -> usize {
            match &nodes[idx] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => {
                    1 + walk(nodes, *left as usize).max(walk(nodes, *right as usize))
                }
            }
        }
        if self.nodes.is_empty() { 0 } else { walk(&self.nodes, 0) }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Leaf { distribution } => {
                    if distribution.len() != n_classes {
                        return Err(format!(
                            "leaf {idx} has {} classes but expected {n_classes}",
                            distribution.len()
                        ));
                    }
                }
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature as usize >= n_features {
                        return Err(format!("node {idx} splits on unknown feature {feature}"));
                    }
                    // Children always follow their parent, which also rules out cycles.
                    for child in [*left as usize, *right as usize] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Bagged ensemble of Gini decision trees for tabular classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestModel {
    /// Model format version.
    pub model_version: i64,
    /// Number of `f32` values per feature vector.
    pub n_features: usize,
    /// Ordered list of class identifiers.
    pub classes: Vec<String>,
    /// Seed the ensemble was grown with.
    pub seed: u64,
    /// Accuracy on the data the model was fit on, when recorded.
    #[serde(default)]
    pub training_accuracy: Option<f32>,
    /// Mean decrease in impurity per feature, summing to 1.
    pub feature_importances: Vec<f32>,
    pub trees: Vec<DecisionTree>,
}

impl RandomForestModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_version != MODEL_VERSION {
            return Err(format!(
                "Unsupported model_version {} (expected {MODEL_VERSION})",
                self.model_version
            ));
        }
        if self.classes.len() < 2 {
            return Err("Model must contain at least 2 classes".to_string());
        }
        if self.n_features == 0 {
            return Err("Model expects no features".to_string());
        }
        if self.feature_importances.len() != self.n_features {
            return Err("feature_importances length must match n_features".to_string());
        }
        if self.trees.is_empty() {
            return Err("Model has no trees".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|err| format!("Tree {tree_idx}: {err}"))?;
        }
        Ok(())
    }

    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path)?;
        let model: Self = serde_json::from_slice(&bytes)?;
        model.validate().map_err(ModelError::Invalid)?;
        Ok(model)
    }

    /// Average of the leaf distributions across all trees.
    pub fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0f32; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in out.iter_mut().zip(tree.leaf_distribution(features)) {
                *acc += p;
            }
        }
        let n = self.trees.len().max(1) as f32;
        for v in &mut out {
            *v /= n;
        }
        out
    }

    pub fn predict_class_index(&self, features: &[f32]) -> usize {
        argmax(&self.predict_proba(features))
    }

    /// Position of `class_id` in [`Self::classes`].
    pub fn class_index(&self, class_id: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == class_id)
    }
}

impl Classifier for RandomForestModel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn feature_len(&self) -> usize {
        self.n_features
    }

    fn predict_class_index(&self, features: &[f32]) -> usize {
        RandomForestModel::predict_class_index(self, features)
    }

    fn predict_proba(&self, features: &[f32]) -> Option<Vec<f32>> {
        Some(RandomForestModel::predict_proba(self, features))
    }

    fn feature_importances(&self) -> Option<&[f32]> {
        Some(&self.feature_importances)
    }
}
