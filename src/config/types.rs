use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ml::forest::{MaxFeatures, TrainOptions};
use crate::scoring::ArtifactPaths;

use super::defaults::{
    default_artifacts_dir, default_dataset_path, default_label_column, default_min_samples_leaf,
    default_min_samples_split, default_model_file, default_schema_file, default_seed,
    default_top_features, default_trees,
};

/// Settings persisted to `config.toml`.
///
/// Relative paths resolve against the working directory of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// CSV file the trainer reads.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Directory holding the model and schema artifacts.
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,
    #[serde(default = "default_model_file")]
    pub model_file: String,
    #[serde(default = "default_schema_file")]
    pub schema_file: String,
    /// Column holding the Good/Bad outcome.
    #[serde(default = "default_label_column")]
    pub label_column: String,
    /// How many global feature importances to show with a verdict.
    #[serde(default = "default_top_features")]
    pub top_features: usize,
    #[serde(default)]
    pub training: TrainingSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            artifacts_dir: default_artifacts_dir(),
            model_file: default_model_file(),
            schema_file: default_schema_file(),
            label_column: default_label_column(),
            top_features: default_top_features(),
            training: TrainingSettings::default(),
        }
    }
}

impl AppSettings {
    /// Clamp values that would make training or scoring meaningless.
    pub fn normalized(mut self) -> Self {
        self.top_features = self.top_features.max(1);
        self.training = self.training.normalized();
        if self.model_file.trim().is_empty() {
            self.model_file = default_model_file();
        }
        if self.schema_file.trim().is_empty() {
            self.schema_file = default_schema_file();
        }
        self
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(
            self.artifacts_dir.join(&self.model_file),
            self.artifacts_dir.join(&self.schema_file),
        )
    }

    /// Point artifacts at another directory, keeping the file names.
    pub fn with_artifacts_dir(mut self, dir: &Path) -> Self {
        self.artifacts_dir = dir.to_path_buf();
        self
    }
}

/// Random-forest hyperparameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSettings {
    #[serde(default = "default_trees")]
    pub trees: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    #[serde(default = "default_min_samples_leaf")]
    pub min_samples_leaf: usize,
    #[serde(default)]
    pub max_features: MaxFeatures,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            trees: default_trees(),
            seed: default_seed(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            max_features: MaxFeatures::default(),
        }
    }
}

impl TrainingSettings {
    fn normalized(mut self) -> Self {
        self.trees = self.trees.max(1);
        self.min_samples_split = self.min_samples_split.max(2);
        self.min_samples_leaf = self.min_samples_leaf.max(1);
        self.max_depth = self.max_depth.filter(|&depth| depth > 0);
        self
    }

    pub fn to_options(&self) -> TrainOptions {
        TrainOptions {
            trees: self.trees,
            seed: self.seed,
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            max_features: self.max_features,
            bootstrap: true,
        }
    }
}
