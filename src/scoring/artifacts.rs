//! Loading the trained model and its feature schema.
//!
//! Interactive front-ends call [`init_global`] once at startup; a missing
//! artifact is fatal there and the caller must stop taking requests.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;

use crate::features::{FeatureSchema, SchemaError};
use crate::ml::Classifier;
use crate::ml::forest::{ModelError, RandomForestModel};

/// Binary users are told to run when artifacts are missing.
pub const TRAIN_COMMAND: &str = "credit-guard-train";

static ARTIFACTS: OnceLock<Artifacts> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error(
        "Model files not found ({}). Please run `{}` first.",
        display_paths(.paths),
        TRAIN_COMMAND
    )]
    Missing { paths: Vec<PathBuf> },
    #[error("Failed to load model {path}: {source}")]
    Model { path: PathBuf, source: ModelError },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Schema lists {schema} columns but the model expects {model} features")]
    SchemaMismatch { schema: usize, model: usize },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Locations of the two training artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub schema: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: PathBuf, schema: PathBuf) -> Self {
        Self { model, schema }
    }

    /// Artifact files that do not exist yet.
    pub fn missing(&self) -> Vec<&Path> {
        [self.model.as_path(), self.schema.as_path()]
            .into_iter()
            .filter(|path| !path.is_file())
            .collect()
    }
}

/// A loaded, validated model together with the schema it was trained on.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: RandomForestModel,
    pub schema: FeatureSchema,
    pub paths: ArtifactPaths,
}

impl Artifacts {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let missing = paths.missing();
        if !missing.is_empty() {
            return Err(ArtifactError::Missing {
                paths: missing.into_iter().map(Path::to_path_buf).collect(),
            });
        }
        let schema = FeatureSchema::load_json(&paths.schema)?;
        let model =
            RandomForestModel::load_json(&paths.model).map_err(|source| ArtifactError::Model {
                path: paths.model.clone(),
                source,
            })?;
        if model.feature_len() != schema.len() {
            return Err(ArtifactError::SchemaMismatch {
                schema: schema.len(),
                model: model.feature_len(),
            });
        }
        tracing::info!(
            "Loaded model with {} trees over {} features from {}",
            model.trees.len(),
            schema.len(),
            paths.model.display()
        );
        Ok(Self {
            model,
            schema,
            paths: paths.clone(),
        })
    }
}

/// Load the artifacts once for the lifetime of the process.
///
/// Later calls return the already-loaded artifacts and ignore `paths`.
pub fn init_global(paths: &ArtifactPaths) -> Result<&'static Artifacts, ArtifactError> {
    if let Some(loaded) = ARTIFACTS.get() {
        return Ok(loaded);
    }
    let loaded = Artifacts::load(paths)?;
    Ok(ARTIFACTS.get_or_init(|| loaded))
}

/// Artifacts loaded by [`init_global`], if any.
pub fn global() -> Option<&'static Artifacts> {
    ARTIFACTS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::forest::{DecisionTree, MODEL_VERSION, Node};
    use tempfile::tempdir;

    fn tiny_model(n_features: usize) -> RandomForestModel {
        RandomForestModel {
            model_version: MODEL_VERSION,
            n_features,
            classes: vec!["Bad".into(), "Good".into()],
            seed: 1,
            training_accuracy: Some(1.0),
            feature_importances: vec![0.0; n_features],
            trees: vec![DecisionTree {
                nodes: vec![Node::Leaf {
                    distribution: vec![0.0, 1.0],
                }],
            }],
        }
    }

    fn write_artifacts(dir: &Path, model: &RandomForestModel, columns: &[&str]) -> ArtifactPaths {
        let paths = ArtifactPaths::new(dir.join("model.json"), dir.join("model_columns.json"));
        std::fs::write(&paths.model, serde_json::to_vec(model).unwrap()).unwrap();
        std::fs::write(&paths.schema, serde_json::to_vec(columns).unwrap()).unwrap();
        paths
    }

    #[test]
    fn missing_files_ask_for_training() {
        let dir = tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path().join("model.json"), dir.path().join("cols.json"));
        let err = Artifacts::load(&paths).unwrap_err();
        match &err {
            ArtifactError::Missing { paths } => assert_eq!(paths.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains(TRAIN_COMMAND));
    }

    #[test]
    fn loads_matching_artifacts() {
        let dir = tempdir().unwrap();
        let paths = write_artifacts(dir.path(), &tiny_model(2), &["Age", "Amount"]);
        let artifacts = Artifacts::load(&paths).unwrap();
        assert_eq!(artifacts.schema.columns(), &["Age", "Amount"]);
        assert_eq!(artifacts.model.trees.len(), 1);
    }

    #[test]
    fn rejects_schema_model_mismatch() {
        let dir = tempdir().unwrap();
        let paths = write_artifacts(dir.path(), &tiny_model(3), &["Age", "Amount"]);
        assert!(matches!(
            Artifacts::load(&paths),
            Err(ArtifactError::SchemaMismatch {
                schema: 2,
                model: 3
            })
        ));
    }

    #[test]
    fn corrupt_model_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let paths = write_artifacts(dir.path(), &tiny_model(2), &["Age", "Amount"]);
        std::fs::write(&paths.model, b"{not json").unwrap();
        let err = Artifacts::load(&paths).unwrap_err();
        assert!(matches!(err, ArtifactError::Model { .. }));
        assert!(err.to_string().contains("model.json"));
    }

    #[test]
    fn global_is_loaded_once() {
        let dir = tempdir().unwrap();
        let paths = write_artifacts(dir.path(), &tiny_model(2), &["Age", "Amount"]);
        let first = init_global(&paths).unwrap();
        std::fs::remove_file(&paths.model).unwrap();
        let second = init_global(&paths).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(global().is_some());
    }
}
