//! Offline training: dataset in, model and schema artifacts out.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::AppSettings;
use crate::dataset::{self, CLASS_NAMES, DatasetError, LabelEncoding};
use crate::features::{FeatureSchema, SchemaError};
use crate::fs_atomic::atomic_write;
use crate::ml::forest::{TrainDataset, train_random_forest};
use crate::ml::metrics::{
    ConfusionMatrix, PerClassStats, accuracy, confusion_matrix, precision_recall_by_class,
};
use crate::scoring::ArtifactPaths;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Training failed: {0}")]
    Train(String),
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub feature_count: usize,
    pub rows: usize,
    /// Accuracy on the rows the model was fit on.
    pub accuracy: f32,
    pub confusion: ConfusionMatrix,
    pub per_class: Vec<PerClassStats>,
    pub classes: Vec<String>,
    pub paths: ArtifactPaths,
    pub label_encoding: LabelEncoding,
    /// Count of (Bad, Good) rows.
    pub class_balance: (usize, usize),
}

/// Train a forest on the configured dataset and persist both artifacts.
///
/// The schema is written before the model so a schema always exists for any
/// model on disk.
pub fn train_and_save(settings: &AppSettings) -> Result<TrainingReport, TrainingError> {
    tracing::info!("Loading data...");
    let data = dataset::load_csv(&settings.dataset_path, &settings.label_column)?;
    let (bad, good) = data.class_balance();
    tracing::info!(
        "Loaded {} rows from {} ({} Good, {} Bad)",
        data.rows.len(),
        settings.dataset_path.display(),
        good,
        bad
    );
    if data.label_encoding == LabelEncoding::Numeric {
        tracing::info!("Label column `{}` already numeric; used as-is", settings.label_column);
    }

    let paths = settings.artifact_paths();
    let schema = FeatureSchema::new(data.feature_names.clone())?;
    let schema_json = schema
        .to_json()
        .map_err(|source| TrainingError::Serialize {
            path: paths.schema.clone(),
            source,
        })?;
    write_artifact(&paths.schema, schema_json.as_bytes())?;
    tracing::info!("Saved {} feature names to {}", schema.len(), paths.schema.display());

    tracing::info!("Training Random Forest Model...");
    let train = TrainDataset {
        feature_len: schema.len(),
        classes: CLASS_NAMES.iter().map(|c| c.to_string()).collect(),
        x: data.rows,
        y: data.labels,
    };
    let options = settings.training.to_options();
    let mut model = train_random_forest(&train, &options).map_err(TrainingError::Train)?;

    let confusion = confusion_matrix(&model, &train.x, &train.y);
    let acc = accuracy(&confusion);
    model.training_accuracy = Some(acc);

    let model_json = serde_json::to_vec_pretty(&model).map_err(|source| {
        TrainingError::Serialize {
            path: paths.model.clone(),
            source,
        }
    })?;
    write_artifact(&paths.model, &model_json)?;
    tracing::info!(
        "Model saved to {} ({} trees, training accuracy {:.4})",
        paths.model.display(),
        model.trees.len(),
        acc
    );

    Ok(TrainingReport {
        feature_count: schema.len(),
        rows: train.x.len(),
        accuracy: acc,
        per_class: precision_recall_by_class(&confusion),
        confusion,
        classes: model.classes.clone(),
        paths,
        label_encoding: data.label_encoding,
        class_balance: (bad, good),
    })
}

fn write_artifact(path: &std::path::Path, data: &[u8]) -> Result<(), TrainingError> {
    atomic_write(path, data).map_err(|source| TrainingError::Write {
        path: path.to_path_buf(),
        source,
    })
}
