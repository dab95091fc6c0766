//! Scoring applicants against the trained artifacts.

pub mod artifacts;
mod assess;

pub use artifacts::{
    ArtifactError, ArtifactPaths, Artifacts, TRAIN_COMMAND, global, init_global,
};
pub use assess::{
    Assessment, FeatureImportance, NEUTRAL_PROBABILITY, RiskVerdict, assess, top_importances,
};
