//! Deterministic random-forest classifier for tabular data.
//!
//! Trees are grown on bootstrap samples with Gini splits over a random feature
//! subset per node, CART style. The fitted ensemble:
//! - averages leaf class distributions for probability estimates,
//! - reports mean-decrease-in-impurity feature importances,
//! - round-trips through JSON without retraining.

mod model;
mod train;

pub use model::{DecisionTree, MODEL_VERSION, ModelError, Node, RandomForestModel};
pub use train::{MaxFeatures, TrainDataset, TrainOptions, train_random_forest};
