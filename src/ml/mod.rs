//! Machine learning building blocks: the classifier seam, the random forest
//! used for credit scoring, and evaluation metrics.

pub mod classifier;
pub mod forest;
pub mod metrics;

pub use classifier::Classifier;
