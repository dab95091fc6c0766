//! Labeled training data.

pub mod loader;

pub use loader::{
    BAD_LABEL, CLASS_NAMES, DatasetError, GOOD_LABEL, LabelEncoding, LabeledDataset, load_csv,
    parse_csv,
};
