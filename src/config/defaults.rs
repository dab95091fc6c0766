use std::path::PathBuf;

pub(super) fn default_dataset_path() -> PathBuf {
    PathBuf::from("Credit.csv")
}

pub(super) fn default_artifacts_dir() -> PathBuf {
    PathBuf::from(".")
}

pub(super) fn default_model_file() -> String {
    "model.json".to_string()
}

pub(super) fn default_schema_file() -> String {
    "model_columns.json".to_string()
}

pub(super) fn default_label_column() -> String {
    "Class".to_string()
}

pub(super) fn default_top_features() -> usize {
    5
}

pub(super) fn default_trees() -> usize {
    100
}

pub(super) fn default_seed() -> u64 {
    42
}

pub(super) fn default_min_samples_split() -> usize {
    2
}

pub(super) fn default_min_samples_leaf() -> usize {
    1
}
