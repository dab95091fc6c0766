//! Credit risk scoring: one-hot encoding of applicant profiles, an offline
//! random-forest trainer, and front-ends that score against its artifacts.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// Labeled CSV datasets.
pub mod dataset;
/// Applicant profiles and their one-hot encoding.
pub mod features;
/// Atomic file writes.
pub mod fs_atomic;
/// egui desktop front-end.
pub mod gui;
/// File and stdout logging.
pub mod logging;
/// Classifiers and metrics.
pub mod ml;
/// Verdicts and artifact loading.
pub mod scoring;
/// Dataset to artifacts pipeline.
pub mod training;
