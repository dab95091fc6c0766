//! Trains the credit risk forest and writes the model and schema artifacts.

use std::path::PathBuf;

use credit_guard::config::{self, AppSettings};
use credit_guard::logging;
use credit_guard::training::{TrainingReport, train_and_save};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    if let Err(err) = logging::init("train") {
        eprintln!("Logging disabled: {err}");
    }
    let settings = options.apply(load_settings(options.config.as_deref())?);
    let report = train_and_save(&settings).map_err(|err| err.to_string())?;
    print_report(&report);
    Ok(())
}

fn load_settings(path: Option<&std::path::Path>) -> Result<AppSettings, String> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_default(),
    }
    .map_err(|err| err.to_string())
}

fn print_report(report: &TrainingReport) {
    println!("Training rows: {}", report.rows);
    println!("Features: {}", report.feature_count);
    println!("Model Accuracy (training data): {:.4}", report.accuracy);
    for (idx, stats) in report.per_class.iter().enumerate() {
        println!(
            "class {} {:<5}  precision={:.3}  recall={:.3}  support={}",
            idx, report.classes[idx], stats.precision, stats.recall, stats.support
        );
    }
    println!("confusion matrix (rows=true, cols=pred):");
    let cm = &report.confusion;
    for truth in 0..cm.n_classes {
        let mut row = String::new();
        for pred in 0..cm.n_classes {
            row.push_str(&format!("{:6}", cm.get(truth, pred)));
        }
        println!("{row}");
    }
    println!("Model saved to {}", report.paths.model.display());
    println!("Feature names saved to {}", report.paths.schema.display());
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    dataset: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    trees: Option<usize>,
    seed: Option<u64>,
}

impl CliOptions {
    fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if let Some(dataset) = &self.dataset {
            settings.dataset_path = dataset.clone();
        }
        if let Some(dir) = &self.out_dir {
            settings = settings.with_artifacts_dir(dir);
        }
        if let Some(trees) = self.trees {
            settings.training.trees = trees.max(1);
        }
        if let Some(seed) = self.seed {
            settings.training.seed = seed;
        }
        settings
    }
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--config" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--config requires a value".to_string())?;
                options.config = Some(PathBuf::from(value));
            }
            "--dataset" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--dataset requires a value".to_string())?;
                options.dataset = Some(PathBuf::from(value));
            }
            "--out-dir" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--out-dir requires a value".to_string())?;
                options.out_dir = Some(PathBuf::from(value));
            }
            "--trees" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--trees requires a value".to_string())?;
                options.trees = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --trees value: {value}"))?,
                );
            }
            "--seed" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--seed requires a value".to_string())?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "credit-guard-train",
        "",
        "Trains a random forest on a labeled credit CSV and writes model.json and model_columns.json.",
        "",
        "Usage:",
        "  credit-guard-train [options]",
        "",
        "Options:",
        "  --config <file>    Settings file (default: config.toml in the app directory).",
        "  --dataset <file>   Labeled CSV with a Class column (default: Credit.csv).",
        "  --out-dir <dir>    Directory for the artifacts (default: current directory).",
        "  --trees <n>        Number of trees (default: 100).",
        "  --seed <n>         Random seed (default: 42).",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_arguments_keep_configured_settings() {
        let options = parse_args(Vec::new()).unwrap();
        let settings = options.apply(AppSettings::default());
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn flags_override_settings() {
        let options = parse_args(args(&[
            "--dataset", "data.csv", "--out-dir", "out", "--trees", "7", "--seed", "9",
        ]))
        .unwrap();
        let settings = options.apply(AppSettings::default());
        assert_eq!(settings.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(settings.artifact_paths().model, PathBuf::from("out").join("model.json"));
        assert_eq!(settings.training.trees, 7);
        assert_eq!(settings.training.seed, 9);
    }

    #[test]
    fn rejects_bad_values_and_unknown_flags() {
        assert!(parse_args(args(&["--trees", "many"])).is_err());
        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--bogus"])).unwrap_err().contains("Unknown argument"));
    }
}
