//! Scores one applicant from the command line without the desktop UI.

use std::path::PathBuf;

use credit_guard::config;
use credit_guard::features::{self, LabeledApplicant};
use credit_guard::logging;
use credit_guard::scoring::{self, Assessment};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    if let Err(err) = logging::init("score") {
        eprintln!("Logging disabled: {err}");
    }
    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    if let Some(dir) = &options.artifacts_dir {
        settings = settings.with_artifacts_dir(dir);
    }
    let top = options.top.unwrap_or(settings.top_features);
    let artifacts =
        scoring::init_global(&settings.artifact_paths()).map_err(|err| err.to_string())?;
    let mut applicant = match &options.applicant {
        Some(path) => read_applicant(path)?,
        None => LabeledApplicant::default(),
    };
    applicant.numeric = applicant.numeric.clamped();
    let encoded = features::encode_labels(&applicant, &artifacts.schema);
    let assessment = scoring::assess(&artifacts.model, &artifacts.schema, &encoded.record, top);
    print_assessment(&assessment);
    for domain in &encoded.unresolved {
        println!("warning: unrecognized {} label; its columns were left at 0", domain.title());
    }
    Ok(())
}

fn read_applicant(path: &std::path::Path) -> Result<LabeledApplicant, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    toml::from_str(&text).map_err(|err| format!("Invalid applicant file {}: {err}", path.display()))
}

fn print_assessment(assessment: &Assessment) {
    println!("{}", assessment.headline());
    println!("{}", assessment.detail());
    println!("P(Good) = {:.4}", assessment.prob_good);
    if assessment.top_factors.is_empty() {
        return;
    }
    println!("Key factors:");
    for factor in &assessment.top_factors {
        println!("  {:<40} Importance: {:.3}", factor.feature, factor.importance);
    }
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    applicant: Option<PathBuf>,
    artifacts_dir: Option<PathBuf>,
    top: Option<usize>,
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--applicant" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--applicant requires a value".to_string())?;
                options.applicant = Some(PathBuf::from(value));
            }
            "--artifacts" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--artifacts requires a value".to_string())?;
                options.artifacts_dir = Some(PathBuf::from(value));
            }
            "--top" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--top requires a value".to_string())?;
                options.top = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --top value: {value}"))?,
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
        "credit-guard-score",
        "",
        "Scores one applicant against the trained model.",
        "",
        "Usage:",
        "  credit-guard-score [--applicant applicant.toml] [options]",
        "",
        "Options:",
        "  --applicant <file>  TOML with form fields; missing keys use form defaults.",
        "  --artifacts <dir>   Directory holding model.json and model_columns.json.",
        "  --top <n>           Number of key factors to list (default: 5).",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = ["--applicant", "a.toml", "--artifacts", "out", "--top", "3"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let options = parse_args(args).unwrap();
        assert_eq!(options.applicant, Some(PathBuf::from("a.toml")));
        assert_eq!(options.artifacts_dir, Some(PathBuf::from("out")));
        assert_eq!(options.top, Some(3));
    }

    #[test]
    fn help_is_returned_as_error() {
        let err = parse_args(vec!["--help".to_string()]).unwrap_err();
        assert!(err.starts_with("credit-guard-score"));
    }
}
