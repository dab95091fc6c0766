use std::path::Path;

use credit_guard::features::CREDIT_COLUMNS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUMERIC_RANGES: &[(&str, u32, u32)] = &[
    ("Duration", 4, 72),
    ("Amount", 250, 20_000),
    ("InstallmentRatePercentage", 1, 4),
    ("ResidenceDuration", 1, 4),
    ("Age", 18, 75),
    ("NumberExistingCredits", 1, 4),
    ("NumberPeopleMaintenance", 1, 2),
];

/// One-hot groups keyed by the prefix before the first `.`.
fn one_hot_groups() -> Vec<Vec<&'static str>> {
    let mut groups: Vec<Vec<&'static str>> = Vec::new();
    for &column in CREDIT_COLUMNS.iter().filter(|c| c.contains('.')) {
        let prefix = column.split('.').next().unwrap_or(column);
        match groups.last_mut() {
            Some(group) if group[0].starts_with(&format!("{prefix}.")) => group.push(column),
            _ => groups.push(vec![column]),
        }
    }
    groups
}

/// Synthetic German-credit style CSV: every feature column plus `Class`.
///
/// Applicants without a checking account, or with short loans, are Good.
pub fn synthetic_credit_csv(rows: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let groups = one_hot_groups();
    let mut text = CREDIT_COLUMNS.join(",");
    text.push_str(",Class\n");
    for _ in 0..rows {
        let mut values = std::collections::HashMap::new();
        for &(column, lo, hi) in NUMERIC_RANGES {
            values.insert(column, rng.random_range(lo..=hi) as f32);
        }
        values.insert("Telephone", rng.random_range(0..=1) as f32);
        values.insert("ForeignWorker", rng.random_range(0..=1) as f32);
        for group in &groups {
            let pick = rng.random_range(0..group.len());
            for (idx, &column) in group.iter().enumerate() {
                values.insert(column, if idx == pick { 1.0 } else { 0.0 });
            }
        }
        let good = values["CheckingAccountStatus.none"] == 1.0 || values["Duration"] <= 18.0;
        let fields: Vec<String> = CREDIT_COLUMNS
            .iter()
            .map(|column| format!("{}", values[column]))
            .collect();
        text.push_str(&fields.join(","));
        text.push_str(if good { ",Good\n" } else { ",Bad\n" });
    }
    text
}

pub fn write_credit_csv(path: &Path, rows: usize, seed: u64) {
    std::fs::write(path, synthetic_credit_csv(rows, seed)).expect("write synthetic dataset");
}
