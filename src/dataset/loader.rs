//! Loader for labeled credit datasets stored as CSV.
//!
//! The first line is the header. One column holds the outcome label
//! (`Good`/`Bad`, or an already-encoded `1`/`0`); every other column is a
//! numeric feature.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Label text mapped to class 1.
pub const GOOD_LABEL: &str = "Good";
/// Label text mapped to class 0.
pub const BAD_LABEL: &str = "Bad";
/// Class identifiers indexed by encoded label.
pub const CLASS_NAMES: [&str; 2] = [BAD_LABEL, GOOD_LABEL];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Dataset is empty")]
    Empty,
    #[error("Label column `{0}` not found in header")]
    MissingLabelColumn(String),
    #[error("Line {line}: expected {expected} fields, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
    #[error("Line {line}: column `{column}` has non-numeric value `{value}`")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },
    #[error("Line {line}: unrecognized label `{value}` (expected Good, Bad, 1 or 0)")]
    InvalidLabel { line: usize, value: String },
}

/// How the label column was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEncoding {
    /// Textual `Good`/`Bad` labels were remapped to 1/0.
    Text,
    /// Labels were already 1/0 and used as-is.
    Numeric,
}

/// Parsed dataset with the label column separated from the features.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    /// Feature column names in file order (label column removed).
    pub feature_names: Vec<String>,
    /// Feature rows aligned with `feature_names`.
    pub rows: Vec<Vec<f32>>,
    /// Encoded labels: 1 = Good, 0 = Bad.
    pub labels: Vec<usize>,
    pub label_encoding: LabelEncoding,
}

impl LabeledDataset {
    /// Count of (Bad, Good) rows.
    pub fn class_balance(&self) -> (usize, usize) {
        let good = self.labels.iter().filter(|&&l| l == 1).count();
        (self.labels.len() - good, good)
    }
}

/// Load a CSV dataset from disk.
pub fn load_csv(path: &Path, label_column: &str) -> Result<LabeledDataset, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(&text, label_column)
}

/// Parse CSV text into a labeled dataset.
pub fn parse_csv(text: &str, label_column: &str) -> Result<LabeledDataset, DatasetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(DatasetError::Empty)?;
    let header = split_fields(header, header_line)?;
    let label_idx = header
        .iter()
        .position(|name| name == label_column)
        .ok_or_else(|| DatasetError::MissingLabelColumn(label_column.to_string()))?;
    let feature_names: Vec<String> = header
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_idx)
        .map(|(_, name)| name.clone())
        .collect();

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    let mut saw_text_label = false;
    for (line, raw) in lines {
        let fields = split_fields(raw, line)?;
        if fields.len() != header.len() {
            return Err(DatasetError::RowWidth {
                line,
                expected: header.len(),
                found: fields.len(),
            });
        }
        let mut row = Vec::with_capacity(feature_names.len());
        for (idx, value) in fields.iter().enumerate() {
            if idx == label_idx {
                let (label, textual) = parse_label(value, line)?;
                saw_text_label |= textual;
                labels.push(label);
                continue;
            }
            let parsed = value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DatasetError::InvalidValue {
                    line,
                    column: header[idx].clone(),
                    value: value.clone(),
                })?;
            row.push(parsed);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(LabeledDataset {
        feature_names,
        rows,
        labels,
        label_encoding: if saw_text_label {
            LabelEncoding::Text
        } else {
            LabelEncoding::Numeric
        },
    })
}

/// Returns the encoded label and whether it was textual.
fn parse_label(value: &str, line: usize) -> Result<(usize, bool), DatasetError> {
    let trimmed = value.trim();
    match trimmed {
        GOOD_LABEL => return Ok((1, true)),
        BAD_LABEL => return Ok((0, true)),
        _ => {}
    }
    match trimmed.parse::<f32>() {
        Ok(v) if v == 1.0 => Ok((1, false)),
        Ok(v) if v == 0.0 => Ok((0, false)),
        _ => Err(DatasetError::InvalidLabel {
            line,
            value: value.to_string(),
        }),
    }
}

/// Split one CSV line, honoring double-quoted fields and `""` escapes.
fn split_fields(line: &str, line_no: usize) -> Result<Vec<String>, DatasetError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(DatasetError::UnterminatedQuote { line: line_no });
    }
    fields.push(current);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_text_labels_and_drops_label_column() {
        let text = "Duration,Amount,Class,Telephone\n6,1169,Good,0\n48,5951,Bad,1\n";
        let dataset = parse_csv(text, "Class").unwrap();
        assert_eq!(dataset.feature_names, vec!["Duration", "Amount", "Telephone"]);
        assert_eq!(dataset.rows, vec![vec![6.0, 1169.0, 0.0], vec![48.0, 5951.0, 1.0]]);
        assert_eq!(dataset.labels, vec![1, 0]);
        assert_eq!(dataset.label_encoding, LabelEncoding::Text);
        assert_eq!(dataset.class_balance(), (1, 1));
    }

    #[test]
    fn numeric_labels_are_used_without_remapping() {
        let text = "Age,Class\n30,1\n45,0\n22,1.0\n";
        let dataset = parse_csv(text, "Class").unwrap();
        assert_eq!(dataset.labels, vec![1, 0, 1]);
        assert_eq!(dataset.label_encoding, LabelEncoding::Numeric);
    }

    #[test]
    fn quoted_header_and_crlf_are_handled() {
        let text = "\"Age\",\"Purpose.NewCar\",\"Class\"\r\n30,1,\"Good\"\r\n\r\n";
        let dataset = parse_csv(text, "Class").unwrap();
        assert_eq!(dataset.feature_names, vec!["Age", "Purpose.NewCar"]);
        assert_eq!(dataset.rows.len(), 1);
    }

    #[test]
    fn leading_byte_order_mark_is_dropped() {
        let dataset = parse_csv("\u{feff}Age,Class\n1,Good\n", "Class").unwrap();
        assert_eq!(dataset.feature_names, vec!["Age"]);
        let dataset = parse_csv("\u{feff}Class,Age\n1,30\n", "Class").unwrap();
        assert_eq!(dataset.feature_names, vec!["Age"]);
        assert_eq!(dataset.labels, vec![1]);
    }

    #[test]
    fn missing_label_column_is_an_error() {
        let err = parse_csv("Age,Amount\n30,1000\n", "Class").unwrap_err();
        assert!(matches!(err, DatasetError::MissingLabelColumn(name) if name == "Class"));
    }

    #[test]
    fn bad_cells_report_their_line() {
        let err = parse_csv("Age,Class\n30,Good\nabc,Bad\n", "Class").unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { line: 3, .. }));

        let err = parse_csv("Age,Class\n30,Maybe\n", "Class").unwrap_err();
        assert!(matches!(err, DatasetError::InvalidLabel { line: 2, .. }));

        let err = parse_csv("Age,Class\n30\n", "Class").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RowWidth {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(matches!(parse_csv("Age,Class\n", "Class"), Err(DatasetError::Empty)));
        assert!(matches!(parse_csv("", "Class"), Err(DatasetError::Empty)));
    }

    #[test]
    fn split_fields_handles_escaped_quotes() {
        let fields = split_fields(r#"a,"b,c","say ""hi""""#, 1).unwrap();
        assert_eq!(fields, vec!["a", "b,c", r#"say "hi""#]);
        assert!(split_fields(r#"a,"open"#, 4).is_err());
    }
}
