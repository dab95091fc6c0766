use std::collections::BTreeMap;

use super::schema::FeatureSchema;

/// One applicant encoded as `column -> value`, keyed exactly by the schema columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantRecord {
    values: BTreeMap<String, f32>,
}

impl ApplicantRecord {
    /// Every schema column present and set to 0.
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            values: schema
                .columns()
                .iter()
                .map(|name| (name.clone(), 0.0))
                .collect(),
        }
    }

    /// Set an existing column. Returns `false` when the column is not part of
    /// the schema; the record is left unchanged in that case.
    pub fn set(&mut self, column: &str, value: f32) -> bool {
        match self.values.get_mut(column) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, column: &str) -> Option<f32> {
        self.values.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Lay the record out in the schema's positional order.
    ///
    /// Columns absent from the record read as 0.
    pub fn to_row(&self, schema: &FeatureSchema) -> Vec<f32> {
        schema
            .columns()
            .iter()
            .map(|name| self.get(name).unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["B".into(), "A".into(), "C".into()]).unwrap()
    }

    #[test]
    fn zeroed_record_mirrors_schema() {
        let record = ApplicantRecord::zeroed(&schema());
        assert_eq!(record.len(), 3);
        assert!(record.iter().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn set_ignores_unknown_columns() {
        let mut record = ApplicantRecord::zeroed(&schema());
        assert!(record.set("A", 2.5));
        assert!(!record.set("Z", 1.0));
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("Z"), None);
    }

    #[test]
    fn row_follows_schema_order() {
        let schema = schema();
        let mut record = ApplicantRecord::zeroed(&schema);
        record.set("A", 1.0);
        record.set("C", 3.0);
        assert_eq!(record.to_row(&schema), vec![0.0, 1.0, 3.0]);
    }
}
