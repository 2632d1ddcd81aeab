use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::config::{read_json, LoadError};
use crate::features::FeatureError;

/// On-disk form of a feature schema.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SchemaFile {
    pub feature_names: Vec<String>,
    /// Allowed values for each categorical input, in display order.
    #[serde(default)]
    pub unique_values: BTreeMap<String, Vec<String>>,
}

/// The ordered feature names a trained model expects, plus the values each
/// categorical input may take.
#[derive(Deserialize, Debug, Clone)]
#[serde(try_from = "SchemaFile")]
pub struct FeatureSchema {
    names: Vec<String>,
    positions: HashMap<String, usize>,
    unique_values: BTreeMap<String, Vec<String>>,
}

impl TryFrom<SchemaFile> for FeatureSchema {
    type Error = FeatureError;

    fn try_from(file: SchemaFile) -> Result<Self, Self::Error> {
        let mut schema = FeatureSchema::new(file.feature_names)?;
        schema.unique_values = file.unique_values;
        Ok(schema)
    }
}

impl FeatureSchema {
    pub fn new<I, S>(names: I) -> Result<Self, FeatureError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), i).is_some() {
                return Err(FeatureError::DuplicateFeature(name.clone()));
            }
        }
        Ok(FeatureSchema {
            names,
            positions,
            unique_values: BTreeMap::new(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        read_json(path)
    }

    pub fn with_unique_values<S: Into<String>>(mut self, category: S, values: Vec<String>) -> Self {
        self.unique_values.insert(category.into(), values);
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Values offered for `category`, or an empty slice for an unknown category.
    pub fn unique_values(&self, category: &str) -> &[String] {
        self.unique_values
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_order() {
        let schema = FeatureSchema::new(["a", "b", "c"]).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.position("a"), Some(0));
        assert_eq!(schema.position("c"), Some(2));
        assert_eq!(schema.position("d"), None);

        let schema = schema.with_unique_values("major", vec!["a".to_string()]);
        assert_eq!(schema.unique_values("major"), ["a"]);
        assert_eq!(schema.names(), ["a", "b", "c"]);
    }

    #[test]
    fn duplicates_are_rejected() {
        assert_eq!(
            FeatureSchema::new(["a", "b", "a"]).unwrap_err(),
            FeatureError::DuplicateFeature("a".to_string())
        );
    }

    #[test]
    fn parse_schema() {
        let schema: FeatureSchema = serde_json::from_str(
            r#"{
                "feature_names": ["每周学习时长（小时）", "性别_男", "性别_女"],
                "unique_values": { "性别": ["男", "女"] }
            }"#,
        )
        .unwrap();
        assert_eq!(schema.position("性别_女"), Some(2));
        assert_eq!(schema.unique_values("性别"), ["男", "女"]);
        assert!(schema.unique_values("专业").is_empty());
    }

    #[test]
    fn parse_rejects_duplicates() {
        let result = serde_json::from_str::<FeatureSchema>(r#"{ "feature_names": ["x", "x"] }"#);
        assert!(result.is_err());
    }
}
