use log::{debug, warn};

use crate::features::schema::FeatureSchema;
use crate::features::FeatureError;

/// Model input in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
    // One-hot names that were requested but are absent from the schema.
    missing_one_hot: Vec<String>,
}

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Category/value combinations the schema had no column for. Their slot is
    /// left at zero, so the prediction ignores that input.
    pub fn missing_one_hot(&self) -> &[String] {
        &self.missing_one_hot
    }
}

/// Fills a zero vector slot by slot. Numeric features must exist in the schema;
/// one-hot features that don't are recorded and otherwise skipped.
pub struct FeatureVectorBuilder<'s> {
    schema: &'s FeatureSchema,
    values: Vec<f64>,
    missing_one_hot: Vec<String>,
}

impl<'s> FeatureVectorBuilder<'s> {
    pub fn new(schema: &'s FeatureSchema) -> Self {
        FeatureVectorBuilder {
            schema,
            values: vec![0.0; schema.len()],
            missing_one_hot: Vec::new(),
        }
    }

    pub fn numeric(&mut self, name: &str, value: f64) -> Result<&mut Self, FeatureError> {
        let pos = self
            .schema
            .position(name)
            .ok_or_else(|| FeatureError::UnknownFeature(name.to_string()))?;
        self.values[pos] = value;
        Ok(self)
    }

    /// Sets the `<category>_<value>` slot to 1.
    pub fn one_hot(&mut self, category: &str, value: &str) -> &mut Self {
        let name = format!("{}_{}", category, value);
        match self.schema.position(&name) {
            Some(pos) => self.values[pos] = 1.0,
            None => {
                warn!("{} has no column in the feature schema, leaving it unset", name);
                self.missing_one_hot.push(name);
            }
        }
        self
    }

    pub fn build(&self) -> FeatureVector {
        debug!("assembled feature vector {:?}", self.values);
        FeatureVector {
            values: self.values.clone(),
            missing_one_hot: self.missing_one_hot.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(["每周学习时长（小时）", "性别_男", "专业_大数据管理"]).unwrap()
    }

    #[test]
    fn numeric_and_one_hot() {
        let schema = schema();
        let vector = FeatureVectorBuilder::new(&schema)
            .numeric("每周学习时长（小时）", 15.0)
            .unwrap()
            .one_hot("性别", "男")
            .one_hot("专业", "大数据管理")
            .build();
        assert_eq!(vector.values(), [15.0, 1.0, 1.0]);
        assert!(vector.missing_one_hot().is_empty());
    }

    #[test]
    fn absent_one_hot_stays_zero() {
        let schema = schema();
        let vector = FeatureVectorBuilder::new(&schema)
            .numeric("每周学习时长（小时）", 15.0)
            .unwrap()
            .one_hot("性别", "女")
            .one_hot("专业", "大数据管理")
            .build();
        assert_eq!(vector.values(), [15.0, 0.0, 1.0]);
        assert_eq!(vector.missing_one_hot(), ["性别_女"]);
    }

    #[test]
    fn unknown_numeric_feature() {
        let schema = schema();
        let mut builder = FeatureVectorBuilder::new(&schema);
        assert_eq!(
            builder.numeric("上课出勤率", 0.9).err(),
            Some(FeatureError::UnknownFeature("上课出勤率".to_string()))
        );
        assert_eq!(builder.build().values(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn untouched_builder_is_zero() {
        let schema = schema();
        let vector = FeatureVectorBuilder::new(&schema).build();
        assert_eq!(vector.len(), 3);
        assert!(vector.values().iter().all(|v| *v == 0.0));
    }
}
