use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::config::{read_json, LoadError};
use crate::features::builder::FeatureVector;
use crate::features::inputs::StudentInputs;
use crate::features::schema::FeatureSchema;
use crate::features::FeatureError;

/// A trained model. Callers must pass a vector of the width and order the model was
/// trained with.
pub trait Predictor {
    fn predict(&self, features: &[f64]) -> f64;
}

impl<F> Predictor for F
where
    F: Fn(&[f64]) -> f64,
{
    fn predict(&self, features: &[f64]) -> f64 {
        self(features)
    }
}

/// `intercept + Σ weights[i] * features[i]`, stored as JSON.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    pub intercept: f64,
    pub weights: Vec<f64>,
}

impl LinearPredictor {
    pub fn for_schema(self, schema: &FeatureSchema) -> Result<Self, FeatureError> {
        if self.weights.len() != schema.len() {
            return Err(FeatureError::WidthMismatch {
                expected: self.weights.len(),
                actual: schema.len(),
            });
        }
        Ok(self)
    }

    pub fn from_file(path: &Path, schema: &FeatureSchema) -> Result<Self, LoadError> {
        let model: LinearPredictor = read_json(path)?;
        model.for_schema(schema).map_err(|source| LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.weights.len());
        self.intercept
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

/// Rounds the exact binary value to one decimal, ties to even: 72.25 is stored
/// just below the tie and gives 72.2, 0.25 is an exact tie and gives 0.2.
pub fn round_to_tenths(score: f64) -> f64 {
    format!("{:.1}", score).parse().unwrap_or(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Rounded to one decimal place.
    pub score: f64,
    pub verdict: Verdict,
}

impl Prediction {
    pub fn new(raw_score: f64, pass_mark: f64) -> Self {
        let score = round_to_tenths(raw_score);
        let verdict = if score >= pass_mark {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Prediction { score, verdict }
    }
}

/// A schema together with the model trained on it.
pub struct GradeModel<P> {
    schema: FeatureSchema,
    predictor: P,
    pass_mark: f64,
}

impl<P: Predictor> GradeModel<P> {
    pub fn new(schema: FeatureSchema, predictor: P, pass_mark: f64) -> Self {
        GradeModel {
            schema,
            predictor,
            pass_mark,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn predict_vector(&self, features: &FeatureVector) -> Prediction {
        Prediction::new(self.predictor.predict(features.values()), self.pass_mark)
    }

    pub fn predict(&self, inputs: &StudentInputs) -> Result<Prediction, FeatureError> {
        let features = inputs.assemble(&self.schema)?;
        let prediction = self.predict_vector(&features);
        info!(
            "predicted {} ({:?}) for student {}",
            prediction.score,
            prediction.verdict,
            inputs.student_id.as_deref().unwrap_or("<anonymous>")
        );
        Ok(prediction)
    }
}

impl GradeModel<LinearPredictor> {
    pub fn load(schema_path: &Path, model_path: &Path, pass_mark: f64) -> Result<Self, LoadError> {
        let schema = FeatureSchema::from_file(schema_path)?;
        let predictor = LinearPredictor::from_file(model_path, &schema)?;
        Ok(GradeModel::new(schema, predictor, pass_mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::inputs::{ATTENDANCE, HOMEWORK_RATE, MIDTERM_SCORE, STUDY_HOURS};

    fn schema() -> FeatureSchema {
        FeatureSchema::new([STUDY_HOURS, ATTENDANCE, MIDTERM_SCORE, HOMEWORK_RATE, "性别_男"]).unwrap()
    }

    fn inputs(midterm_score: f64) -> StudentInputs {
        StudentInputs {
            student_id: None,
            study_hours: 10.0,
            attendance_percent: 50,
            midterm_score,
            homework_percent: 50,
            gender: "男".to_string(),
            major: "人工智能".to_string(),
        }
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_tenths(72.34), 72.3);
        assert_eq!(round_to_tenths(72.36), 72.4);
        assert_eq!(round_to_tenths(-1.04), -1.0);
    }

    #[test]
    fn rounding_follows_exact_value_and_ties_to_even() {
        assert_eq!(round_to_tenths(72.25), 72.2);
        assert_eq!(round_to_tenths(0.25), 0.2);
        assert_eq!(round_to_tenths(0.35), 0.3);
        assert_eq!(round_to_tenths(2.675), 2.7);
        assert_eq!(round_to_tenths(-0.25), -0.2);
        assert!(round_to_tenths(f64::NAN).is_nan());
    }

    #[test]
    fn verdict_uses_rounded_score() {
        assert_eq!(Prediction::new(59.96, 60.0).verdict, Verdict::Pass);
        assert_eq!(Prediction::new(59.94, 60.0).verdict, Verdict::Fail);
        assert_eq!(Prediction::new(59.94, 60.0).score, 59.9);
    }

    #[test]
    fn linear_model_width_must_match() {
        let model = LinearPredictor {
            intercept: 0.0,
            weights: vec![1.0; 3],
        };
        assert_eq!(
            model.for_schema(&schema()),
            Err(FeatureError::WidthMismatch {
                expected: 3,
                actual: 5
            })
        );
    }

    #[test]
    fn linear_model_prediction() {
        // Only the midterm score and the gender column carry weight.
        let model = LinearPredictor {
            intercept: 10.0,
            weights: vec![0.0, 0.0, 0.5, 0.0, 2.0],
        }
        .for_schema(&schema())
        .unwrap();
        let grades = GradeModel::new(schema(), model, 60.0);

        let prediction = grades.predict(&inputs(100.0)).unwrap();
        assert_eq!(prediction.score, 62.0);
        assert_eq!(prediction.verdict, Verdict::Pass);

        let prediction = grades.predict(&inputs(40.0)).unwrap();
        assert_eq!(prediction.score, 32.0);
        assert_eq!(prediction.verdict, Verdict::Fail);
    }

    #[test]
    fn closure_predictor_sees_schema_order() {
        let grades = GradeModel::new(schema(), |features: &[f64]| features.iter().sum::<f64>(), 60.0);
        // 10 + 0.5 + 70 + 0.5 + 1
        let prediction = grades.predict(&inputs(70.0)).unwrap();
        assert_eq!(prediction.score, 82.0);
    }

    #[test]
    fn incomplete_inputs_never_reach_the_model() {
        let grades = GradeModel::new(
            schema(),
            |_: &[f64]| -> f64 { panic!("model must not be called") },
            60.0,
        );
        assert_eq!(
            grades.predict(&inputs(0.0)).unwrap_err(),
            FeatureError::IncompleteInputs(MIDTERM_SCORE)
        );
    }
}
