pub use builder::{FeatureVector, FeatureVectorBuilder};
pub use inputs::StudentInputs;
pub use predictor::{round_to_tenths, GradeModel, LinearPredictor, Prediction, Predictor, Verdict};
pub use schema::{FeatureSchema, SchemaFile};

mod builder;
pub mod inputs;
mod predictor;
mod schema;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("feature {0:?} is not in the schema")]
    UnknownFeature(String),
    #[error("feature {0:?} appears more than once in the schema")]
    DuplicateFeature(String),
    #[error("incomplete inputs: {0} must be set")]
    IncompleteInputs(&'static str),
    #[error("{name} = {value} is outside [{min}, {max}]")]
    InputOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("model expects {expected} features but the schema has {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}
