//! The grade-prediction form and the feature names its fields map to.

use log::debug;

use crate::features::builder::{FeatureVector, FeatureVectorBuilder};
use crate::features::schema::FeatureSchema;
use crate::features::FeatureError;

pub const STUDY_HOURS: &str = "每周学习时长（小时）";
pub const ATTENDANCE: &str = "上课出勤率";
pub const MIDTERM_SCORE: &str = "期中考试分数";
pub const HOMEWORK_RATE: &str = "作业完成率";

pub const GENDER: &str = "性别";
pub const MAJOR: &str = "专业";

const MAX_STUDY_HOURS: f64 = 50.0;
const MAX_SCORE: f64 = 100.0;
const MAX_PERCENT: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentInputs {
    /// Shown alongside the result; not a model input.
    pub student_id: Option<String>,
    pub study_hours: f64,
    /// Whole percent, 0-100.
    pub attendance_percent: u8,
    pub midterm_score: f64,
    /// Whole percent, 0-100.
    pub homework_percent: u8,
    pub gender: String,
    pub major: String,
}

impl StudentInputs {
    /// A zero in any numeric field means the form was left incomplete.
    pub fn validate(&self) -> Result<(), FeatureError> {
        check_range(STUDY_HOURS, self.study_hours, MAX_STUDY_HOURS)?;
        check_range(ATTENDANCE, self.attendance_percent.into(), MAX_PERCENT.into())?;
        check_range(MIDTERM_SCORE, self.midterm_score, MAX_SCORE)?;
        check_range(HOMEWORK_RATE, self.homework_percent.into(), MAX_PERCENT.into())?;
        Ok(())
    }

    pub fn attendance(&self) -> f64 {
        f64::from(self.attendance_percent) / 100.0
    }

    pub fn homework_rate(&self) -> f64 {
        f64::from(self.homework_percent) / 100.0
    }

    /// Validates the form and lays it out as `schema` orders it. Rates are passed as
    /// fractions, matching how the model was trained.
    pub fn assemble(&self, schema: &FeatureSchema) -> Result<FeatureVector, FeatureError> {
        self.validate()?;
        debug!(
            "assembling features for student {}",
            self.student_id.as_deref().unwrap_or("<anonymous>")
        );
        let vector = FeatureVectorBuilder::new(schema)
            .numeric(STUDY_HOURS, self.study_hours)?
            .numeric(ATTENDANCE, self.attendance())?
            .numeric(MIDTERM_SCORE, self.midterm_score)?
            .numeric(HOMEWORK_RATE, self.homework_rate())?
            .one_hot(GENDER, &self.gender)
            .one_hot(MAJOR, &self.major)
            .build();
        Ok(vector)
    }
}

fn check_range(name: &'static str, value: f64, max: f64) -> Result<(), FeatureError> {
    if value == 0.0 {
        return Err(FeatureError::IncompleteInputs(name));
    }
    if !(0.0..=max).contains(&value) {
        return Err(FeatureError::InputOutOfRange {
            name,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(())
}
