//! Query parameter types for API handlers.

use serde::Deserialize;
use tandem_core::error::CoreError;
use tandem_core::exercise::ExerciseFilter;

/// Exercise list filters (`?language=&type=&status=`).
///
/// Kept as raw strings so an unknown value produces the standard JSON
/// validation error rather than a plain-text extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseListParams {
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub status: Option<String>,
}

impl ExerciseListParams {
    pub fn into_filter(self) -> Result<ExerciseFilter, CoreError> {
        Ok(ExerciseFilter {
            language: self.language.as_deref().map(str::parse).transpose()?,
            exercise_type: self.exercise_type.as_deref().map(str::parse).transpose()?,
            status: self.status.as_deref().map(str::parse).transpose()?,
        })
    }
}
