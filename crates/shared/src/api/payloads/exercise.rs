use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{parse_date, DateParseError, Exercise},
    types::Uuid,
};

/// Form body of the add exercise route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

impl AddExerciseRequest {
    /// `None` when the date was left out or blank
    pub fn date(&self) -> Result<Option<DateTime<Utc>>, DateParseError> {
        non_empty(&self.date).map(parse_date).transpose()
    }
}

/// Response of the add exercise route. `_id` and `user_uuid` both carry the
/// owner's id, `id` is the new exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseResponse {
    #[serde(rename = "_id")]
    pub user_id: Uuid,
    pub user_uuid: Uuid,
    pub id: i64,
    pub description: String,
    pub duration: String,
    pub date: DateTime<Utc>,
}

impl From<Exercise> for AddExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            user_id: exercise.user_uuid,
            user_uuid: exercise.user_uuid,
            id: exercise.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.exercise_date,
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
