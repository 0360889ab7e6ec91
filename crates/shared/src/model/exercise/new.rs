use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use exemplar::Model;

use crate::types::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub description: String,
    pub duration: String,
    pub exercise_date: DateTime<Utc>,
    pub user_uuid: Uuid,
}

impl NewExercise {
    /// `exercise_date` of `None` means now
    pub fn new<D: Into<String>, T: Into<String>>(
        description: D,
        duration: T,
        exercise_date: Option<DateTime<Utc>>,
        user_uuid: Uuid,
    ) -> Self {
        Self {
            description: description.into(),
            duration: duration.into(),
            exercise_date: exercise_date.unwrap_or_else(Utc::now),
            user_uuid,
        }
    }
}
