use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::non_empty;
use crate::{
    model::{parse_date, DateFilter, DateParseError, Exercise, User},
    types::Uuid,
};

/// Query string of the log route. Everything stays a string until used so a
/// bad `limit` can be ignored rather than rejecting the request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    pub fn user_id(&self) -> Option<&str> {
        non_empty(&self.user_id)
    }

    pub fn date_filter(&self) -> Result<DateFilter, DateParseError> {
        let from = non_empty(&self.from).map(parse_date).transpose()?;
        let to = non_empty(&self.to).map(parse_date).transpose()?;
        Ok(DateFilter::new(from, to))
    }

    /// Only a positive integer limits the log
    pub fn limit(&self) -> Option<usize> {
        non_empty(&self.limit)
            .and_then(|limit| limit.parse::<usize>().ok())
            .filter(|limit| *limit > 0)
    }
}

/// Short form of an exercise used in logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: String,
    pub date: DateTime<Utc>,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.exercise_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCount {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl UserLog {
    /// Keeps at most `limit` exercises, in the order given
    pub fn new(user: User, exercises: Vec<Exercise>, limit: Option<usize>) -> Self {
        let log: Vec<LogEntry> = exercises
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(LogEntry::from)
            .collect();

        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogResponse {
    User(UserLog),
    Count(ExerciseCount),
}
