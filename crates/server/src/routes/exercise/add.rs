use axum::{
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::WithRejection;
use shared::{
    api::{
        payloads::{AddExerciseRequest, AddExerciseResponse},
        USER_DOES_NOT_EXIST,
    },
    model::{Exercise, NewExercise, User},
    types::Uuid,
};
use tracing::{debug, instrument};

use crate::{db::DatabaseConnection, AppError};

#[derive(Debug)]
pub enum AddExerciseOutcome {
    Added(AddExerciseResponse),
    UnknownUser,
}

impl IntoResponse for AddExerciseOutcome {
    fn into_response(self) -> Response {
        match self {
            AddExerciseOutcome::Added(exercise) => Json(exercise).into_response(),
            AddExerciseOutcome::UnknownUser => USER_DOES_NOT_EXIST.into_response(),
        }
    }
}

#[instrument(skip(conn))]
pub async fn add(
    DatabaseConnection(conn): DatabaseConnection,
    WithRejection(Form(request), _): WithRejection<Form<AddExerciseRequest>, AppError>,
) -> Result<AddExerciseOutcome, AppError> {
    let user_id = Uuid::parse(request.user_id.as_deref().unwrap_or_default().trim())?;
    let date = request.date()?;
    let description = request
        .description
        .ok_or_else(|| AppError::unprocessable("Missing description"))?;
    let duration = request
        .duration
        .ok_or_else(|| AppError::unprocessable("Missing duration"))?;

    let exercise = conn
        .interact(move |conn| {
            if User::fetch_by_id(conn, &user_id)?.is_none() {
                return Ok::<_, rusqlite::Error>(None);
            }

            let new_exercise = NewExercise::new(description, duration, date, user_id);
            Exercise::create(conn, new_exercise).map(Some)
        })
        .await??;

    Ok(match exercise {
        Some(exercise) => {
            debug!(id = exercise.id, user = %exercise.user_uuid, "Added exercise");
            AddExerciseOutcome::Added(exercise.into())
        }
        None => AddExerciseOutcome::UnknownUser,
    })
}
