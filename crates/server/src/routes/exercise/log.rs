use axum::{extract::Query, Json};
use axum_extra::extract::WithRejection;
use shared::{
    api::payloads::{ExerciseCount, LogQuery, LogResponse, UserLog},
    model::{Exercise, User},
    types::Uuid,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError};

/// Without a user this is a count over every exercise. With one it is that
/// user's filtered log
#[instrument(skip(conn))]
pub async fn log(
    DatabaseConnection(conn): DatabaseConnection,
    WithRejection(Query(query), _): WithRejection<Query<LogQuery>, AppError>,
) -> Result<Json<LogResponse>, AppError> {
    let Some(user_id) = query.user_id() else {
        let count = conn.interact(|conn| Exercise::count(conn)).await??;
        return Ok(Json(LogResponse::Count(ExerciseCount { count })));
    };

    let user_id = Uuid::parse(user_id)?;
    let filter = query.date_filter()?;
    let limit = query.limit();

    let user_log = conn
        .interact(move |conn| {
            let user = User::fetch_by_id(conn, &user_id)?
                .ok_or_else(|| AppError::unprocessable(format!("No user with id {user_id}")))?;
            let exercises = Exercise::fetch_filtered(conn, &user_id, filter)?;

            Ok::<_, AppError>(UserLog::new(user, exercises, limit))
        })
        .await??;

    Ok(Json(LogResponse::User(user_log)))
}
