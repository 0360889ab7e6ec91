use axum::{
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::WithRejection;
use rusqlite::ErrorCode;
use shared::{
    api::{
        payloads::{NewUserRequest, UserSummary},
        USERNAME_TAKEN,
    },
    model::{NewUser, User},
};
use tracing::{debug, instrument};

use crate::{db::DatabaseConnection, AppError};

#[derive(Debug)]
pub enum NewUserResponse {
    Created(UserSummary),
    Taken,
}

impl IntoResponse for NewUserResponse {
    fn into_response(self) -> Response {
        match self {
            NewUserResponse::Created(user) => Json(user).into_response(),
            NewUserResponse::Taken => USERNAME_TAKEN.into_response(),
        }
    }
}

#[instrument(skip(conn))]
pub async fn new_user(
    DatabaseConnection(conn): DatabaseConnection,
    WithRejection(Form(request), _): WithRejection<Form<NewUserRequest>, AppError>,
) -> Result<NewUserResponse, AppError> {
    let username = request.username().to_owned();

    let created = conn
        .interact(move |conn| {
            if User::fetch_by_username(conn, &username)?.is_some() {
                return Ok::<_, rusqlite::Error>(None);
            }

            // A concurrent registration can still win between the lookup and
            // the insert. The unique index turns that into a constraint error
            match User::create(conn, NewUser::new(username)) {
                Ok(user) => Ok(Some(user)),
                Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await??;

    Ok(match created {
        Some(user) => {
            debug!(id = %user.id, "Created user");
            NewUserResponse::Created(user.into())
        }
        None => NewUserResponse::Taken,
    })
}
