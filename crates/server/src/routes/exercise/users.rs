use axum::Json;
use shared::{
    api::payloads::{UserSummary, UsersResponse},
    model::User,
};
use tracing::instrument;

use crate::{db::DatabaseConnection, AppError};

#[instrument(skip(conn))]
pub async fn users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<UsersResponse>, AppError> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
