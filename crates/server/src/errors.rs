use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::HookError;
use shared::api::error::ErrorEnvelope;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned from handlers. Clients only ever see the fixed envelope for
/// `code`; `detail` goes to the log
pub struct AppError {
    pub code: StatusCode,
    pub detail: String,
}

impl AppError {
    pub fn new<S: Into<String>>(code: StatusCode, detail: S) -> Self {
        AppError { code, detail: detail.into() }
    }

    pub fn unprocessable<S: Into<String>>(detail: S) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn internal<S: Into<String>>(detail: S) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.detail)
    }
}

// Render AppError into the error envelope
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.is_server_error() {
            error!(code = %self.code, detail = %self.detail, "request failed");
        } else {
            warn!(code = %self.code, detail = %self.detail, "request rejected");
        }
        (self.code, Json(ErrorEnvelope::new(self.code))).into_response()
    }
}

// This enables using `?` on functions that return `Result<_, Error>` to turn
// them into `Result<_, AppError>`. Anything that goes wrong while handling a
// request is reported as unprocessable
impl<E> From<E> for AppError
where
    E: Into<Box<dyn std::error::Error>>,
{
    #[track_caller]
    fn from(err: E) -> Self {
        AppError::unprocessable(format!("{:?}", err.into()))
    }
}

impl From<AppError> for HookError {
    fn from(err: AppError) -> Self {
        Self::Message(err.to_string())
    }
}

/// Failures while preparing the database before serving
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] rusqlite_migration::Error),
    #[error("Schema version {0} is outside of known schema migrations. Manual intervention required")]
    UnknownSchemaVersion(usize),
    #[error("Pool config error: {0}")]
    PoolConfig(#[from] deadpool_sqlite::ConfigError),
    #[error("Pool build error: {0}")]
    PoolBuild(#[from] deadpool_sqlite::BuildError),
}
