use axum::http::{Method, StatusCode, Uri};

use crate::AppError;

/// No route matched the path
pub async fn not_found(uri: Uri) -> AppError {
    AppError::new(StatusCode::NOT_FOUND, format!("No route for {uri}"))
}

/// The path is known but not for this method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::new(StatusCode::METHOD_NOT_ALLOWED, format!("{method} is not allowed on {uri}"))
}
