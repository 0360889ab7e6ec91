use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: StatusCode) -> Self {
        Self {
            success: false,
            error: code.as_u16(),
            message: status_message(code).to_owned(),
        }
    }
}

impl From<StatusCode> for ErrorEnvelope {
    fn from(code: StatusCode) -> Self {
        Self::new(code)
    }
}

/// The fixed message clients see for a given status. Codes without a
/// dedicated message fall back to the canonical reason phrase
pub fn status_message(code: StatusCode) -> &'static str {
    match code {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::UNAUTHORIZED => "Not authorized",
        StatusCode::FORBIDDEN => "Do not have permissions",
        StatusCode::NOT_FOUND => "Not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        StatusCode::INTERNAL_SERVER_ERROR => "Server error",
        other => other.canonical_reason().unwrap_or("Unknown error"),
    }
}
