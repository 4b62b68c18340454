// Error taxonomy and HTTP status mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::engine::EngineError;
use crate::models::Envelope;

/// Fixed failure classification; every error a route can surface carries
/// exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request rejected before any engine call was made.
    Validation,
    NotFound,
    Conflict,
    /// The engine could not be reached or did not answer the liveness probe.
    EngineUnavailable,
    /// The engine answered with an error we do not classify further.
    EngineError,
    Internal,
}

impl ErrorKind {
    pub fn http_status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::EngineUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::EngineError | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A classified failure. Constructed once at the failure site and carried
/// unchanged into the response envelope.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::EngineUnavailable,
            message: message.into(),
        }
    }

    pub fn engine(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::EngineError,
            message: message.into(),
        }
    }

    /// Catch-all for unexpected failures. The message is fixed so stack
    /// traces, paths and credentials never reach a client.
    pub fn internal() -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: "internal error".into(),
        }
    }

    pub fn http_status(&self) -> StatusCode {
        self.kind.http_status()
    }
}

/// Engine-stage failures keep the daemon's message verbatim; only the kind
/// is re-typed. Validation never originates here: an engine call that fails
/// on bad input stays an engine error.
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotFound(msg) => ApiError::not_found(msg),
            EngineError::Conflict(msg) => ApiError::conflict(msg),
            EngineError::Unavailable(msg) => ApiError::unavailable(msg),
            EngineError::Api(msg) => ApiError::engine(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        (status, Json(Envelope::<()>::failure(self.message))).into_response()
    }
}
