use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{AvatarError, DirectoryError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AvatarError> for ApiError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::StudentNotFound(_) | AvatarError::AvatarNotFound(_) => {
                Self::not_found(err.to_string())
            }
            AvatarError::InvalidInput(_) => Self::bad_request(err.to_string()),
            AvatarError::StorageInit { .. }
            | AvatarError::ImageReadFailure { .. }
            | AvatarError::Io(_)
            | AvatarError::Storage(_) => {
                tracing::error!("Avatar operation failed: {}", err);
                Self::internal("avatar operation failed")
            }
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::StudentNotFound(_) | DirectoryError::FacultyNotFound(_) => {
                Self::not_found(err.to_string())
            }
            DirectoryError::InvalidInput(_) => Self::bad_request(err.to_string()),
            DirectoryError::Storage(ref message) => {
                tracing::error!("Database error: {}", message);
                Self::internal("database operation failed")
            }
        }
    }
}
