use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::ErrorCode;
use serde::Serialize;
use serde_json::json;

use crate::error::Error;
use crate::upload::UploadError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

/// API error that converts to a proper HTTP response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            Error::Unauthorized => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            Error::BadRequest(message) => Self::bad_request(message),
            Error::Upload(UploadError::InvalidFilename(name)) => {
                Self::bad_request(format!("invalid filename: {name}"))
            }
            Error::Database(rusqlite::Error::SqliteFailure(ref e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Self {
                    status: StatusCode::CONFLICT,
                    message: "conflicting record".to_string(),
                }
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                Self::internal("Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "data": null, "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(Error::NotFound("Song")).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(Error::Unauthorized).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(Error::BadRequest("nope".to_string())).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(Error::Upload(UploadError::InvalidFilename("..".to_string()))).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(Error::Config("redis password leaked".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn test_not_found_message_names_resource() {
        let err = ApiError::from(Error::NotFound("Singer album"));
        assert_eq!(err.message, "Singer album not found");
    }
}
