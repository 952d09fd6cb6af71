use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::services::ActivityError;

/// Errors surfaced by HTTP handlers, translated into JSON error bodies
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::MissingWindowBounds | ActivityError::InvalidDate { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            ActivityError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
            ActivityError::MissingUserData(_) => {
                ApiError::NotFound("Can not get user data".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "Bad request", message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "Not found", message),
            ApiError::Auth(err) => return err.into_response(),
        };

        let body = Json(json!({
            "error": error_message,
            "message": message,
        }));

        (status, body).into_response()
    }
}
