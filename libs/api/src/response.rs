use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::NoEventsToday => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "data": "There are no events for today!" })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Server(message) => {
                error!(task = "api response", err = message);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, repository::RepositoryError> {
    fn into_response(self) -> ApiResponse<T> {
        self.map_err(|e| ApiError::Server(e.to_string()))
    }
}
