use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{Error, ErrorCode};

#[derive(Debug)]
pub struct ApiError(pub Error);
pub type AppResult<T> = Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.error_code {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self.0)).into_response()
    }
}

/// Maps an extractor rejection to a BadRequest body, logging axum's reason.
pub fn rejected(user_feedback: &'static str, rejection: impl std::fmt::Display) -> ApiError {
    log::warn!(reason:% = rejection; "{}", user_feedback);
    ApiError(Error::bad_request(user_feedback))
}
